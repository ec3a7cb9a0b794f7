mod generation_result_test;
