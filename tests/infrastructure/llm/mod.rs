mod gemini_client_test;
mod openai_client_test;
