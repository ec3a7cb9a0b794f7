use serde_json::json;

use medbrief::domain::{Backend, GenerationResult};

#[test]
fn given_success_when_serialising_then_omits_error_and_index() {
    let result = GenerationResult::success(
        Backend::OpenAi,
        "# report".to_string(),
        Some("reports/report_20250101_000000.md".to_string()),
    );

    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({
            "status": "success",
            "model_used": "OpenAI-4o-mini",
            "report": "# report",
            "report_path": "reports/report_20250101_000000.md",
        })
    );
}

#[test]
fn given_failure_in_batch_when_serialising_then_includes_error_and_index() {
    let result = GenerationResult::failure(
        Backend::Gemini,
        "# report".to_string(),
        "boom".to_string(),
    )
    .with_index(2);

    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["status"], "error");
    assert_eq!(value["model_used"], "Gemini");
    assert_eq!(value["error"], "boom");
    assert_eq!(value["index"], 2);
    assert!(value.get("report_path").is_none());
}
