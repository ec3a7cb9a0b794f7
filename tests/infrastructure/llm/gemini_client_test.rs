use medbrief::application::ports::{LlmClient, LlmClientError};
use medbrief::infrastructure::llm::GeminiClient;

use crate::infrastructure::mock_server::start_mock_server;

const ROUTE: &str = "/models/gemini-2.0-flash:generateContent";
const GENERATED: &str =
    r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"建議"},{"text":"：多喝水"}]}}]}"#;

#[tokio::test]
async fn given_successful_response_when_completing_then_joins_candidate_parts() {
    let server = start_mock_server(ROUTE, 200, GENERATED).await;
    let client = GeminiClient::new(
        Some("g-key".to_string()),
        Some(server.base_url.clone()),
        None,
    );

    let result = client.complete("prompt", "context").await;

    assert_eq!(result.unwrap(), "建議：多喝水");
}

#[tokio::test]
async fn given_request_when_completing_then_sends_key_header_and_single_text_part() {
    let server = start_mock_server(ROUTE, 200, GENERATED).await;
    let client = GeminiClient::new(
        Some("g-key".to_string()),
        Some(server.base_url.clone()),
        None,
    );

    client.complete("prompt", "context").await.unwrap();

    let requests = server.requests.lock().unwrap();
    assert_eq!(requests[0].headers.get("x-goog-api-key").unwrap(), "g-key");
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["contents"][0]["parts"][0]["text"], "prompt\n\ncontext");
}

#[tokio::test]
async fn given_no_candidates_when_completing_then_returns_invalid_response() {
    let server = start_mock_server(ROUTE, 200, r#"{"candidates":[]}"#).await;
    let client = GeminiClient::new(
        Some("g-key".to_string()),
        Some(server.base_url.clone()),
        None,
    );

    let result = client.complete("prompt", "context").await;

    assert!(matches!(result, Err(LlmClientError::InvalidResponse(_))));
}

#[tokio::test]
async fn given_bad_request_when_completing_then_returns_api_error() {
    let server = start_mock_server(ROUTE, 400, r#"{"error":{"message":"bad"}}"#).await;
    let client = GeminiClient::new(
        Some("g-key".to_string()),
        Some(server.base_url.clone()),
        None,
    );

    let result = client.complete("prompt", "context").await;

    assert!(matches!(result, Err(LlmClientError::ApiRequestFailed(_))));
}

#[tokio::test]
async fn given_no_api_key_when_completing_then_returns_missing_credential() {
    let client = GeminiClient::new(None, Some("http://127.0.0.1:9".to_string()), None);

    let result = client.complete("prompt", "context").await;

    assert!(matches!(result, Err(LlmClientError::MissingCredential(_))));
}
