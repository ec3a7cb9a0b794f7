use medbrief::application::ports::{LlmClient, LlmClientError};
use medbrief::infrastructure::llm::{OpenAiClient, SYSTEM_MESSAGE};

use crate::infrastructure::mock_server::start_mock_server;

const COMPLETION: &str = r#"{"choices":[{"message":{"role":"assistant","content":"總結\n體重: 65kg"}}]}"#;

#[tokio::test]
async fn given_successful_response_when_completing_then_returns_first_choice() {
    let server = start_mock_server("/chat/completions", 200, COMPLETION).await;
    let client = OpenAiClient::new(
        Some("sk-test".to_string()),
        Some(server.base_url.clone()),
        None,
    );

    let result = client.complete("prompt", "context").await;

    assert_eq!(result.unwrap(), "總結\n體重: 65kg");
}

#[tokio::test]
async fn given_request_when_completing_then_sends_system_and_user_messages() {
    let server = start_mock_server("/chat/completions", 200, COMPLETION).await;
    let client = OpenAiClient::new(
        Some("sk-test".to_string()),
        Some(format!("{}/", server.base_url)),
        None,
    );

    client.complete("prompt", "context").await.unwrap();

    let requests = server.requests.lock().unwrap();
    assert_eq!(
        requests[0].headers.get("authorization").unwrap(),
        "Bearer sk-test"
    );
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["model"], "gpt-4o-mini");
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][0]["content"], SYSTEM_MESSAGE);
    assert_eq!(body["messages"][1]["role"], "user");
    assert_eq!(body["messages"][1]["content"], "prompt\n\ncontext");
}

#[tokio::test]
async fn given_rate_limit_when_completing_then_returns_rate_limited() {
    let server = start_mock_server("/chat/completions", 429, "slow down").await;
    let client = OpenAiClient::new(
        Some("sk-test".to_string()),
        Some(server.base_url.clone()),
        None,
    );

    let result = client.complete("prompt", "context").await;

    assert!(matches!(result, Err(LlmClientError::RateLimited)));
}

#[tokio::test]
async fn given_server_error_when_completing_then_returns_retryable_error() {
    let server = start_mock_server("/chat/completions", 500, "oops").await;
    let client = OpenAiClient::new(
        Some("sk-test".to_string()),
        Some(server.base_url.clone()),
        None,
    );

    let error = client.complete("prompt", "context").await.unwrap_err();

    assert!(matches!(error, LlmClientError::ApiRequestFailed(_)));
    assert!(error.is_retryable());
}

#[tokio::test]
async fn given_empty_choices_when_completing_then_returns_invalid_response() {
    let server = start_mock_server("/chat/completions", 200, r#"{"choices":[]}"#).await;
    let client = OpenAiClient::new(
        Some("sk-test".to_string()),
        Some(server.base_url.clone()),
        None,
    );

    let result = client.complete("prompt", "context").await;

    assert!(matches!(result, Err(LlmClientError::InvalidResponse(_))));
}

#[tokio::test]
async fn given_no_api_key_when_completing_then_fails_without_request() {
    let server = start_mock_server("/chat/completions", 200, COMPLETION).await;
    let client = OpenAiClient::new(None, Some(server.base_url.clone()), None);

    let error = client.complete("prompt", "context").await.unwrap_err();

    assert!(matches!(error, LlmClientError::MissingCredential(_)));
    assert!(!error.is_retryable());
    assert!(server.requests.lock().unwrap().is_empty());
}
