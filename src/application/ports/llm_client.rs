use async_trait::async_trait;

/// Single-shot chat completion against one text-generation backend.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, prompt: &str, context: &str) -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("{0}")]
    MissingCredential(String),
}

impl LlmClientError {
    /// Missing credentials never succeed on a later attempt.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, Self::MissingCredential(_))
    }
}
