use std::sync::Arc;

use tracing::{Instrument, Span};

use crate::application::ports::{LlmClient, LlmClientError, ReportStore, Sleeper};
use crate::application::services::{RetryPolicy, format_report};
use crate::domain::{
    Backend, CombinedText, DEFAULT_REPORT_IDENTIFIER, GenerationResult, Prompt, ReportName,
};

/// Prompt resolution, backend dispatch with retries, report formatting and
/// persistence for one combined text (or a batch of them).
pub struct GenerationService {
    openai: Arc<dyn LlmClient>,
    gemini: Arc<dyn LlmClient>,
    report_store: Arc<dyn ReportStore>,
    sleeper: Arc<dyn Sleeper>,
    retry_policy: RetryPolicy,
    report_identifier: String,
    span: Span,
}

impl GenerationService {
    pub fn new(
        openai: Arc<dyn LlmClient>,
        gemini: Arc<dyn LlmClient>,
        report_store: Arc<dyn ReportStore>,
        sleeper: Arc<dyn Sleeper>,
    ) -> Self {
        Self {
            openai,
            gemini,
            report_store,
            sleeper,
            retry_policy: RetryPolicy::default(),
            report_identifier: DEFAULT_REPORT_IDENTIFIER.to_string(),
            span: tracing::info_span!("generation_service"),
        }
    }

    pub fn with_retry_policy(mut self, retry_policy: RetryPolicy) -> Self {
        self.retry_policy = retry_policy;
        self
    }

    pub fn with_report_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.report_identifier = identifier.into();
        self
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub async fn generate(
        &self,
        combined_text: &CombinedText,
        caller_prompt: Option<&str>,
        backend: Backend,
    ) -> GenerationResult {
        let span = tracing::info_span!(parent: &self.span, "generate", backend = %backend);
        self.generate_one(combined_text, caller_prompt, backend)
            .instrument(span)
            .await
    }

    /// Items run one after another; a failed item never stops the batch.
    pub async fn generate_batch(
        &self,
        combined_texts: &[CombinedText],
        caller_prompt: Option<&str>,
        backend: Backend,
    ) -> Vec<GenerationResult> {
        let total = combined_texts.len();
        let mut results = Vec::with_capacity(total);

        for (i, text) in combined_texts.iter().enumerate() {
            let index = i + 1;
            let span = tracing::info_span!(
                parent: &self.span,
                "generate_batch_item",
                backend = %backend,
                index,
                total,
            );
            let result = self
                .generate_one(text, caller_prompt, backend)
                .instrument(span)
                .await;
            results.push(result.with_index(index));
        }

        results
    }

    async fn generate_one(
        &self,
        combined_text: &CombinedText,
        caller_prompt: Option<&str>,
        backend: Backend,
    ) -> GenerationResult {
        let prompt = Prompt::resolve(caller_prompt);
        tracing::info!(
            chars = combined_text.len(),
            default_prompt = prompt.is_default(),
            "Starting report generation"
        );

        match self.complete_with_retry(backend, &prompt, combined_text).await {
            Ok(raw) => {
                let report = format_report(&raw);
                let report_path = self.persist(&report).await;
                tracing::info!(report_path = ?report_path, "Report generated");
                GenerationResult::success(backend, report, report_path)
            }
            Err(e) => {
                let message = e.to_string();
                tracing::error!(error = %message, "Report generation failed");
                GenerationResult::failure(backend, format_report(&message), message)
            }
        }
    }

    fn client_for(&self, backend: Backend) -> &dyn LlmClient {
        match backend {
            Backend::OpenAi => self.openai.as_ref(),
            Backend::Gemini => self.gemini.as_ref(),
        }
    }

    async fn complete_with_retry(
        &self,
        backend: Backend,
        prompt: &Prompt,
        combined_text: &CombinedText,
    ) -> Result<String, GenerationError> {
        let client = self.client_for(backend);
        let max_attempts = self.retry_policy.max_attempts;
        let mut last_error = None;

        for attempt in 0..max_attempts {
            if let Some(delay) = self.retry_policy.delay_before(attempt) {
                tracing::info!(delay_ms = delay.as_millis() as u64, "Retrying after backoff");
                self.sleeper.sleep(delay).await;
            }

            tracing::info!(
                attempt = attempt + 1,
                max_attempts,
                "Requesting completion from {}",
                backend.vendor()
            );

            match client.complete(prompt.as_str(), combined_text.as_str()).await {
                Ok(text) => {
                    tracing::info!(attempt = attempt + 1, "Completion succeeded");
                    return Ok(text);
                }
                Err(e) if !e.is_retryable() => {
                    tracing::error!(error = %e, "Backend is not usable; not retrying");
                    return Err(GenerationError::Unavailable(e));
                }
                Err(e) => {
                    tracing::error!(attempt = attempt + 1, error = %e, "Completion attempt failed");
                    last_error = Some(e);
                }
            }
        }

        Err(GenerationError::Exhausted {
            vendor: backend.vendor(),
            attempts: max_attempts,
            source: last_error.unwrap_or_else(|| {
                LlmClientError::ApiRequestFailed("no attempt was made".to_string())
            }),
        })
    }

    async fn persist(&self, report: &str) -> Option<String> {
        let name = ReportName::new(&self.report_identifier, &chrono::Local::now());
        match self.report_store.save(&name, report).await {
            Ok(location) => Some(location),
            Err(e) => {
                tracing::error!(error = %e, report = %name, "Failed to save report");
                None
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("{0}")]
    Unavailable(LlmClientError),
    #[error("{vendor} processing failed after {attempts} attempts: {source}")]
    Exhausted {
        vendor: &'static str,
        attempts: u32,
        source: LlmClientError,
    },
}
