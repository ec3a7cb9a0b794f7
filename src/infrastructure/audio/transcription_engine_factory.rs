use std::sync::Arc;

use serde::Deserialize;

use crate::application::ports::TranscriptionEngine;

use super::openai_whisper_engine::OpenAiWhisperEngine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptionProvider {
    #[default]
    OpenAi,
    Disabled,
}

pub struct TranscriptionEngineFactory;

impl TranscriptionEngineFactory {
    /// `None` when the provider is disabled or has no credential; video
    /// uploads then fail per file instead of at startup.
    pub fn create(
        provider: TranscriptionProvider,
        model: &str,
        language: &str,
        api_key: Option<String>,
        base_url: Option<String>,
    ) -> Option<Arc<dyn TranscriptionEngine>> {
        match provider {
            TranscriptionProvider::Disabled => None,
            TranscriptionProvider::OpenAi => {
                let Some(key) = api_key else {
                    tracing::warn!("No transcription API key configured; video uploads will fail");
                    return None;
                };
                let engine = OpenAiWhisperEngine::new(key, base_url, Some(model.to_string()))
                    .with_language(language);
                Some(Arc::new(engine))
            }
        }
    }
}
