use std::sync::Arc;

use crate::application::ports::LlmClient;
use crate::domain::Backend;
use crate::presentation::config::LlmSettings;

use super::gemini_client::GeminiClient;
use super::openai_client::OpenAiClient;

pub struct LlmClientFactory;

impl LlmClientFactory {
    pub fn create(backend: Backend, settings: &LlmSettings) -> Arc<dyn LlmClient> {
        match backend {
            Backend::OpenAi => Arc::new(OpenAiClient::new(
                settings.openai_key(),
                settings.openai_base_url.clone(),
                Some(settings.openai_model.clone()),
            )),
            Backend::Gemini => Arc::new(GeminiClient::new(
                settings.google_key(),
                settings.gemini_base_url.clone(),
                Some(settings.gemini_model.clone()),
            )),
        }
    }
}
