mod gemini_client;
mod llm_client_factory;
mod openai_client;

pub use gemini_client::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, GeminiClient};
pub use llm_client_factory::LlmClientFactory;
pub use openai_client::{DEFAULT_OPENAI_BASE_URL, DEFAULT_OPENAI_MODEL, OpenAiClient, SYSTEM_MESSAGE};
