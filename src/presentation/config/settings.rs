use std::path::PathBuf;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::infrastructure::audio::TranscriptionProvider;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub transcription: TranscriptionSettings,
    pub extraction: ExtractionSettings,
    pub reports: ReportSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_mb: usize,
}

impl ServerSettings {
    pub fn upload_limit_bytes(&self) -> usize {
        self.max_upload_mb.saturating_mul(1024 * 1024)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_base_url: Option<String>,
    pub google_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: Option<String>,
    pub retry_attempts: u32,
    pub initial_backoff_ms: u64,
}

impl LlmSettings {
    pub fn openai_key(&self) -> Option<String> {
        non_empty(&self.openai_api_key)
    }

    pub fn google_key(&self) -> Option<String> {
        non_empty(&self.google_api_key)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionSettings {
    pub provider: TranscriptionProvider,
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: Option<String>,
    pub language: String,
    pub normalize_script: bool,
}

impl TranscriptionSettings {
    /// Falls back to the OpenAI key; Whisper is an OpenAI endpoint.
    pub fn key(&self, llm: &LlmSettings) -> Option<String> {
        non_empty(&self.api_key).or_else(|| llm.openai_key())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionSettings {
    pub scratch_dir: Option<PathBuf>,
    pub ffmpeg_path: String,
    pub detect_encoding: bool,
}

impl ExtractionSettings {
    pub fn scratch_dir(&self) -> PathBuf {
        self.scratch_dir
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("medbrief-uploads"))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportSettings {
    pub dir: PathBuf,
    pub identifier: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub json: bool,
    pub filter: Option<String>,
}

impl Settings {
    /// Defaults, then `appsettings.<environment>.toml`, then `APP_*`
    /// variables (`APP_LLM__OPENAI_MODEL`), then the well-known credential
    /// variables.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let file_name = format!("appsettings.{}", environment.as_str().to_lowercase());

        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("server.max_upload_mb", 200)?
            .set_default("llm.openai_model", "gpt-4o-mini")?
            .set_default("llm.gemini_model", "gemini-2.0-flash")?
            .set_default("llm.retry_attempts", 3)?
            .set_default("llm.initial_backoff_ms", 1000)?
            .set_default("transcription.provider", "openai")?
            .set_default("transcription.model", "whisper-1")?
            .set_default("transcription.language", "zh")?
            .set_default("transcription.normalize_script", true)?
            .set_default("extraction.ffmpeg_path", "ffmpeg")?
            .set_default("extraction.detect_encoding", true)?
            .set_default("reports.dir", "./reports")?
            .set_default("reports.identifier", "report")?
            .set_default("logging.json", false)?
            .add_source(File::with_name(&file_name).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("llm.openai_api_key", std::env::var("OPENAI_API_KEY").ok())?
            .set_override_option("llm.google_api_key", std::env::var("GOOGLE_API_KEY").ok())?
            .set_override_option(
                "transcription.api_key",
                std::env::var("TRANSCRIPTION_API_KEY").ok(),
            )?
            .set_override_option(
                "logging.json",
                std::env::var("LOG_FORMAT")
                    .ok()
                    .map(|v| v.eq_ignore_ascii_case("json")),
            )?
            .build()?
            .try_deserialize()
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}
