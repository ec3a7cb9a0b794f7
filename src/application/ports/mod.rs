mod audio_extractor;
mod file_extractor;
mod llm_client;
mod report_store;
mod scratch_store;
mod sleeper;
mod text_capabilities;
mod transcription_engine;

pub use audio_extractor::{AudioExtractor, AudioExtractorError};
pub use file_extractor::{ExtractionError, FileExtractor};
pub use llm_client::{LlmClient, LlmClientError};
pub use report_store::{ReportStore, ReportStoreError};
pub use scratch_store::{ScratchStore, ScratchStoreError};
pub use sleeper::Sleeper;
pub use text_capabilities::{DetectedText, EncodingDetector, ScriptNormalizer};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
