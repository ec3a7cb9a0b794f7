use async_trait::async_trait;

use crate::domain::Document;

use super::{AudioExtractorError, TranscriptionError};

/// Turns the bytes of one upload into a text block.
#[async_trait]
pub trait FileExtractor: Send + Sync {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, ExtractionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("unsupported file kind: {0}")]
    UnsupportedKind(String),
    #[error("invalid structured data: {0}")]
    InvalidData(String),
    #[error("unable to read {0}; check the file encoding")]
    UnreadableEncoding(String),
    #[error("audio conversion: {0}")]
    AudioConversion(#[from] AudioExtractorError),
    #[error("transcription: {0}")]
    Transcription(#[from] TranscriptionError),
    #[error("{0}")]
    MissingCredential(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
