use std::path::Path;

use async_trait::async_trait;

/// Writes the audio track of `video` to `audio` as MP3.
#[async_trait]
pub trait AudioExtractor: Send + Sync {
    async fn extract_audio(&self, video: &Path, audio: &Path) -> Result<(), AudioExtractorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioExtractorError {
    #[error("transcoder not available: {0}")]
    Unavailable(String),
    #[error("transcoding failed: {0}")]
    Failed(String),
}
