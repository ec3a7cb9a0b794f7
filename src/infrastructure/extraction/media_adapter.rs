use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{
    AudioExtractor, ExtractionError, FileExtractor, ScriptNormalizer, TranscriptionEngine,
};
use crate::domain::{Document, FileKind};

const VIDEO_FILE: &str = "input.mp4";
const AUDIO_FILE: &str = "audio.mp3";

/// Video upload → MP3 audio track → transcript.
pub struct MediaAdapter {
    audio_extractor: Arc<dyn AudioExtractor>,
    transcription_engine: Option<Arc<dyn TranscriptionEngine>>,
    script_normalizer: Option<Arc<dyn ScriptNormalizer>>,
}

impl MediaAdapter {
    pub fn new(
        audio_extractor: Arc<dyn AudioExtractor>,
        transcription_engine: Option<Arc<dyn TranscriptionEngine>>,
    ) -> Self {
        Self {
            audio_extractor,
            transcription_engine,
            script_normalizer: None,
        }
    }

    pub fn with_script_normalizer(mut self, normalizer: Arc<dyn ScriptNormalizer>) -> Self {
        self.script_normalizer = Some(normalizer);
        self
    }
}

#[async_trait]
impl FileExtractor for MediaAdapter {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, ExtractionError> {
        if document.kind != FileKind::Media {
            return Err(ExtractionError::UnsupportedKind(
                document.kind.as_str().to_string(),
            ));
        }

        let engine = self.transcription_engine.as_ref().ok_or_else(|| {
            ExtractionError::MissingCredential(
                "transcription is not configured; set OPENAI_API_KEY or TRANSCRIPTION_API_KEY"
                    .to_string(),
            )
        })?;

        // Removed on drop, whichever way this returns.
        let workdir = tempfile::TempDir::new()?;
        let video_path = workdir.path().join(VIDEO_FILE);
        let audio_path = workdir.path().join(AUDIO_FILE);

        tokio::fs::write(&video_path, data).await?;
        self.audio_extractor
            .extract_audio(&video_path, &audio_path)
            .await?;

        let audio = tokio::fs::read(&audio_path).await?;
        tracing::debug!(
            filename = %document.filename,
            audio_bytes = audio.len(),
            "Audio track extracted"
        );

        let transcript = engine.transcribe(&audio).await?;
        let transcript = match &self.script_normalizer {
            Some(normalizer) => normalizer.normalize(&transcript),
            None => transcript,
        };

        tracing::info!(
            filename = %document.filename,
            chars = transcript.chars().count(),
            "Video transcribed"
        );

        Ok(format!("# 檔案: {}\n\n{}\n\n", document.basename(), transcript))
    }
}
