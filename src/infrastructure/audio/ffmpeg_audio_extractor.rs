use std::io::ErrorKind;
use std::path::Path;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{AudioExtractor, AudioExtractorError};

/// Shells out to `ffmpeg` to pull the audio track as MP3.
pub struct FfmpegAudioExtractor {
    binary: String,
}

impl FfmpegAudioExtractor {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl Default for FfmpegAudioExtractor {
    fn default() -> Self {
        Self::new("ffmpeg")
    }
}

#[async_trait]
impl AudioExtractor for FfmpegAudioExtractor {
    async fn extract_audio(&self, video: &Path, audio: &Path) -> Result<(), AudioExtractorError> {
        tracing::debug!(binary = %self.binary, video = %video.display(), "Running ffmpeg");

        let output = Command::new(&self.binary)
            .arg("-y")
            .arg("-i")
            .arg(video)
            .args(["-vn", "-acodec", "libmp3lame", "-q:a", "4"])
            .arg(audio)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => {
                    AudioExtractorError::Unavailable(format!("{} not found on PATH", self.binary))
                }
                _ => AudioExtractorError::Failed(format!("failed to run {}: {}", self.binary, e)),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let tail: String = stderr.lines().rev().take(5).collect::<Vec<_>>().join(" | ");
            return Err(AudioExtractorError::Failed(format!(
                "{} exited with {}: {}",
                self.binary, output.status, tail
            )));
        }

        Ok(())
    }
}
