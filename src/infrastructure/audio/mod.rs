mod ffmpeg_audio_extractor;
mod openai_whisper_engine;
mod transcription_engine_factory;
mod zhconv_normalizer;

pub use ffmpeg_audio_extractor::FfmpegAudioExtractor;
pub use openai_whisper_engine::{
    DEFAULT_TRANSCRIPTION_LANGUAGE, DEFAULT_WHISPER_MODEL, OpenAiWhisperEngine,
};
pub use transcription_engine_factory::{TranscriptionEngineFactory, TranscriptionProvider};
pub use zhconv_normalizer::ZhconvNormalizer;
