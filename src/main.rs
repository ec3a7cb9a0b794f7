use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;

use medbrief::application::ports::{EncodingDetector, FileExtractor};
use medbrief::application::services::{ExtractionService, GenerationService, RetryPolicy};
use medbrief::domain::Backend;
use medbrief::infrastructure::audio::{
    FfmpegAudioExtractor, TranscriptionEngineFactory, ZhconvNormalizer,
};
use medbrief::infrastructure::extraction::{
    ChardetngDetector, MediaAdapter, PlainTextAdapter, StructuredDataAdapter,
};
use medbrief::infrastructure::llm::LlmClientFactory;
use medbrief::infrastructure::observability::{TracingConfig, init_tracing};
use medbrief::infrastructure::runtime::TokioSleeper;
use medbrief::infrastructure::storage::LocalFileStore;
use medbrief::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(anyhow::Error::msg)?;

    let settings = Settings::load(environment).context("failed to load configuration")?;

    init_tracing(&TracingConfig::new(
        environment.as_str(),
        settings.logging.json,
        settings.logging.filter.clone(),
    ));

    let scratch_store = Arc::new(
        LocalFileStore::new(settings.extraction.scratch_dir())
            .context("failed to prepare upload scratch directory")?,
    );
    let report_store = Arc::new(
        LocalFileStore::new(settings.reports.dir.clone())
            .context("failed to prepare report directory")?,
    );

    let transcription_engine = TranscriptionEngineFactory::create(
        settings.transcription.provider,
        &settings.transcription.model,
        &settings.transcription.language,
        settings.transcription.key(&settings.llm),
        settings.transcription.base_url.clone(),
    );
    let mut media_adapter = MediaAdapter::new(
        Arc::new(FfmpegAudioExtractor::new(
            settings.extraction.ffmpeg_path.clone(),
        )),
        transcription_engine,
    );
    if settings.transcription.normalize_script {
        media_adapter = media_adapter.with_script_normalizer(Arc::new(ZhconvNormalizer));
    }

    let plain_text_adapter = if settings.extraction.detect_encoding {
        let detector: Arc<dyn EncodingDetector> = Arc::new(ChardetngDetector);
        PlainTextAdapter::with_detector(detector)
    } else {
        PlainTextAdapter::new()
    };

    let structured: Arc<dyn FileExtractor> = Arc::new(StructuredDataAdapter);
    let extraction_service = Arc::new(
        ExtractionService::new(
            structured,
            Arc::new(media_adapter),
            Arc::new(plain_text_adapter),
            scratch_store,
        )
        .with_span(tracing::info_span!("extraction", environment = %environment)),
    );

    if settings.llm.openai_key().is_none() {
        tracing::warn!("OPENAI_API_KEY is not set; OpenAI requests will fail");
    }
    if settings.llm.google_key().is_none() {
        tracing::warn!("GOOGLE_API_KEY is not set; Gemini requests will fail");
    }

    let generation_service = Arc::new(
        GenerationService::new(
            LlmClientFactory::create(Backend::OpenAi, &settings.llm),
            LlmClientFactory::create(Backend::Gemini, &settings.llm),
            report_store,
            Arc::new(TokioSleeper),
        )
        .with_retry_policy(RetryPolicy::new(
            settings.llm.retry_attempts,
            Duration::from_millis(settings.llm.initial_backoff_ms),
        ))
        .with_report_identifier(settings.reports.identifier.clone())
        .with_span(tracing::info_span!("generation", environment = %environment)),
    );

    let state = AppState {
        extraction_service,
        generation_service,
        upload_limit_bytes: settings.server.upload_limit_bytes(),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("invalid server address")?;
    tracing::info!(
        %addr,
        reports = %settings.reports.dir.display(),
        max_upload_mb = settings.server.max_upload_mb,
        "Listening"
    );

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
