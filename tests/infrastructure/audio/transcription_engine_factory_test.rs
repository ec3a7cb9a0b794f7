use medbrief::infrastructure::audio::{TranscriptionEngineFactory, TranscriptionProvider};

#[test]
fn given_openai_provider_with_key_when_creating_then_returns_engine() {
    let engine = TranscriptionEngineFactory::create(
        TranscriptionProvider::OpenAi,
        "whisper-1",
        "zh",
        Some("sk-test".to_string()),
        None,
    );

    assert!(engine.is_some());
}

#[test]
fn given_openai_provider_without_key_when_creating_then_returns_none() {
    let engine = TranscriptionEngineFactory::create(
        TranscriptionProvider::OpenAi,
        "whisper-1",
        "zh",
        None,
        None,
    );

    assert!(engine.is_none());
}

#[test]
fn given_disabled_provider_when_creating_then_returns_none() {
    let engine = TranscriptionEngineFactory::create(
        TranscriptionProvider::Disabled,
        "whisper-1",
        "zh",
        Some("sk-test".to_string()),
        None,
    );

    assert!(engine.is_none());
}
