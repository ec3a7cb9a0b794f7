use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use bytes::Bytes;

use medbrief::application::ports::{
    ExtractionError, FileExtractor, LlmClient, LlmClientError, ReportStore, ReportStoreError,
    ScratchStore, ScratchStoreError, Sleeper,
};
use medbrief::domain::{Document, ReportName, StoragePath};

/// Replays scripted completions; records every prompt/context pair.
pub struct ScriptedLlmClient {
    responses: Mutex<VecDeque<Result<String, LlmClientError>>>,
    pub calls: Mutex<Vec<(String, String)>>,
}

impl ScriptedLlmClient {
    pub fn new(responses: Vec<Result<String, LlmClientError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn always_failing() -> Self {
        Self::new(vec![
            Err(LlmClientError::ApiRequestFailed("HTTP 500".to_string())),
            Err(LlmClientError::ApiRequestFailed("HTTP 500".to_string())),
            Err(LlmClientError::ApiRequestFailed("HTTP 500".to_string())),
            Err(LlmClientError::ApiRequestFailed("HTTP 500".to_string())),
        ])
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl LlmClient for ScriptedLlmClient {
    async fn complete(&self, prompt: &str, context: &str) -> Result<String, LlmClientError> {
        self.calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), context.to_string()));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(LlmClientError::InvalidResponse("script exhausted".into())))
    }
}

#[derive(Default)]
pub struct RecordingSleeper {
    pub delays: Mutex<Vec<Duration>>,
}

#[async_trait::async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.delays.lock().unwrap().push(duration);
    }
}

#[derive(Default)]
pub struct InMemoryReportStore {
    pub saved: Mutex<Vec<(String, String)>>,
}

#[async_trait::async_trait]
impl ReportStore for InMemoryReportStore {
    async fn save(&self, name: &ReportName, report: &str) -> Result<String, ReportStoreError> {
        self.saved
            .lock()
            .unwrap()
            .push((name.to_string(), report.to_string()));
        Ok(format!("memory://{}", name))
    }
}

pub struct FailingReportStore;

#[async_trait::async_trait]
impl ReportStore for FailingReportStore {
    async fn save(&self, _name: &ReportName, _report: &str) -> Result<String, ReportStoreError> {
        Err(ReportStoreError::WriteFailed("disk full".to_string()))
    }
}

#[derive(Default)]
pub struct InMemoryScratchStore {
    pub files: Mutex<std::collections::HashMap<String, Bytes>>,
    pub deleted: Mutex<Vec<String>>,
}

#[async_trait::async_trait]
impl ScratchStore for InMemoryScratchStore {
    async fn store(&self, path: &StoragePath, data: Bytes) -> Result<u64, ScratchStoreError> {
        let size = data.len() as u64;
        self.files
            .lock()
            .unwrap()
            .insert(path.as_str().to_string(), data);
        Ok(size)
    }

    async fn fetch(&self, path: &StoragePath) -> Result<Vec<u8>, ScratchStoreError> {
        self.files
            .lock()
            .unwrap()
            .get(path.as_str())
            .map(|b| b.to_vec())
            .ok_or_else(|| ScratchStoreError::NotFound(path.to_string()))
    }

    async fn delete(&self, path: &StoragePath) -> Result<(), ScratchStoreError> {
        self.files.lock().unwrap().remove(path.as_str());
        self.deleted.lock().unwrap().push(path.as_str().to_string());
        Ok(())
    }
}

/// Echoes UTF-8 input; fails on anything else.
pub struct EchoExtractor;

#[async_trait::async_trait]
impl FileExtractor for EchoExtractor {
    async fn extract_text(
        &self,
        data: &[u8],
        _document: &Document,
    ) -> Result<String, ExtractionError> {
        String::from_utf8(data.to_vec()).map_err(|e| ExtractionError::InvalidData(e.to_string()))
    }
}

pub struct FailingExtractor(pub &'static str);

#[async_trait::async_trait]
impl FileExtractor for FailingExtractor {
    async fn extract_text(
        &self,
        _data: &[u8],
        _document: &Document,
    ) -> Result<String, ExtractionError> {
        Err(ExtractionError::InvalidData(self.0.to_string()))
    }
}
