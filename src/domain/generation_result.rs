use serde::Serialize;

use super::backend::Backend;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationStatus {
    Success,
    Error,
}

/// Outcome of one generation request. Built once, never mutated afterwards
/// except for the batch position attached by `with_index`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationResult {
    pub status: GenerationStatus,
    pub model_used: Backend,
    pub report: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}

impl GenerationResult {
    pub fn success(backend: Backend, report: String, report_path: Option<String>) -> Self {
        Self {
            status: GenerationStatus::Success,
            model_used: backend,
            report,
            report_path,
            error: None,
            index: None,
        }
    }

    pub fn failure(backend: Backend, report: String, error: String) -> Self {
        Self {
            status: GenerationStatus::Error,
            model_used: backend,
            report,
            report_path: None,
            error: Some(error),
            index: None,
        }
    }

    pub fn with_index(self, index: usize) -> Self {
        Self {
            index: Some(index),
            ..self
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == GenerationStatus::Success
    }
}
