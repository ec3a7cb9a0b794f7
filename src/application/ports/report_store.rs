use crate::domain::ReportName;

/// Durable, append-only storage for formatted reports.
#[async_trait::async_trait]
pub trait ReportStore: Send + Sync {
    /// Returns the location the report was written to.
    async fn save(&self, name: &ReportName, report: &str) -> Result<String, ReportStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ReportStoreError {
    #[error("write failed: {0}")]
    WriteFailed(String),
}
