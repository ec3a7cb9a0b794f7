use bytes::Bytes;

use crate::domain::StoragePath;

/// Per-request staging area for uploads.
#[async_trait::async_trait]
pub trait ScratchStore: Send + Sync {
    async fn store(&self, path: &StoragePath, data: Bytes) -> Result<u64, ScratchStoreError>;

    async fn fetch(&self, path: &StoragePath) -> Result<Vec<u8>, ScratchStoreError>;

    async fn delete(&self, path: &StoragePath) -> Result<(), ScratchStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ScratchStoreError {
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("download failed: {0}")]
    DownloadFailed(String),
    #[error("delete failed: {0}")]
    DeleteFailed(String),
}
