use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{ReportStore, ReportStoreError, ScratchStore, ScratchStoreError};
use crate::domain::{ReportName, StoragePath};

/// A directory on local disk, used both as the upload scratch area and as
/// the report directory.
pub struct LocalFileStore {
    inner: Arc<LocalFileSystem>,
    root: PathBuf,
}

impl LocalFileStore {
    /// Creates `root` if needed.
    pub fn new(root: PathBuf) -> Result<Self, std::io::Error> {
        std::fs::create_dir_all(&root)?;
        let fs = LocalFileSystem::new_with_prefix(&root)
            .map_err(|e| std::io::Error::other(e.to_string()))?
            .with_automatic_cleanup(true);
        Ok(Self {
            inner: Arc::new(fs),
            root,
        })
    }
}

#[async_trait::async_trait]
impl ScratchStore for LocalFileStore {
    async fn store(&self, path: &StoragePath, data: Bytes) -> Result<u64, ScratchStoreError> {
        let store_path = StorePath::from(path.as_str());
        let size = data.len() as u64;
        self.inner
            .put(&store_path, PutPayload::from(data))
            .await
            .map_err(|e| ScratchStoreError::UploadFailed(e.to_string()))?;
        Ok(size)
    }

    async fn fetch(&self, path: &StoragePath) -> Result<Vec<u8>, ScratchStoreError> {
        let store_path = StorePath::from(path.as_str());
        let result = self
            .inner
            .get(&store_path)
            .await
            .map_err(|e| ScratchStoreError::NotFound(e.to_string()))?;

        let bytes = result
            .bytes()
            .await
            .map_err(|e| ScratchStoreError::DownloadFailed(e.to_string()))?;

        Ok(bytes.to_vec())
    }

    async fn delete(&self, path: &StoragePath) -> Result<(), ScratchStoreError> {
        let store_path = StorePath::from(path.as_str());
        self.inner
            .delete(&store_path)
            .await
            .map_err(|e| ScratchStoreError::DeleteFailed(e.to_string()))
    }
}

#[async_trait::async_trait]
impl ReportStore for LocalFileStore {
    async fn save(&self, name: &ReportName, report: &str) -> Result<String, ReportStoreError> {
        let store_path = StorePath::from(name.as_str());
        self.inner
            .put(&store_path, PutPayload::from(report.to_string()))
            .await
            .map_err(|e| ReportStoreError::WriteFailed(e.to_string()))?;

        let location = self.root.join(name.as_str());
        tracing::info!(path = %location.display(), "Report saved");
        Ok(location.display().to_string())
    }
}
