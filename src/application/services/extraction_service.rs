use std::sync::Arc;

use tracing::{Instrument, Span};

use crate::application::ports::{ExtractionError, FileExtractor, ScratchStore, ScratchStoreError};
use crate::domain::{ExtractedBlock, FileKind, StoragePath, UploadedFile};

/// Runs every accepted upload through the extractor for its kind.
///
/// Uploads are staged to the scratch store, extracted, and removed again
/// whatever the outcome. Files are handled one after another in upload
/// order, and every file yields exactly one block.
pub struct ExtractionService {
    structured: Arc<dyn FileExtractor>,
    media: Arc<dyn FileExtractor>,
    plain_text: Arc<dyn FileExtractor>,
    scratch_store: Arc<dyn ScratchStore>,
    span: Span,
}

impl ExtractionService {
    pub fn new(
        structured: Arc<dyn FileExtractor>,
        media: Arc<dyn FileExtractor>,
        plain_text: Arc<dyn FileExtractor>,
        scratch_store: Arc<dyn ScratchStore>,
    ) -> Self {
        Self {
            structured,
            media,
            plain_text,
            scratch_store,
            span: tracing::info_span!("extraction_service"),
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub async fn extract_all(&self, files: &[UploadedFile]) -> Vec<ExtractedBlock> {
        let mut blocks = Vec::with_capacity(files.len());
        for file in files {
            blocks.push(self.extract(file).await);
        }
        blocks
    }

    pub async fn extract(&self, file: &UploadedFile) -> ExtractedBlock {
        let span = tracing::info_span!(
            parent: &self.span,
            "extract_file",
            filename = %file.filename(),
            kind = file.kind().as_str(),
            bytes = file.document.size_bytes,
        );

        async {
            match self.extract_staged(file).await {
                Ok(text) => {
                    tracing::info!(chars = text.chars().count(), "File extracted");
                    ExtractedBlock::extracted(&file.document, text)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "File extraction failed");
                    ExtractedBlock::failed(file.filename(), e.to_string())
                }
            }
        }
        .instrument(span)
        .await
    }

    fn extractor_for(&self, kind: FileKind) -> &dyn FileExtractor {
        match kind {
            FileKind::StructuredData(_) => self.structured.as_ref(),
            FileKind::Media => self.media.as_ref(),
            FileKind::PlainText => self.plain_text.as_ref(),
        }
    }

    async fn extract_staged(&self, file: &UploadedFile) -> Result<String, ExtractionServiceError> {
        let path = StoragePath::for_document(&file.document);

        self.scratch_store
            .store(&path, file.data.clone())
            .await
            .map_err(ExtractionServiceError::Staging)?;
        tracing::debug!(path = %path, "Upload staged");

        let result = self.extract_from_scratch(file, &path).await;

        if let Err(e) = self.scratch_store.delete(&path).await {
            tracing::warn!(error = %e, path = %path, "Failed to delete staged upload");
        }

        result
    }

    async fn extract_from_scratch(
        &self,
        file: &UploadedFile,
        path: &StoragePath,
    ) -> Result<String, ExtractionServiceError> {
        let data = self
            .scratch_store
            .fetch(path)
            .await
            .map_err(ExtractionServiceError::Staging)?;

        self.extractor_for(file.kind())
            .extract_text(&data, &file.document)
            .await
            .map_err(ExtractionServiceError::Extraction)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionServiceError {
    #[error("staging: {0}")]
    Staging(ScratchStoreError),
    #[error("{0}")]
    Extraction(ExtractionError),
}
