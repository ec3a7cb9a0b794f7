use bytes::Bytes;

use super::document::{Document, FileKind};

/// A file received in one request. Lives only as long as that request.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub document: Document,
    pub data: Bytes,
}

impl UploadedFile {
    /// Returns `None` for unsupported suffixes; those uploads are skipped.
    pub fn accept(filename: impl Into<String>, data: Bytes) -> Option<Self> {
        let filename = filename.into();
        let kind = FileKind::from_filename(&filename)?;
        let document = Document::new(filename, kind, data.len() as u64);
        Some(Self { document, data })
    }

    pub fn filename(&self) -> &str {
        &self.document.filename
    }

    pub fn kind(&self) -> FileKind {
        self.document.kind
    }
}
