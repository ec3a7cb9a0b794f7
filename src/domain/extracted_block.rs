use super::document::Document;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockStatus {
    Extracted,
    Failed,
}

/// Text produced for one accepted upload.
///
/// A failed extraction still yields a block: its text is the failure message,
/// and it is concatenated like any other block. The status tag lets callers
/// tell the two apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedBlock {
    pub source: String,
    pub text: String,
    pub status: BlockStatus,
}

impl ExtractedBlock {
    pub fn extracted(document: &Document, text: impl Into<String>) -> Self {
        let text = text.into();
        let text = if text.trim().is_empty() {
            format!("# 檔案: {}\n\n(no textual content)\n\n", document.basename())
        } else {
            text
        };
        Self {
            source: document.filename.clone(),
            text,
            status: BlockStatus::Extracted,
        }
    }

    pub fn failed(source: impl Into<String>, message: impl AsRef<str>) -> Self {
        let source = source.into();
        let text = format!("Failed to process {}: {}", source, message.as_ref());
        Self {
            source,
            text,
            status: BlockStatus::Failed,
        }
    }

    pub fn is_failed(&self) -> bool {
        self.status == BlockStatus::Failed
    }
}
