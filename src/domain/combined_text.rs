use std::fmt;

use super::extracted_block::ExtractedBlock;

pub const BLOCK_SEPARATOR: &str = "\n\n";

/// All blocks of one request, in upload order, one blank line apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedText(String);

impl CombinedText {
    pub fn from_blocks(blocks: &[ExtractedBlock]) -> Self {
        Self(
            blocks
                .iter()
                .map(|b| b.text.as_str())
                .collect::<Vec<_>>()
                .join(BLOCK_SEPARATOR),
        )
    }

    pub fn from_raw(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CombinedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
