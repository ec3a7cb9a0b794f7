use std::sync::Arc;

use async_trait::async_trait;
use encoding_rs::{BIG5, Encoding, GBK, UTF_8};

use crate::application::ports::{EncodingDetector, ExtractionError, FileExtractor};
use crate::domain::{Document, FileKind};

/// Decoders tried in order before falling back to detection. WHATWG Big5
/// is a superset of cp950, so one entry covers both legacy Traditional
/// Chinese code pages.
fn fixed_encodings() -> [&'static Encoding; 3] {
    [UTF_8, BIG5, GBK]
}

pub struct PlainTextAdapter {
    detector: Option<Arc<dyn EncodingDetector>>,
}

impl PlainTextAdapter {
    pub fn new() -> Self {
        Self { detector: None }
    }

    pub fn with_detector(detector: Arc<dyn EncodingDetector>) -> Self {
        Self {
            detector: Some(detector),
        }
    }

    fn decode(&self, data: &[u8]) -> Option<String> {
        // A byte-order mark names the encoding outright.
        if let Some((encoding, bom_len)) = Encoding::for_bom(data) {
            let text = encoding
                .decode_without_bom_handling_and_without_replacement(&data[bom_len..])?;
            tracing::debug!(encoding = encoding.name(), "Decoded text file from byte-order mark");
            return Some(text.into_owned());
        }

        for encoding in fixed_encodings() {
            if let Some(text) = encoding.decode_without_bom_handling_and_without_replacement(data) {
                tracing::debug!(encoding = encoding.name(), "Decoded text file");
                return Some(text.into_owned());
            }
        }

        let detected = self.detector.as_ref()?.detect_and_decode(data)?;
        tracing::debug!(encoding = %detected.encoding, "Decoded text file with detected encoding");
        Some(detected.text)
    }
}

impl Default for PlainTextAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FileExtractor for PlainTextAdapter {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, ExtractionError> {
        if document.kind != FileKind::PlainText {
            return Err(ExtractionError::UnsupportedKind(
                document.kind.as_str().to_string(),
            ));
        }

        let filename = document.basename();
        let content = self
            .decode(data)
            .ok_or_else(|| ExtractionError::UnreadableEncoding(filename.to_string()))?;

        Ok(format!("# 檔案: {}\n\n{}\n\n", filename, content))
    }
}
