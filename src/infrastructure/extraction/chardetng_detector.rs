use crate::application::ports::{DetectedText, EncodingDetector};

/// Statistical encoding guess backed by chardetng.
pub struct ChardetngDetector;

impl EncodingDetector for ChardetngDetector {
    fn detect_and_decode(&self, data: &[u8]) -> Option<DetectedText> {
        let mut detector = chardetng::EncodingDetector::new();
        detector.feed(data, true);
        let encoding = detector.guess(None, true);

        let text = encoding.decode_without_bom_handling_and_without_replacement(data)?;
        Some(DetectedText {
            encoding: encoding.name().to_string(),
            text: text.into_owned(),
        })
    }
}
