/// Rewrites a transcript into the target script (simplified to traditional).
pub trait ScriptNormalizer: Send + Sync {
    fn normalize(&self, text: &str) -> String;
}

/// Statistical guess at the encoding of bytes no fixed decoder accepted.
pub trait EncodingDetector: Send + Sync {
    fn detect_and_decode(&self, data: &[u8]) -> Option<DetectedText>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedText {
    pub encoding: String,
    pub text: String,
}
