use zhconv::{Variant, zhconv};

use crate::application::ports::ScriptNormalizer;

/// Simplified → Traditional Chinese with Taiwan phrasing.
pub struct ZhconvNormalizer;

impl ScriptNormalizer for ZhconvNormalizer {
    fn normalize(&self, text: &str) -> String {
        zhconv(text, Variant::ZhTW)
    }
}
