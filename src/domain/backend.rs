use std::fmt;

use serde::Serialize;

/// Text-generation backend. `OpenAi` is the default; any unrecognised
/// name routes to `Gemini`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Backend {
    #[default]
    #[serde(rename = "OpenAI-4o-mini")]
    OpenAi,
    #[serde(rename = "Gemini")]
    Gemini,
}

impl Backend {
    pub const OPENAI_NAME: &'static str = "OpenAI-4o-mini";
    pub const GEMINI_NAME: &'static str = "Gemini";

    pub fn from_name(name: &str) -> Self {
        if name == Self::OPENAI_NAME {
            Self::OpenAi
        } else {
            Self::Gemini
        }
    }

    /// Blank or missing names select the default backend.
    pub fn from_optional_name(name: Option<&str>) -> Self {
        match name.map(str::trim) {
            Some(n) if !n.is_empty() => Self::from_name(n),
            _ => Self::default(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAi => Self::OPENAI_NAME,
            Self::Gemini => Self::GEMINI_NAME,
        }
    }

    /// Vendor label used in log lines and error messages.
    pub fn vendor(&self) -> &'static str {
        match self {
            Self::OpenAi => "OpenAI",
            Self::Gemini => "Gemini",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
