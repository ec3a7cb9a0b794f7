use std::fmt;

use chrono::{DateTime, TimeZone};

pub const DEFAULT_REPORT_IDENTIFIER: &str = "report";

/// `<identifier>_<YYYYMMDD_HHMMSS>.md`. Two reports in the same second share
/// a name and the later write wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportName(String);

impl ReportName {
    pub fn new<Tz>(identifier: &str, timestamp: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        Self(format!(
            "{}_{}.md",
            identifier,
            timestamp.format("%Y%m%d_%H%M%S")
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReportName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
