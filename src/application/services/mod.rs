mod extraction_service;
mod generation_service;
mod report_formatter;
mod retry;

pub use extraction_service::{ExtractionService, ExtractionServiceError};
pub use generation_service::{GenerationError, GenerationService};
pub use report_formatter::{REPORT_TITLE, SECTION_KEYWORDS, format_report};
pub use retry::RetryPolicy;
