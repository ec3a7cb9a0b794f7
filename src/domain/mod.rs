mod backend;
mod combined_text;
mod document;
mod extracted_block;
mod generation_result;
mod prompt;
mod report_name;
mod storage_path;
mod uploaded_file;

pub use backend::Backend;
pub use combined_text::{BLOCK_SEPARATOR, CombinedText};
pub use document::{Document, DocumentId, FileKind, StructuredFormat};
pub use extracted_block::{BlockStatus, ExtractedBlock};
pub use generation_result::{GenerationResult, GenerationStatus};
pub use prompt::{DEFAULT_PROMPT, Prompt};
pub use report_name::{DEFAULT_REPORT_IDENTIFIER, ReportName};
pub use storage_path::StoragePath;
pub use uploaded_file::UploadedFile;
