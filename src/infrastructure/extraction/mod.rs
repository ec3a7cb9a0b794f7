mod chardetng_detector;
mod media_adapter;
mod plain_text_adapter;
mod spreadsheet;
mod structured_data_adapter;

pub use chardetng_detector::ChardetngDetector;
pub use media_adapter::MediaAdapter;
pub use plain_text_adapter::PlainTextAdapter;
pub use spreadsheet::{BASIC_QUESTIONNAIRE, BODY_TYPE_QUESTIONNAIRE, render_workbook};
pub use structured_data_adapter::{StructuredDataAdapter, render_json};
