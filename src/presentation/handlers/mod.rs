mod health;
mod process;
mod root;

pub use health::health_handler;
pub use process::{
    BatchProcessResponse, ErrorResponse, NO_FILES_DETAIL, NO_VALID_FILES_DETAIL, ProcessResponse,
    batch_process_handler, process_handler,
};
pub use root::{WELCOME_MESSAGE, root_handler};
