use std::sync::Arc;

use crate::application::services::{ExtractionService, GenerationService};

#[derive(Clone)]
pub struct AppState {
    pub extraction_service: Arc<ExtractionService>,
    pub generation_service: Arc<GenerationService>,
    pub upload_limit_bytes: usize,
}
