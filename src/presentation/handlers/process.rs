use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::domain::{Backend, CombinedText, GenerationResult, UploadedFile};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

pub const NO_FILES_DETAIL: &str = "No files uploaded";
pub const NO_VALID_FILES_DETAIL: &str = "No valid files to process";

#[derive(Serialize)]
pub struct ProcessResponse {
    pub result: GenerationResult,
}

#[derive(Serialize)]
pub struct BatchProcessResponse {
    pub results: Vec<GenerationResult>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

fn bad_request(detail: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            detail: detail.into(),
        }),
    )
        .into_response()
}

/// The fields of one upload form.
#[derive(Debug, Default)]
struct ProcessForm {
    /// Parts that carried a filename, supported or not.
    file_count: usize,
    files: Vec<UploadedFile>,
    prompt: Option<String>,
    model: Option<String>,
}

impl ProcessForm {
    async fn read(mut multipart: Multipart) -> Result<Self, Response> {
        let mut form = ProcessForm::default();

        loop {
            let field = match multipart.next_field().await {
                Ok(Some(field)) => field,
                Ok(None) => break,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to read multipart");
                    return Err(bad_request(format!("Failed to read multipart: {}", e)));
                }
            };

            let name = field.name().unwrap_or_default().to_string();

            if let Some(filename) = field.file_name().map(String::from) {
                let data = field.bytes().await.map_err(|e| {
                    tracing::error!(error = %e, filename = %filename, "Failed to read file bytes");
                    bad_request(format!("Failed to read file: {}", e))
                })?;
                form.file_count += 1;

                match UploadedFile::accept(filename.clone(), data) {
                    Some(file) => {
                        tracing::debug!(
                            filename = %filename,
                            kind = file.kind().as_str(),
                            bytes = file.document.size_bytes,
                            "File received"
                        );
                        form.files.push(file);
                    }
                    None => tracing::debug!(filename = %filename, "Skipping unsupported file"),
                }
                continue;
            }

            let value = field.text().await.map_err(|e| {
                tracing::error!(error = %e, field = %name, "Failed to read form field");
                bad_request(format!("Failed to read field {}: {}", name, e))
            })?;
            match name.as_str() {
                "prompt" => form.prompt = Some(value),
                "model" => form.model = Some(value),
                other => tracing::debug!(field = %other, "Ignoring unknown form field"),
            }
        }

        if form.file_count == 0 {
            tracing::warn!("Process request with no files");
            return Err(bad_request(NO_FILES_DETAIL));
        }
        if form.files.is_empty() {
            tracing::warn!(received = form.file_count, "No supported files in request");
            return Err(bad_request(NO_VALID_FILES_DETAIL));
        }

        Ok(form)
    }

    fn sanitized_prompt(&self) -> String {
        sanitize_prompt(self.prompt.as_deref().unwrap_or_default())
    }

    fn backend(&self) -> Backend {
        Backend::from_optional_name(self.model.as_deref())
    }
}

#[tracing::instrument(skip(state, multipart))]
pub async fn process_handler(State(state): State<AppState>, multipart: Multipart) -> Response {
    let form = match ProcessForm::read(multipart).await {
        Ok(form) => form,
        Err(response) => return response,
    };
    let backend = form.backend();

    tracing::info!(
        files = form.files.len(),
        skipped = form.file_count - form.files.len(),
        backend = %backend,
        prompt = %form.sanitized_prompt(),
        "Processing upload"
    );

    let blocks = state.extraction_service.extract_all(&form.files).await;
    let combined = CombinedText::from_blocks(&blocks);

    let result = state
        .generation_service
        .generate(&combined, form.prompt.as_deref(), backend)
        .await;

    let status = if result.is_success() {
        StatusCode::OK
    } else {
        StatusCode::BAD_GATEWAY
    };

    (status, Json(ProcessResponse { result })).into_response()
}

/// Each supported file becomes its own batch item.
#[tracing::instrument(skip(state, multipart))]
pub async fn batch_process_handler(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Response {
    let form = match ProcessForm::read(multipart).await {
        Ok(form) => form,
        Err(response) => return response,
    };
    let backend = form.backend();

    tracing::info!(
        items = form.files.len(),
        backend = %backend,
        prompt = %form.sanitized_prompt(),
        "Processing batch upload"
    );

    let mut combined_texts = Vec::with_capacity(form.files.len());
    for file in &form.files {
        let block = state.extraction_service.extract(file).await;
        combined_texts.push(CombinedText::from_blocks(std::slice::from_ref(&block)));
    }

    let results = state
        .generation_service
        .generate_batch(&combined_texts, form.prompt.as_deref(), backend)
        .await;

    (StatusCode::OK, Json(BatchProcessResponse { results })).into_response()
}
