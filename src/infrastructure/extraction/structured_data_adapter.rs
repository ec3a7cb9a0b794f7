use async_trait::async_trait;
use serde_json::Value;

use crate::application::ports::{ExtractionError, FileExtractor};
use crate::domain::{Document, FileKind, StructuredFormat};

use super::spreadsheet::render_workbook;

/// JSON documents and Excel workbooks.
pub struct StructuredDataAdapter;

#[async_trait]
impl FileExtractor for StructuredDataAdapter {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, ExtractionError> {
        match document.kind {
            FileKind::StructuredData(StructuredFormat::Json) => render_json(data),
            FileKind::StructuredData(StructuredFormat::Spreadsheet) => {
                render_workbook(data, document.basename())
            }
            other => Err(ExtractionError::UnsupportedKind(other.as_str().to_string())),
        }
    }
}

/// - mapping: one `key: value` line per entry, in document order;
/// - sequence: one block per element, blocks one blank line apart, mapping
///   elements keep only their scalar fields;
/// - anything else: its plain string form.
pub fn render_json(data: &[u8]) -> Result<String, ExtractionError> {
    let value: Value =
        serde_json::from_slice(data).map_err(|e| ExtractionError::InvalidData(e.to_string()))?;

    Ok(match value {
        Value::Object(map) => map
            .iter()
            .map(|(key, value)| format!("{}: {}", key, value_text(value)))
            .collect::<Vec<_>>()
            .join("\n"),
        Value::Array(items) => items
            .iter()
            .map(render_element)
            .collect::<Vec<_>>()
            .join("\n\n"),
        other => value_text(&other),
    })
}

fn render_element(item: &Value) -> String {
    match item {
        Value::Object(map) => map
            .iter()
            .filter(|(_, value)| is_scalar(value))
            .map(|(key, value)| format!("{}: {}", key, value_text(value)))
            .collect::<Vec<_>>()
            .join("\n"),
        other => value_text(other),
    }
}

fn is_scalar(value: &Value) -> bool {
    matches!(value, Value::String(_) | Value::Number(_) | Value::Bool(_))
}

// Strings unquoted; nested values as compact JSON.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
