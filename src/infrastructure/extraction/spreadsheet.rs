use std::io::Cursor;

use calamine::{Data, ExcelDateTime, Range, Reader, open_workbook_auto_from_rs};
use chrono::Timelike;

use crate::application::ports::ExtractionError;

pub const BASIC_QUESTIONNAIRE: &str = "基本問卷";
pub const BODY_TYPE_QUESTIONNAIRE: &str = "身型問卷";

const QUESTIONNAIRE_SHEETS: [&str; 2] = [BASIC_QUESTIONNAIRE, BODY_TYPE_QUESTIONNAIRE];

const QUESTION_COLUMN: &str = "問題";
const ANSWER_COLUMN: &str = "答案";
const NOTE_COLUMN: &str = "備註";

/// Renders an `.xlsx` / `.xls` workbook.
///
/// The two questionnaire sheets are read as question/answer/note rows; every
/// other sheet is dumped as a table. A sheet that fails to load contributes
/// an error line instead of aborting the workbook.
pub fn render_workbook(data: &[u8], filename: &str) -> Result<String, ExtractionError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(data))
        .map_err(|e| ExtractionError::InvalidData(format!("failed to open workbook: {}", e)))?;

    let mut out = String::new();

    for sheet in QUESTIONNAIRE_SHEETS {
        match workbook.worksheet_range(sheet) {
            Ok(range) => out.push_str(&render_questionnaire(filename, sheet, &range)),
            Err(e) => {
                tracing::warn!(sheet, error = %e, "Questionnaire sheet could not be read");
                out.push_str(&sheet_error(sheet, &e.to_string()));
            }
        }
    }

    let other_sheets: Vec<String> = workbook
        .sheet_names()
        .into_iter()
        .filter(|name| !QUESTIONNAIRE_SHEETS.contains(&name.as_str()))
        .collect();

    for sheet in &other_sheets {
        match workbook.worksheet_range(sheet) {
            Ok(range) => {
                if let Some(table) = render_table(filename, sheet, &range) {
                    out.push_str(&table);
                }
            }
            Err(e) => {
                tracing::warn!(sheet = %sheet, error = %e, "Sheet could not be read");
                out.push_str(&sheet_error(sheet, &e.to_string()));
            }
        }
    }

    Ok(out)
}

fn sheet_error(sheet: &str, message: &str) -> String {
    format!("Error while processing sheet '{}': {}\n\n", sheet, message)
}

fn heading(filename: &str, sheet: &str) -> String {
    format!("# 檔案: {} - {}\n\n", filename, sheet)
}

/// Empty when the sheet has no data rows or lacks the question/answer
/// columns. Rows with a blank question or answer are skipped.
pub(crate) fn render_questionnaire(filename: &str, sheet: &str, range: &Range<Data>) -> String {
    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return String::new();
    };

    let column = |name: &str| {
        header
            .iter()
            .position(|cell| cell_text(cell).as_deref() == Some(name))
    };
    let (Some(question_idx), Some(answer_idx)) = (column(QUESTION_COLUMN), column(ANSWER_COLUMN))
    else {
        return String::new();
    };
    let note_idx = column(NOTE_COLUMN);

    let data_rows: Vec<&[Data]> = rows.collect();
    if data_rows.is_empty() {
        return String::new();
    }

    let mut out = heading(filename, sheet);
    for row in data_rows {
        let question = row.get(question_idx).and_then(cell_text);
        let answer = row.get(answer_idx).and_then(cell_text);
        let (Some(question), Some(answer)) = (question, answer) else {
            continue;
        };

        out.push_str(&format!("問題: {}\n答案: {}\n", question, answer));
        if let Some(note) = note_idx.and_then(|i| row.get(i)).and_then(cell_text) {
            out.push_str(&format!("備註: {}\n", note));
        }
        out.push('\n');
    }
    out
}

/// Header row plus data rows, columns right-aligned. `None` when the sheet
/// has no data rows.
pub(crate) fn render_table(filename: &str, sheet: &str, range: &Range<Data>) -> Option<String> {
    let grid: Vec<Vec<String>> = range
        .rows()
        .map(|row| row.iter().map(|cell| cell_text(cell).unwrap_or_default()).collect())
        .collect();

    if grid.len() < 2 {
        return None;
    }

    let columns = grid.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|c| {
            grid.iter()
                .filter_map(|row| row.get(c))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let lines: Vec<String> = grid
        .iter()
        .map(|row| {
            widths
                .iter()
                .enumerate()
                .map(|(c, width)| {
                    let cell = row.get(c).map(String::as_str).unwrap_or("");
                    format!("{:>width$}", cell, width = width)
                })
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect();

    Some(format!("{}{}\n\n", heading(filename, sheet), lines.join("\n")))
}

fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::DateTime(dt) => Some(date_text(dt)),
        other => {
            let text = other.to_string();
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
    }
}

/// Dates as `%Y-%m-%d`, with the time appended only when it is not
/// midnight. Durations keep their serial value.
fn date_text(dt: &ExcelDateTime) -> String {
    match dt.as_datetime() {
        Some(datetime) if dt.is_datetime() => {
            if datetime.num_seconds_from_midnight() == 0 {
                datetime.format("%Y-%m-%d").to_string()
            } else {
                datetime.format("%Y-%m-%d %H:%M:%S").to_string()
            }
        }
        _ => dt.as_f64().to_string(),
    }
}
