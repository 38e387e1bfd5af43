//! Types for spreadsheet data as it comes off the wire.
//!
//! Based on the Google Sheets v4 `spreadsheets.values.get` response.

use serde::Deserialize;
use serde_json::Value;

/// One spreadsheet row: column header → cell value (string, number, or null)
///
/// Kept loose on purpose; typing happens once in `parser::ingest`.
pub type RawRow = serde_json::Map<String, Value>;

/// `spreadsheets.values.get` response body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange {
    #[serde(default)]
    pub range: Option<String>,

    #[serde(default)]
    pub major_dimension: Option<String>,

    /// Row-major cells; the first row holds the headers. Absent for an empty sheet.
    #[serde(default)]
    pub values: Vec<Vec<Value>>,
}

/// Sheets API error envelope
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiError,
}

/// Sheets API error object
#[derive(Debug, Deserialize)]
pub struct ApiError {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// Turn a header-first table into rows
///
/// Cells past the end of a short row are null. Columns with a blank
/// header are skipped.
pub fn rows_from_table(table: &[Vec<Value>]) -> Vec<RawRow> {
    let Some((header_row, data)) = table.split_first() else {
        return Vec::new();
    };

    let headers: Vec<Option<String>> = header_row
        .iter()
        .map(|cell| match cell {
            Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            _ => None,
        })
        .collect();

    data.iter()
        .map(|cells| {
            headers
                .iter()
                .enumerate()
                .filter_map(|(i, header)| {
                    let header = header.as_ref()?;
                    let cell = cells.get(i).cloned().unwrap_or(Value::Null);
                    Some((header.clone(), cell))
                })
                .collect()
        })
        .collect()
}
