//! Local spreadsheet exports.
//!
//! Accepted layouts:
//! - `.json` holding an array of row objects
//! - `.json` holding a saved Sheets `values.get` response
//! - `.csv` with a header row

use super::types::{rows_from_table, RawRow, ValueRange};
use super::RecordSource;
use crate::utils::error::SourceError;
use log::{debug, info, warn};
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Rows read from a file on disk
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for FileSource {
    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }

    fn fetch_rows(&self) -> Result<Vec<RawRow>, SourceError> {
        info!("Reading rows from: {}", self.path.display());

        let extension = self
            .path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => read_json_rows(&self.path),
            Some("csv") => read_csv_rows(&self.path),
            _ => Err(SourceError::UnsupportedFormat(format!(
                "{} (expected .json or .csv)",
                self.path.display()
            ))),
        }
    }
}

/// Read rows from a JSON export
fn read_json_rows(path: &Path) -> Result<Vec<RawRow>, SourceError> {
    let file = File::open(path)?;
    let document: Value = serde_json::from_reader(BufReader::new(file))?;
    rows_from_json(document)
}

/// Interpret a JSON document as rows
pub fn rows_from_json(document: Value) -> Result<Vec<RawRow>, SourceError> {
    match document {
        Value::Array(items) => {
            let total = items.len();
            let rows: Vec<RawRow> = items
                .into_iter()
                .filter_map(|item| match item {
                    Value::Object(row) => Some(row),
                    _ => None,
                })
                .collect();

            if rows.len() < total {
                warn!("Skipped {} array entries that are not objects", total - rows.len());
            }
            Ok(rows)
        }
        Value::Object(obj) if obj.contains_key("values") => {
            debug!("JSON looks like a Sheets values response");
            let values: ValueRange = serde_json::from_value(Value::Object(obj))?;
            Ok(rows_from_table(&values.values))
        }
        _ => Err(SourceError::UnsupportedFormat(
            "JSON must be an array of rows or a Sheets values response".to_string(),
        )),
    }
}

/// Read rows from a CSV export
fn read_csv_rows(path: &Path) -> Result<Vec<RawRow>, SourceError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    let mut rows = Vec::new();

    for record in reader.records() {
        let record = record?;
        let row: RawRow = headers
            .iter()
            .enumerate()
            .filter(|(_, header)| !header.is_empty())
            .map(|(i, header)| {
                let cell = record
                    .get(i)
                    .map(|v| Value::String(v.to_string()))
                    .unwrap_or(Value::Null);
                (header.to_string(), cell)
            })
            .collect();
        rows.push(row);
    }

    debug!("Read {} CSV rows with {} columns", rows.len(), headers.len());

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::io::Write;

    fn temp_with(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_json_array_rows() {
        let file = temp_with(
            ".json",
            r#"[{"applied": "01/01/2025", "decision": "ghosted"}, 5, {"applied": null}]"#,
        );

        let rows = FileSource::new(file.path()).fetch_rows().unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["decision"], json!("ghosted"));
    }

    #[test]
    fn test_json_values_response() {
        let file = temp_with(
            ".json",
            r#"{"range": "A:ZZ", "majorDimension": "ROWS", "values": [["applied", "level"], ["01/01/2025", "Junior"]]}"#,
        );

        let rows = FileSource::new(file.path()).fetch_rows().unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["level"], json!("Junior"));
    }

    #[test]
    fn test_csv_rows() {
        let file = temp_with(
            ".csv",
            "applied,out,payMin,payMax\n01/01/2025,01/05/2025,\"$100,000\",\"$120,000\"\n01/02/2025\n",
        );

        let rows = FileSource::new(file.path()).fetch_rows().unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["payMin"], json!("$100,000"));
        assert_eq!(rows[1]["out"], Value::Null);
    }

    #[test]
    fn test_unsupported_extension() {
        let file = temp_with(".xlsx", "");
        let result = FileSource::new(file.path()).fetch_rows();
        assert!(matches!(result, Err(SourceError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_json_scalar_rejected() {
        assert!(matches!(
            rows_from_json(json!("nope")),
            Err(SourceError::UnsupportedFormat(_))
        ));
    }
}
