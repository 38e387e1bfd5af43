//! HTTP client for reading application rows from Google Sheets.

use super::types::{rows_from_table, ApiErrorBody, RawRow, ValueRange};
use super::RecordSource;
use crate::utils::config::{SourceConfig, SHEETS_API_BASE};
use crate::utils::error::SourceError;
use log::{debug, info};
use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};

/// Sheets client bound to one spreadsheet range
pub struct SheetsClient {
    client: Client,
    base_url: String,
    spreadsheet_id: String,
    range: String,
    api_key: String,
}

impl SheetsClient {
    /// Create a client from source settings
    ///
    /// Requires `spreadsheet_id` and `api_key` to be set.
    pub fn new(config: &SourceConfig) -> Result<Self, SourceError> {
        let spreadsheet_id = config
            .spreadsheet_id
            .clone()
            .ok_or(SourceError::MissingSetting("spreadsheet_id"))?;
        let api_key = config
            .api_key
            .clone()
            .ok_or(SourceError::MissingSetting("api_key"))?;

        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(SourceError::RequestFailed)?;

        Ok(Self {
            client,
            base_url: SHEETS_API_BASE.to_string(),
            spreadsheet_id,
            range: config.range_or_default().to_string(),
            api_key,
        })
    }

    /// Point the client at a different API host (proxies, test servers)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch the configured range as raw rows
    pub fn fetch_values(&self) -> Result<ValueRange, SourceError> {
        info!(
            "Fetching spreadsheet {} range {}",
            self.spreadsheet_id, self.range
        );

        let url = build_values_url(&self.base_url, &self.spreadsheet_id, &self.range, &self.api_key)?;

        let response = self
            .client
            .get(url)
            .send()
            .map_err(SourceError::RequestFailed)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(map_status_error(status, &body, &self.spreadsheet_id));
        }

        let values: ValueRange = response.json().map_err(SourceError::RequestFailed)?;

        debug!(
            "Received {} rows (range {:?}, dimension {:?})",
            values.values.len(),
            values.range,
            values.major_dimension
        );

        if values
            .major_dimension
            .as_deref()
            .is_some_and(|d| d != "ROWS")
        {
            return Err(SourceError::InvalidResponse(
                "Expected row-major values".to_string(),
            ));
        }

        Ok(values)
    }
}

impl RecordSource for SheetsClient {
    fn describe(&self) -> String {
        format!("sheet {} ({})", self.spreadsheet_id, self.range)
    }

    fn fetch_rows(&self) -> Result<Vec<RawRow>, SourceError> {
        let values = self.fetch_values()?;
        Ok(rows_from_table(&values.values))
    }
}

/// Build `{base}/v4/spreadsheets/{id}/values/{range}?key={key}`
///
/// Path segments are percent-encoded, so ranges like `Sheet 1!A:Z` are safe.
fn build_values_url(
    base_url: &str,
    spreadsheet_id: &str,
    range: &str,
    api_key: &str,
) -> Result<Url, SourceError> {
    let mut url = Url::parse(base_url)
        .map_err(|e| SourceError::InvalidResponse(format!("Bad API base URL {}: {}", base_url, e)))?;

    url.path_segments_mut()
        .map_err(|_| SourceError::InvalidResponse(format!("API base URL cannot take a path: {}", base_url)))?
        .pop_if_empty()
        .extend(["v4", "spreadsheets", spreadsheet_id, "values", range]);

    url.query_pairs_mut().append_pair("key", api_key);

    Ok(url)
}

/// Map a non-success HTTP status to our error type
fn map_status_error(status: StatusCode, body: &str, spreadsheet_id: &str) -> SourceError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => SourceError::Unauthorized,
        StatusCode::NOT_FOUND => SourceError::SheetNotFound(spreadsheet_id.to_string()),
        _ => {
            let detail = serde_json::from_str::<ApiErrorBody>(body)
                .map(|b| {
                    format!(
                        "{} {}: {}",
                        b.error.code,
                        b.error.status.unwrap_or_default(),
                        b.error.message
                    )
                })
                .unwrap_or_else(|_| body.to_string());
            SourceError::InvalidResponse(format!("HTTP {}: {}", status, detail))
        }
    }
}
