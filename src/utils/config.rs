//! Configuration and constants for the CLI.

use super::error::ConfigError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Default timeout for spreadsheet requests
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Current output schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Base URL of the Google Sheets v4 API
pub const SHEETS_API_BASE: &str = "https://sheets.googleapis.com";

/// Range read when none is configured (whole first sheet)
pub const DEFAULT_SHEET_RANGE: &str = "A:ZZ";

/// Environment variable holding the Sheets API key
pub const API_KEY_ENV: &str = "JOBHUNT_API_KEY";

/// Calendar format used by the spreadsheet and by every date in the report
pub const DATE_FORMAT: &str = "%m/%d/%Y";

// Average time spent filling in one job application, in minutes
pub const MINUTES_PER_APPLICATION: f64 = 23.0;

// Fraction of each tail dropped before salary statistics
pub const SALARY_TRIM_FRACTION: f64 = 0.05;

/// Experience levels reported by the salary aggregator, in output order
pub const SALARY_LEVELS: &[&str] = &["Senior", "Mid-level", "Junior"];

/// Known holidays (`MM/DD/YYYY`), compared against rejection dates
pub const HOLIDAY_DATES: &[&str] = &[
    "09/01/2025",
    "10/13/2025",
    "11/11/2025",
    "11/27/2025",
    "12/25/2025",
    "01/01/2026",
    "01/19/2026",
    "02/16/2026",
    "05/25/2026",
    "07/04/2026",
    "09/07/2026",
    "10/12/2026",
    "11/26/2026",
    "12/25/2026",
];

/// Record source settings, loaded once at startup
///
/// The aggregation core never sees this; only the record source does.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SourceConfig {
    /// Spreadsheet document ID
    #[serde(default)]
    pub spreadsheet_id: Option<String>,

    /// Sheet name or A1 range to read
    #[serde(default)]
    pub range: Option<String>,

    /// Sheets API key (single service credential)
    #[serde(default)]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Day the job search started, used for the duration card
    #[serde(default)]
    pub search_start: Option<NaiveDate>,
}

impl SourceConfig {
    /// Range to request, falling back to the whole first sheet
    pub fn range_or_default(&self) -> &str {
        self.range.as_deref().unwrap_or(DEFAULT_SHEET_RANGE)
    }

    /// Request timeout, falling back to [`DEFAULT_FETCH_TIMEOUT`]
    pub fn timeout(&self) -> Duration {
        self.timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_FETCH_TIMEOUT)
    }
}

/// Load source settings from a TOML file
///
/// # Errors
/// * `ConfigError::Io` - If file cannot be read
/// * `ConfigError::Toml` - If TOML is invalid
/// * `ConfigError::Invalid` - If a value is out of range
///
/// # Example
/// ```ignore
/// let config = load_source_config("jobhunt.toml")?;
/// ```
pub fn load_source_config(path: impl AsRef<Path>) -> Result<SourceConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: SourceConfig = toml::from_str(&contents)?;

    if config.timeout_secs == Some(0) {
        return Err(ConfigError::Invalid(
            "timeout_secs must be greater than 0".to_string(),
        ));
    }

    Ok(config)
}
