//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.
//!
//! The aggregation core has no error type: malformed fields degrade to
//! "absent" and empty denominators yield 0.

use thiserror::Error;

/// Errors that can occur while fetching rows from the record source
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Invalid spreadsheet response: {0}")]
    InvalidResponse(String),

    #[error("Spreadsheet not found: {0}")]
    SheetNotFound(String),

    #[error("Spreadsheet access denied (check the API key)")]
    Unauthorized,

    #[error("Missing source setting: {0}")]
    MissingSetting(&'static str),

    #[error("Unsupported input format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("CSV parsing failed: {0}")]
    CsvError(#[from] csv::Error),
}

/// Errors that can occur while loading the source configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
