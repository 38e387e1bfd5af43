//! Record sources: where application rows come from.
//!
//! The aggregation core only ever sees the rows a source returns; fetching,
//! credentials and transport failures all stay on this side.

pub mod client;
pub mod file;
pub mod types;

pub use client::SheetsClient;
pub use file::FileSource;
pub use types::RawRow;

use crate::utils::error::SourceError;

/// Something that can produce a snapshot of raw spreadsheet rows
pub trait RecordSource {
    /// Short human-readable description for logs
    fn describe(&self) -> String;

    /// Fetch the full snapshot; failures propagate, nothing is retried
    fn fetch_rows(&self) -> Result<Vec<RawRow>, SourceError>;
}
