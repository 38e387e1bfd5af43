//! Output writers for compiled reports.
//!
//! This module handles:
//! - JSON report envelopes (write and read back)
//! - Text summaries for the terminal

pub mod json;
pub mod summary;

// Re-export main functions
pub use json::{read_report, report_to_string, write_report};
pub use summary::render_summary;
