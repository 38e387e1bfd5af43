//! Record normalization and schema definitions.
//!
//! This module handles:
//! - Normalizing loose spreadsheet cells (dates, currency, minutes)
//! - Building typed `Application` records from raw rows
//! - Classifying decisions and interview stages
//! - Defining output schema

pub mod fields;
pub mod ingest;
pub mod record;
pub mod schema;

// Re-export main types
pub use ingest::ingest_rows;
pub use record::{Application, Decision, Stage};
pub use schema::{
    BarDatum, CompiledReport, ReportEnvelope, SalaryRange, SliceDatum, TimelinePoint,
};
