//! Jobhunt Stats
//!
//! Job-search analytics compiled from a spreadsheet of applications:
//! outcome funnel, interview volume, a daily activity timeline,
//! ghosting and response-time statistics, and salary ranges.
//!
//! This crate provides the core implementation for the
//! `jobhunt` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! jobhunt compile --input applications.csv --summary
//! jobhunt compile --config jobhunt.toml -o artifacts/dashboard.json
//! ```
//!
//! Library users go through [`compiler::compile_report`] with rows
//! ingested by [`parser::ingest_rows`].

pub mod aggregator;
pub mod commands;
pub mod compiler;
pub mod output;
pub mod parser;
pub mod source;
pub mod utils;
