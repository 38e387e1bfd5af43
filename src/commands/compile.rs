//! Compile command implementation.
//!
//! The compile command:
//! 1. Resolves the record source (file export or Sheets API)
//! 2. Fetches the raw rows
//! 3. Ingests them into applications
//! 4. Compiles every metric
//! 5. Writes the JSON report

use super::models::CompileArgs;
use crate::compiler::{compile_report, to_envelope, CompileOptions};
use crate::output::{render_summary, write_report};
use crate::parser::ingest_rows;
use crate::source::{FileSource, RecordSource, SheetsClient};
use crate::utils::config::{load_source_config, SourceConfig, API_KEY_ENV};
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the compile command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Config file read/parse failures
/// * Source fetch failures (network, auth, unreadable file)
/// * File write errors
pub fn execute_compile(args: CompileArgs) -> Result<()> {
    let start_time = Instant::now();

    // Step 1: Resolve source
    info!("Step 1/5: Resolving record source...");
    let config = resolve_source_config(&args)?;
    let source = build_source(&args, &config)?;
    info!("Source: {}", source.describe());

    // Step 2: Fetch rows
    info!("Step 2/5: Fetching rows...");
    let rows = source
        .fetch_rows()
        .with_context(|| format!("Failed to fetch rows from {}", source.describe()))?;
    debug!("Fetched {} raw rows", rows.len());

    // Step 3: Ingest
    info!("Step 3/5: Ingesting applications...");
    let applications = ingest_rows(&rows);
    info!("{} applications in snapshot", applications.len());

    // Step 4: Compile
    info!("Step 4/5: Compiling metrics...");
    let options = CompileOptions {
        search_start: config.search_start,
        ..Default::default()
    };
    let report = compile_report(&applications, &options);

    // Step 5: Write output
    info!("Step 5/5: Writing report...");
    let envelope = to_envelope(report);
    write_report(&envelope, &args.output_json).context("Failed to write report JSON")?;

    info!("✓ Report written to: {}", args.output_json.display());

    if args.print_summary {
        println!("{}", render_summary(&envelope.data, args.granularity));
    }

    let elapsed = start_time.elapsed();
    info!("Compile completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Merge the config file (if any) with CLI overrides
///
/// **Private** - CLI values win over file values
fn resolve_source_config(args: &CompileArgs) -> Result<SourceConfig> {
    let mut config = match &args.config {
        Some(path) => load_source_config(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => SourceConfig::default(),
    };

    if let Some(sheet) = &args.sheet {
        config.spreadsheet_id = Some(sheet.clone());
    }
    if let Some(key) = &args.api_key {
        config.api_key = Some(key.clone());
    }
    if let Some(range) = &args.range {
        config.range = Some(range.clone());
    }
    if let Some(start) = args.start_date {
        config.search_start = Some(start);
    }

    Ok(config)
}

/// Pick the record source: a local export wins over the Sheets API
fn build_source(args: &CompileArgs, config: &SourceConfig) -> Result<Box<dyn RecordSource>> {
    if let Some(path) = &args.input {
        return Ok(Box::new(FileSource::new(path)));
    }

    let client = SheetsClient::new(config).with_context(|| {
        format!(
            "Failed to create Sheets client (api_key comes from the config file, --api-key or {})",
            API_KEY_ENV
        )
    })?;
    Ok(Box::new(client))
}

/// Validate compile arguments
///
/// **Public** - can be called before execute_compile for early validation
pub fn validate_args(args: &CompileArgs) -> Result<()> {
    if args.input.is_some() && args.sheet.is_some() {
        anyhow::bail!("Use either --input or --sheet, not both");
    }

    if args.input.is_none() && args.sheet.is_none() && args.config.is_none() {
        anyhow::bail!("No record source: pass --input, --sheet or --config");
    }

    if let Some(input) = &args.input {
        if !input.is_file() {
            anyhow::bail!("Input file not found: {}", input.display());
        }
    }

    if let Some(sheet) = &args.sheet {
        if sheet.trim().is_empty() {
            anyhow::bail!("Spreadsheet ID cannot be empty");
        }
    }

    if args.output_json.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_args_sheet() {
        let args = CompileArgs {
            sheet: Some("1AbC".to_string()),
            ..Default::default()
        };
        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_validate_args_no_source() {
        assert!(validate_args(&CompileArgs::default()).is_err());
    }

    #[test]
    fn test_validate_args_both_sources() {
        let input = NamedTempFile::new().unwrap();
        let args = CompileArgs {
            input: Some(input.path().to_path_buf()),
            sheet: Some("1AbC".to_string()),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_missing_input() {
        let args = CompileArgs {
            input: Some(PathBuf::from("/definitely/not/here.csv")),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_blank_sheet() {
        let args = CompileArgs {
            sheet: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_empty_output() {
        let args = CompileArgs {
            sheet: Some("1AbC".to_string()),
            output_json: PathBuf::new(),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_cli_overrides_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "spreadsheet_id = \"from-file\"\napi_key = \"file-key\"\nrange = \"Sheet1\"\nsearch_start = \"2025-01-01\""
        )
        .unwrap();

        let args = CompileArgs {
            config: Some(file.path().to_path_buf()),
            sheet: Some("from-cli".to_string()),
            start_date: NaiveDate::from_ymd_opt(2025, 3, 1),
            ..Default::default()
        };

        let config = resolve_source_config(&args).unwrap();

        assert_eq!(config.spreadsheet_id.as_deref(), Some("from-cli"));
        assert_eq!(config.api_key.as_deref(), Some("file-key"));
        assert_eq!(config.range_or_default(), "Sheet1");
        assert_eq!(config.search_start, NaiveDate::from_ymd_opt(2025, 3, 1));
    }

    #[test]
    fn test_sheet_source_requires_api_key() {
        let args = CompileArgs {
            sheet: Some("1AbC".to_string()),
            ..Default::default()
        };
        let config = resolve_source_config(&args).unwrap();
        assert!(build_source(&args, &config).is_err());
    }
}
