//! Jobhunt Stats CLI
//!
//! Compiles job-search dashboard metrics from a spreadsheet of
//! applications and writes them as a versioned JSON report.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use env_logger::Env;
use jobhunt_stats::aggregator::Granularity;
use jobhunt_stats::commands::{
    display_schema, display_version, execute_compile, validate_args, validate_report_file,
    CompileArgs,
};
use std::path::PathBuf;

/// Jobhunt Stats - analytics for a job search spreadsheet
#[derive(Parser, Debug)]
#[command(name = "jobhunt")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch applications and compile the dashboard report
    Compile {
        /// Local export (.json or .csv) instead of the Sheets API
        #[arg(short, long, conflicts_with = "sheet")]
        input: Option<PathBuf>,

        /// Spreadsheet ID
        #[arg(long)]
        sheet: Option<String>,

        /// TOML source configuration
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Sheets API key
        // Must match utils::config::API_KEY_ENV
        #[arg(long, env = "JOBHUNT_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        /// Sheet name or A1 range
        #[arg(long)]
        range: Option<String>,

        /// First day of the search (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<NaiveDate>,

        /// Output path for the JSON report
        #[arg(short, long, default_value = "artifacts/dashboard.json")]
        output: PathBuf,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,

        /// Timeline bucket size for the summary
        #[arg(long, default_value = "weekly")]
        granularity: Granularity,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,

        /// Print the text summary as well
        #[arg(long)]
        summary: bool,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Compile {
            input,
            sheet,
            config,
            api_key,
            range,
            start_date,
            output,
            summary,
            granularity,
        } => {
            let args = CompileArgs {
                input,
                sheet,
                config,
                api_key,
                range,
                start_date,
                output_json: output,
                print_summary: summary,
                granularity,
            };

            validate_args(&args)?;
            execute_compile(args)?;
        }

        Commands::Validate { file, summary } => {
            validate_report_file(file, summary)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
