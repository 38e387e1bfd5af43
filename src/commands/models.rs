use crate::aggregator::Granularity;
use chrono::NaiveDate;
use std::path::PathBuf;

/// Arguments for the compile command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct CompileArgs {
    /// Local export to read instead of the Sheets API
    pub input: Option<PathBuf>,

    /// Spreadsheet ID (overrides the config file)
    pub sheet: Option<String>,

    /// TOML source configuration
    pub config: Option<PathBuf>,

    /// Sheets API key (overrides the config file)
    pub api_key: Option<String>,

    /// Sheet name or A1 range (overrides the config file)
    pub range: Option<String>,

    /// First day of the search (overrides the config file)
    pub start_date: Option<NaiveDate>,

    /// Output path for the JSON report
    pub output_json: PathBuf,

    /// Print text summary to stdout
    pub print_summary: bool,

    /// Timeline bucket size for the summary
    pub granularity: Granularity,
}

impl Default for CompileArgs {
    fn default() -> Self {
        Self {
            input: None,
            sheet: None,
            config: None,
            api_key: None,
            range: None,
            start_date: None,
            output_json: PathBuf::from("artifacts/dashboard.json"),
            print_summary: false,
            granularity: Granularity::Weekly,
        }
    }
}
