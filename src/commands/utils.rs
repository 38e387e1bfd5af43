use crate::aggregator::Granularity;
use crate::output::{read_report, render_summary};
use crate::utils::config::SCHEMA_VERSION;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Validate a report JSON file
pub fn validate_report_file(file_path: PathBuf, show_summary: bool) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)
        .with_context(|| format!("Failed to read report {}", file_path.display()))?;

    if report.version != SCHEMA_VERSION {
        anyhow::bail!(
            "Unsupported report version {} (expected {})",
            report.version,
            SCHEMA_VERSION
        );
    }

    let data = &report.data;
    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Generated: {}", report.generated_at);
    println!("  Applications: {}", data.applications.len());
    println!("  Timeline Days: {}", data.application_data_over_time.len());
    println!("  Ghost Rate: {:.2}%", data.company_ghost_rate);
    println!("  Salary Coverage: {}%", data.salary_range_percentage);

    if show_summary {
        println!("{}", render_summary(data, Granularity::Weekly));
    }

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Jobhunt Stats Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string                        - Schema version (e.g., '1.0.0')");
        println!("  generatedAt: string                    - RFC 3339 timestamp");
        println!("  data: object                           - Compiled metrics");
        println!("    applications: array                  - Snapshot the metrics came from");
        println!("    applicationData: array               - Outcome slices {{label, value, fill}}");
        println!("    applicationDataOverTime: array       - One entry per day (MM/DD/YYYY)");
        println!("    applicationSessions: array           - Pipeline step counts {{name, value, fill}}");
        println!("    applicationSessionsAmount: number    - Stage occurrences");
        println!("    applicationSessionTimes: array       - Hours per stage type");
        println!("    applicationSessionsTotalHours: number - Interview hours, rounded up");
        println!("    averageAutoRejectionResponseTime: number - Days, no interviews");
        println!("    averageInterviewCycleLength: number  - Days, after interviewing");
        println!("    companiesInterviewedCount: number");
        println!("    companiesInterviewedPercentage: string - Two decimals");
        println!("    companyGhostAmount: number");
        println!("    companyGhostEstimatedHours: number");
        println!("    companyGhostRate: number             - Percent, two decimals");
        println!("    holidayRejections: number");
        println!("    salaryRanges: array                  - Senior, Mid-level, Junior");
        println!("    salaryRangePercentage: number        - Percent, two decimals");
        println!("    jobSearchDuration: string?           - e.g. '2 months and 3 days'");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Jobhunt Stats v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Job-search analytics compiled from a spreadsheet of applications.");
}
