//! Plain-text terminal summary of a compiled report.

use crate::aggregator::{resample, Granularity};
use crate::parser::fields::format_date;
use crate::parser::schema::CompiledReport;
use colored::*;

const RULE: &str = "---------------------------------------------------\n";

/// Render the whole summary
///
/// **Public** - printed by `compile --summary` and `validate`
pub fn render_summary(report: &CompiledReport, granularity: Granularity) -> String {
    let mut out = String::new();

    out.push_str(&render_header(report));
    out.push_str(&render_outcomes(report));
    out.push_str(&render_pipeline(report));
    out.push_str(&render_timing(report));
    out.push_str(&render_salaries(report));
    out.push_str(&render_timeline(report, granularity));

    out
}

fn render_header(report: &CompiledReport) -> String {
    let mut out = String::new();
    out.push_str("\n📊 ");
    out.push_str(&"Job Search Summary".bold().to_string());
    out.push('\n');
    out.push_str(RULE);
    out.push_str(&format!("Applications: {}\n", report.applications.len()));
    if let Some(duration) = &report.job_search_duration {
        out.push_str(&format!("Searching for: {}\n", duration));
    }
    out.push_str(RULE);
    out
}

fn render_outcomes(report: &CompiledReport) -> String {
    let mut out = String::from("\nOutcomes:\n");
    for slice in report.application_data.iter().filter(|s| s.value > 0) {
        out.push_str(&format!("  {:<24} {:>6}\n", slice.label, slice.value));
    }
    out
}

fn render_pipeline(report: &CompiledReport) -> String {
    let mut out = String::from("\nPipeline:\n");
    for bar in &report.application_sessions {
        out.push_str(&format!("  {:<24} {:>6}\n", bar.name, bar.value));
    }
    out.push_str(&format!(
        "  {} sessions, {} hours interviewing ({} companies, {}%)\n",
        report.application_sessions_amount,
        report.application_sessions_total_hours,
        report.companies_interviewed_count,
        report.companies_interviewed_percentage
    ));
    out
}

fn render_timing(report: &CompiledReport) -> String {
    let mut out = String::from("\nResponses:\n");

    let rate = format!("{:.2}%", report.company_ghost_rate);
    let rate = if report.company_ghost_rate >= 50.0 {
        rate.red()
    } else {
        rate.yellow()
    };
    out.push_str(&format!(
        "  👻 Ghost rate: {} ({} companies, ~{} hours)\n",
        rate, report.company_ghost_amount, report.company_ghost_estimated_hours
    ));
    out.push_str(&format!(
        "  Auto-rejection response: {} days\n",
        report.average_auto_rejection_response_time
    ));
    out.push_str(&format!(
        "  Interview cycle length:  {} days\n",
        report.average_interview_cycle_length
    ));
    if report.holiday_rejections > 0 {
        out.push_str(&format!(
            "  Rejected on a holiday:   {}\n",
            report.holiday_rejections.to_string().cyan()
        ));
    }
    out
}

fn render_salaries(report: &CompiledReport) -> String {
    let mut out = format!(
        "\nSalaries ({}% of postings list a range):\n",
        report.salary_range_percentage
    );
    for range in report.salary_ranges.iter().filter(|r| r.max > 0) {
        out.push_str(&format!(
            "  {:<10} {:>8} | {:>8} {:>8} {:>8} | {:>8}  avg {}\n",
            range.name,
            range.min,
            range.lower_quartile,
            range.median.to_string().green(),
            range.upper_quartile,
            range.max,
            range.average
        ));
    }
    out
}

fn render_timeline(report: &CompiledReport, granularity: Granularity) -> String {
    let buckets = resample(&report.application_data_over_time, granularity);
    if buckets.is_empty() {
        return String::new();
    }

    let mut out = format!("\nActivity ({}):\n", granularity);
    for bucket in &buckets {
        let closed = bucket.ghosted
            + bucket.not_selected
            + bucket.cancelled
            + bucket.application_rescinded
            + bucket.offer_rescinded;
        out.push_str(&format!(
            "  {}  applied {:>4}  interviews {:>3}  closed {:>4}\n",
            format_date(bucket.date),
            bucket.applied,
            bucket.interviews,
            closed
        ));
    }
    out
}
