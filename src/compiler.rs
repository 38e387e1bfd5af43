//! One-shot compilation of every dashboard metric from one snapshot.

use crate::aggregator::{
    application_data, application_data_over_time, application_sessions,
    average_auto_rejection_response_time, average_interview_cycle_length,
    companies_interviewed_count, company_ghost_rate, format_search_duration, holiday_rejections,
    salary_ranges,
};
use crate::parser::fields::percentage;
use crate::parser::schema::{CompiledReport, ReportEnvelope};
use crate::parser::Application;
use crate::utils::config::SCHEMA_VERSION;
use chrono::{Local, NaiveDate};
use log::debug;

/// Inputs to a compilation besides the records themselves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileOptions {
    /// First day of the job search; enables the duration text
    pub search_start: Option<NaiveDate>,

    /// Reference day for the duration text
    pub today: NaiveDate,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            search_start: None,
            today: Local::now().date_naive(),
        }
    }
}

/// Compile all metrics
///
/// **Public** - main entry point of the library
///
/// # Arguments
/// * `applications` - Ingested snapshot (every record has an `applied` date)
/// * `options` - Search start and reference day
///
/// # Returns
/// Every aggregator's output, each computed exactly once
pub fn compile_report(applications: &[Application], options: &CompileOptions) -> CompiledReport {
    debug!("Compiling report over {} applications", applications.len());

    let sessions = application_sessions(applications);
    let ghost = company_ghost_rate(applications);
    let salary = salary_ranges(applications);
    let interviewed = companies_interviewed_count(applications);

    CompiledReport {
        applications: applications.to_vec(),
        application_data: application_data(applications),
        application_data_over_time: application_data_over_time(applications),
        application_sessions: sessions.application_sessions,
        application_sessions_amount: sessions.sessions_amount,
        application_session_times: sessions.session_times,
        application_sessions_total_hours: sessions.total_hours,
        average_auto_rejection_response_time: average_auto_rejection_response_time(applications),
        average_interview_cycle_length: average_interview_cycle_length(applications),
        companies_interviewed_count: interviewed,
        companies_interviewed_percentage: interviewed_percentage(interviewed, applications.len()),
        company_ghost_amount: ghost.amount,
        company_ghost_estimated_hours: ghost.estimated_hours,
        company_ghost_rate: ghost.rate,
        holiday_rejections: holiday_rejections(applications),
        salary_ranges: salary.salary_ranges,
        salary_range_percentage: salary.salary_range_percentage,
        job_search_duration: options
            .search_start
            .map(|start| format_search_duration(start, options.today)),
    }
}

/// Wrap a compiled report with schema version and timestamp
pub fn to_envelope(report: CompiledReport) -> ReportEnvelope {
    ReportEnvelope {
        version: SCHEMA_VERSION.to_string(),
        generated_at: chrono::Utc::now().to_rfc3339(),
        data: report,
    }
}

/// Two-decimal text percentage; "0.00" with no applications
fn interviewed_percentage(interviewed: usize, total: usize) -> String {
    format!("{:.2}", percentage(interviewed, total))
}
