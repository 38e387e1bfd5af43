//! Output JSON schema definitions for the compiled dashboard report.
//!
//! Field names are camelCase because the presentation layer binds to
//! them directly. Schema is versioned to allow future evolution.

use super::record::Application;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Top-level document written to disk
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportEnvelope {
    /// Schema version for compatibility checking
    pub version: String,

    /// Timestamp when the report was generated (RFC 3339)
    pub generated_at: String,

    /// The compiled metrics
    pub data: CompiledReport,
}

/// Every metric the dashboard shows, from one snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompiledReport {
    /// The snapshot the metrics were computed from
    pub applications: Vec<Application>,

    /// Applications by outcome (pie chart)
    pub application_data: Vec<SliceDatum>,

    /// One entry per calendar day
    pub application_data_over_time: Vec<TimelinePoint>,

    /// Applications reaching each pipeline step (bar chart)
    pub application_sessions: Vec<BarDatum>,

    /// Stage occurrences across all applications
    pub application_sessions_amount: usize,

    /// Whole hours per stage type; types with no recorded time are omitted
    pub application_session_times: Vec<BarDatum>,

    /// Interview hours, rounded up
    pub application_sessions_total_hours: u64,

    /// Days from applying to a rejection with no interviews
    pub average_auto_rejection_response_time: i64,

    /// Days from applying to a decision after interviewing
    pub average_interview_cycle_length: i64,

    pub companies_interviewed_count: usize,

    /// Two-decimal percentage, as text
    pub companies_interviewed_percentage: String,

    pub company_ghost_amount: usize,

    pub company_ghost_estimated_hours: u64,

    /// Percentage of closed applications that were ghosted
    pub company_ghost_rate: f64,

    pub holiday_rejections: usize,

    /// Always Senior, Mid-level, Junior in that order
    pub salary_ranges: Vec<SalaryRange>,

    /// Percentage of applications with a usable salary range
    pub salary_range_percentage: f64,

    /// Human-readable time since the search started
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_search_duration: Option<String>,
}

/// Pie slice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliceDatum {
    pub label: String,
    pub value: usize,
    pub fill: String,
}

/// Bar in a bar chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarDatum {
    pub name: String,
    pub value: u64,
    pub fill: String,
}

/// Event counts for one time bucket, keyed by the bucket's first day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelinePoint {
    #[serde(with = "sheet_date")]
    pub date: NaiveDate,
    pub applied: usize,
    pub ghosted: usize,
    pub not_selected: usize,
    pub cancelled: usize,
    pub application_rescinded: usize,
    pub offer_rescinded: usize,
    pub interviews: usize,
}

impl TimelinePoint {
    /// Zero-filled bucket
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            applied: 0,
            ghosted: 0,
            not_selected: 0,
            cancelled: 0,
            application_rescinded: 0,
            offer_rescinded: 0,
            interviews: 0,
        }
    }

    /// Add another bucket's counts into this one
    pub fn absorb(&mut self, other: &TimelinePoint) {
        self.applied += other.applied;
        self.ghosted += other.ghosted;
        self.not_selected += other.not_selected;
        self.cancelled += other.cancelled;
        self.application_rescinded += other.application_rescinded;
        self.offer_rescinded += other.offer_rescinded;
        self.interviews += other.interviews;
    }
}

/// Salary statistics for one experience level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryRange {
    pub name: String,
    pub min: i64,
    pub lower_quartile: i64,
    pub median: i64,
    pub upper_quartile: i64,
    pub max: i64,
    pub average: i64,
}

impl SalaryRange {
    /// All-zero row for a level with no usable data
    pub fn zeroed(name: &str) -> Self {
        Self {
            name: name.to_string(),
            min: 0,
            lower_quartile: 0,
            median: 0,
            upper_quartile: 0,
            max: 0,
            average: 0,
        }
    }
}

/// (De)serialize a `NaiveDate` as `MM/DD/YYYY`
mod sheet_date {
    use crate::utils::config::DATE_FORMAT;
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let text = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&text, DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}
