//! Aggregation of application records into dashboard metrics.
//!
//! Every aggregator is a pure function over the same snapshot:
//! - Outcome funnel and companies-interviewed count
//! - Interview volume and time spent per stage
//! - Daily timeline with weekly/monthly roll-ups
//! - Ghosting and response-time statistics
//! - Salary ranges per level
//! - Job-search duration text

pub mod duration;
pub mod funnel;
pub mod salary;
pub mod sessions;
pub mod timeline;
pub mod timing;

// Re-export main types and functions
pub use duration::format_search_duration;
pub use funnel::{application_data, companies_interviewed_count, tally_decisions};
pub use salary::{salary_ranges, SalaryReport};
pub use sessions::{application_sessions, SessionSummary};
pub use timeline::{application_data_over_time, resample, Granularity};
pub use timing::{
    average_auto_rejection_response_time, average_interview_cycle_length, company_ghost_rate,
    holiday_rejections, GhostRate,
};
