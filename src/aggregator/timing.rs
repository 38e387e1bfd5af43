//! Ghosting and response-time statistics.
//!
//! All averages here return 0 when nothing qualifies.

use crate::parser::fields::{format_date, round_to};
use crate::parser::record::{Application, Decision};
use crate::utils::config::{HOLIDAY_DATES, MINUTES_PER_APPLICATION};
use log::debug;

/// Ghosting summary
///
/// **Public** - returned from company_ghost_rate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GhostRate {
    /// Applications classified as ghosted
    pub amount: usize,

    /// Ghosted share of closed applications, percent with 2 decimals
    pub rate: f64,

    /// Time sunk into ghosted applications, whole hours
    pub estimated_hours: u64,
}

/// Compute the company ghost rate
///
/// **Public** - main entry point for ghosting statistics
///
/// # Algorithm
/// 1. Ghosted = decision classified as ghosted
/// 2. Rate = ghosted / applications with `out` present, as a percentage
/// 3. Hours = (ghosted × per-application minutes + their recorded
///    interview minutes) / 60, rounded half up
///
/// The rate is 0 when no application has been closed.
pub fn company_ghost_rate(applications: &[Application]) -> GhostRate {
    let ghosted: Vec<&Application> = applications
        .iter()
        .filter(|app| app.decision_kind() == Decision::Ghosted)
        .collect();
    let closed = applications.iter().filter(|app| app.is_closed()).count();

    let rate = if closed == 0 {
        0.0
    } else {
        round_to(ghosted.len() as f64 / closed as f64 * 100.0, 2)
    };

    let interview_minutes: f64 = ghosted.iter().map(|app| app.total_interview_minutes()).sum();
    let application_minutes = ghosted.len() as f64 * MINUTES_PER_APPLICATION;
    let estimated_hours = ((application_minutes + interview_minutes) / 60.0 + 0.5)
        .floor()
        .max(0.0) as u64;

    debug!(
        "Ghosted {} of {} closed applications ({:.0} interview minutes)",
        ghosted.len(),
        closed,
        interview_minutes
    );

    GhostRate {
        amount: ghosted.len(),
        rate,
        estimated_hours,
    }
}

/// Average days from applying to a rejection that came without any interview
///
/// Qualifying: no stage reached, both dates parse, and `out >= applied`.
pub fn average_auto_rejection_response_time(applications: &[Application]) -> i64 {
    average_days(
        applications
            .iter()
            .filter(|app| !app.reached_any_stage()),
    )
}

/// Average days from applying to a decision for applications that interviewed
///
/// Qualifying: at least one interview stage reached, both dates parse,
/// and `out >= applied`.
pub fn average_interview_cycle_length(applications: &[Application]) -> i64 {
    average_days(
        applications
            .iter()
            .filter(|app| app.reached_any_stage()),
    )
}

/// Mean elapsed days between `applied` and `out`, rounded to whole days
fn average_days<'a>(candidates: impl Iterator<Item = &'a Application>) -> i64 {
    let spans: Vec<i64> = candidates
        .filter_map(|app| {
            let applied = app.applied_date()?;
            let out = app.out_date()?;
            (out >= applied).then(|| (out - applied).num_days())
        })
        .collect();

    if spans.is_empty() {
        return 0;
    }

    let mean = spans.iter().sum::<i64>() as f64 / spans.len() as f64;
    round_to(mean, 0) as i64
}

/// Count applications closed on a known holiday
pub fn holiday_rejections(applications: &[Application]) -> usize {
    applications
        .iter()
        .filter_map(|app| app.out_date())
        .filter(|out| HOLIDAY_DATES.contains(&format_date(*out).as_str()))
        .count()
}
