//! Outcome funnel: how many applications ended up where.
//!
//! Every application is classified exactly once, then tallied, so the
//! slice values always sum to the number of applications.

use crate::parser::record::{Application, Decision};
use crate::parser::schema::SliceDatum;
use log::debug;
use std::collections::HashMap;

/// Pie slices in display order: (bucket, label, colour key)
const SLICES: [(Decision, &str, &str); 8] = [
    (Decision::Pending, "Pending", "pending"),
    (Decision::Interviewing, "Interviewing", "interviewing"),
    (Decision::NotSelected, "Not Selected", "notSelected"),
    (Decision::Ghosted, "Ghosted", "ghosted"),
    (Decision::Cancelled, "Cancelled", "cancelled"),
    (
        Decision::ApplicationRescinded,
        "Application Rescinded",
        "applicationRescinded",
    ),
    (Decision::OfferRescinded, "Offer Rescinded", "offerRescinded"),
    (Decision::Unclassified, "Other", "other"),
];

/// Count applications per outcome bucket
///
/// **Public** - single classification pass shared by the funnel and tests
pub fn tally_decisions(applications: &[Application]) -> HashMap<Decision, usize> {
    let mut tally = HashMap::new();
    for app in applications {
        *tally.entry(app.decision_kind()).or_insert(0) += 1;
    }
    tally
}

/// Build the outcome pie chart
///
/// **Public** - main entry point for the funnel
///
/// # Returns
/// One slice per bucket in fixed order, zero-valued buckets included
pub fn application_data(applications: &[Application]) -> Vec<SliceDatum> {
    let tally = tally_decisions(applications);

    debug!("Decision tally over {} applications: {:?}", applications.len(), tally);

    SLICES
        .iter()
        .map(|(decision, label, key)| SliceDatum {
            label: label.to_string(),
            value: tally.get(decision).copied().unwrap_or(0),
            fill: format!("var(--color-{})", key),
        })
        .collect()
}

/// Applications that got any response beyond an automated one
///
/// Counts records with any interview stage or an offer present.
pub fn companies_interviewed_count(applications: &[Application]) -> usize {
    applications
        .iter()
        .filter(|app| app.reached_any_stage() || app.has_offer())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn app(decision: Option<&str>) -> Application {
        Application {
            applied: "01/01/2025".to_string(),
            decision: decision.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_application_data_counts() {
        let apps = vec![
            app(None),
            app(None),
            app(Some("ghosted")),
            app(Some("Not Selected")),
            app(Some("offer rescinded")),
            app(Some("withdrew")),
        ];

        let slices = application_data(&apps);

        assert_eq!(slices.len(), 8);
        assert_eq!(slices[0].label, "Pending");
        assert_eq!(slices[0].value, 2);
        assert_eq!(slices[0].fill, "var(--color-pending)");
        assert_eq!(slices[2].value, 1);
        assert_eq!(slices[3].value, 1);
        assert_eq!(slices[6].value, 1);
        assert_eq!(slices[7].label, "Other");
        assert_eq!(slices[7].value, 1);
    }

    #[test]
    fn test_slices_sum_to_total() {
        let apps = vec![
            app(None),
            app(Some("interviewing")),
            app(Some("application rescinded")),
            app(Some("cancelled")),
            app(Some("???")),
        ];

        let total: usize = application_data(&apps).iter().map(|s| s.value).sum();
        assert_eq!(total, apps.len());
    }

    #[test]
    fn test_empty_input() {
        let slices = application_data(&[]);
        assert!(slices.iter().all(|s| s.value == 0));
    }

    #[test]
    fn test_companies_interviewed_count() {
        let mut screened = app(None);
        screened.manager_screen = Some("01/10/2025".to_string());
        let mut offered = app(None);
        offered.offer = Some("02/01/2025".to_string());

        let apps = vec![screened, offered, app(Some("ghosted"))];

        assert_eq!(companies_interviewed_count(&apps), 2);
    }
}
