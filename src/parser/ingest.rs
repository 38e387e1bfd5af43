//! Turn raw source rows into `Application` records.
//!
//! This is the single place where column names are looked up. Rows with
//! no usable `applied` date never reach the aggregators.

use super::fields::present;
use super::record::{Application, Stage};
use crate::source::types::RawRow;
use log::{debug, warn};
use serde_json::Value;

/// Convert every raw row, dropping rows without a valid `applied` date
///
/// **Public** - main entry point for ingestion
pub fn ingest_rows(rows: &[RawRow]) -> Vec<Application> {
    let mut unparseable = 0usize;

    let applications: Vec<Application> = rows
        .iter()
        .filter_map(|row| {
            let app = application_from_row(row)?;
            if app.applied_date().is_none() {
                unparseable += 1;
                debug!("Dropping row with unparseable applied date: {:?}", app.applied);
                return None;
            }
            Some(app)
        })
        .collect();

    if unparseable > 0 {
        warn!("{} rows had an applied value that is not a date", unparseable);
    }

    debug!(
        "Ingested {} applications from {} rows",
        applications.len(),
        rows.len()
    );

    applications
}

/// Build an application from one row; `None` when `applied` is absent
pub fn application_from_row(row: &RawRow) -> Option<Application> {
    let text = |column: &str| cell_text(row.get(column));

    let applied = text("applied")?;

    Some(Application {
        applied,
        out: text("out"),
        decision: text("decision"),
        recruiter_screen: text(Stage::RecruiterScreen.column()),
        manager_screen: text(Stage::ManagerScreen.column()),
        tech_interview1: text(Stage::TechInterview1.column()),
        tech_interview2: text(Stage::TechInterview2.column()),
        panel: text(Stage::Panel.column()),
        ceo: text(Stage::Ceo.column()),
        offer: text("offer"),
        recruiter_screen_time: text(Stage::RecruiterScreen.time_column()),
        manager_screen_time: text(Stage::ManagerScreen.time_column()),
        tech_interview1_time: text(Stage::TechInterview1.time_column()),
        tech_interview2_time: text(Stage::TechInterview2.time_column()),
        panel_time: text(Stage::Panel.time_column()),
        ceo_time: text(Stage::Ceo.time_column()),
        pay_min: text("payMin"),
        pay_max: text("payMax"),
        level: text("level"),
    })
}

/// Render a cell as normalized text
///
/// Numbers keep their shortest decimal form (`60`, `60.5`); null, empty
/// and structured values are absent.
pub fn cell_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => present(Some(s)).map(str::to_string),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn row(value: Value) -> RawRow {
        match value {
            Value::Object(map) => map,
            _ => panic!("row must be an object"),
        }
    }

    #[test]
    fn test_application_from_row() {
        let raw = row(json!({
            "applied": "01/01/2025",
            "out": "",
            "decision": null,
            "recruiterScreen": "01/03/2025",
            "recruiterScreenTime": 45,
            "payMin": "$100,000",
            "level": "Senior",
            "notes": "ignored"
        }));

        let app = application_from_row(&raw).unwrap();

        assert_eq!(app.applied, "01/01/2025");
        assert_eq!(app.out, None);
        assert_eq!(app.decision, None);
        assert_eq!(app.recruiter_screen.as_deref(), Some("01/03/2025"));
        assert_eq!(app.recruiter_screen_time.as_deref(), Some("45"));
        assert_eq!(app.pay_min.as_deref(), Some("$100,000"));
        assert_eq!(app.level.as_deref(), Some("Senior"));
    }

    #[test]
    fn test_rows_without_applied_are_dropped() {
        let rows = vec![
            row(json!({ "applied": "01/01/2025" })),
            row(json!({ "applied": null, "out": "01/02/2025" })),
            row(json!({ "applied": "   " })),
            row(json!({ "out": "01/02/2025" })),
            row(json!({ "applied": "someday" })),
        ];

        let apps = ingest_rows(&rows);

        assert_eq!(apps.len(), 1);
        assert_eq!(apps[0].applied, "01/01/2025");
    }

    #[test]
    fn test_two_digit_year_applied_is_dropped() {
        let rows = vec![
            row(json!({ "applied": "1/5/25", "out": "01/10/2025" })),
            row(json!({ "applied": "01/06/2025", "out": "01/10/2025" })),
        ];

        let apps = ingest_rows(&rows);

        assert_eq!(apps.len(), 1);
        assert_eq!(apps[0].applied, "01/06/2025");
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(Some(&json!(" a "))), Some("a".to_string()));
        assert_eq!(cell_text(Some(&json!(60))), Some("60".to_string()));
        assert_eq!(cell_text(Some(&json!(60.5))), Some("60.5".to_string()));
        assert_eq!(cell_text(Some(&json!(""))), None);
        assert_eq!(cell_text(Some(&Value::Null)), None);
        assert_eq!(cell_text(None), None);
    }
}
