//! Interview volume and time spent per stage.

use crate::parser::record::{Application, Stage};
use crate::parser::schema::BarDatum;
use log::debug;

/// Stage types as displayed; both tech interview slots share one bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionKind {
    RecruiterScreen,
    ManagerScreen,
    TechInterviews,
    Panel,
    Ceo,
}

impl SessionKind {
    const DISPLAY_ORDER: [SessionKind; 5] = [
        SessionKind::RecruiterScreen,
        SessionKind::ManagerScreen,
        SessionKind::TechInterviews,
        SessionKind::Panel,
        SessionKind::Ceo,
    ];

    fn of(stage: Stage) -> Self {
        match stage {
            Stage::RecruiterScreen => SessionKind::RecruiterScreen,
            Stage::ManagerScreen => SessionKind::ManagerScreen,
            Stage::TechInterview1 | Stage::TechInterview2 => SessionKind::TechInterviews,
            Stage::Panel => SessionKind::Panel,
            Stage::Ceo => SessionKind::Ceo,
        }
    }

    fn label(self) -> &'static str {
        match self {
            SessionKind::RecruiterScreen => "Recruiter Screens",
            SessionKind::ManagerScreen => "Manager Screens",
            SessionKind::TechInterviews => "Tech Interviews",
            SessionKind::Panel => "Panels",
            SessionKind::Ceo => "CEO Interviews",
        }
    }

    fn color_key(self) -> &'static str {
        match self {
            SessionKind::RecruiterScreen => "recruiterScreen",
            SessionKind::ManagerScreen => "managerScreen",
            SessionKind::TechInterviews => "techInterviews",
            SessionKind::Panel => "panel",
            SessionKind::Ceo => "ceo",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Interview volume and time statistics
///
/// **Public** - returned from application_sessions
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    /// Pipeline step counts: applications, screens, tech, final rounds, offers
    pub application_sessions: Vec<BarDatum>,

    /// Stage occurrences across all applications and stage types
    pub sessions_amount: usize,

    /// Whole hours per stage type, only types with time recorded
    pub session_times: Vec<BarDatum>,

    /// All recorded interview time, rounded up to whole hours
    pub total_hours: u64,
}

/// Compute interview volume and time spent
///
/// **Public** - main entry point for session statistics
///
/// # Algorithm
/// 1. Count applications reaching each pipeline step (presence only)
/// 2. Walk every (application, stage) pair that was reached
/// 3. Add its minutes to the stage type and the grand total
/// 4. Convert to hours: per type rounded, grand total rounded up
pub fn application_sessions(applications: &[Application]) -> SessionSummary {
    let mut minutes_by_kind = [0.0f64; 5];
    let mut total_minutes = 0.0;
    let mut sessions_amount = 0usize;

    for app in applications {
        for stage in Stage::ALL {
            if !app.reached(stage) {
                continue;
            }
            sessions_amount += 1;

            let minutes = app.stage_minutes(stage);
            total_minutes += minutes;
            minutes_by_kind[SessionKind::of(stage).index()] += minutes;
        }
    }

    debug!(
        "{} sessions, {:.0} minutes recorded",
        sessions_amount, total_minutes
    );

    let session_times = SessionKind::DISPLAY_ORDER
        .iter()
        .filter(|kind| minutes_by_kind[kind.index()] > 0.0)
        .map(|kind| BarDatum {
            name: kind.label().to_string(),
            value: hours_rounded(minutes_by_kind[kind.index()]),
            fill: format!("var(--color-{})", kind.color_key()),
        })
        .collect();

    SessionSummary {
        application_sessions: pipeline_counts(applications),
        sessions_amount,
        session_times,
        total_hours: hours_ceiling(total_minutes),
    }
}

/// Presence counts down the pipeline
///
/// Each step is counted independently, so later steps may exceed earlier ones.
fn pipeline_counts(applications: &[Application]) -> Vec<BarDatum> {
    let count = |pred: fn(&Application) -> bool| {
        applications.iter().filter(|app| pred(app)).count() as u64
    };

    let steps: [(&str, u64, &str); 6] = [
        ("Applications", applications.len() as u64, "blue-900"),
        (
            "Recruiter Screens",
            count(|a| a.reached(Stage::RecruiterScreen)),
            "blue-800",
        ),
        (
            "Manager Screens",
            count(|a| a.reached(Stage::ManagerScreen)),
            "blue-700",
        ),
        (
            "Tech Interviews",
            count(|a| a.reached(Stage::TechInterview1) || a.reached(Stage::TechInterview2)),
            "blue-600",
        ),
        (
            "Final Rounds",
            count(|a| a.reached(Stage::Panel) || a.reached(Stage::Ceo)),
            "blue-500",
        ),
        ("Offers", count(|a| a.has_offer()), "blue-400"),
    ];

    steps
        .iter()
        .map(|(name, value, color)| BarDatum {
            name: name.to_string(),
            value: *value,
            fill: format!("var(--color-{})", color),
        })
        .collect()
}

/// Minutes to whole hours, rounded half up
fn hours_rounded(minutes: f64) -> u64 {
    (minutes / 60.0 + 0.5).floor().max(0.0) as u64
}

/// Minutes to whole hours, rounded up
fn hours_ceiling(minutes: f64) -> u64 {
    (minutes / 60.0).ceil().max(0.0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn applied() -> Application {
        Application {
            applied: "01/01/2025".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_sessions_amount_and_hours() {
        let mut a = applied();
        a.recruiter_screen = Some("01/02/2025".to_string());
        a.recruiter_screen_time = Some("30".to_string());
        a.tech_interview1 = Some("01/05/2025".to_string());
        a.tech_interview1_time = Some("60".to_string());
        a.tech_interview2 = Some("01/06/2025".to_string());
        a.tech_interview2_time = Some("61".to_string());

        let mut b = applied();
        b.recruiter_screen = Some("01/03/2025".to_string());
        b.recruiter_screen_time = Some("not recorded".to_string());
        b.panel = Some("01/09/2025".to_string());

        let summary = application_sessions(&[a, b]);

        assert_eq!(summary.sessions_amount, 5);
        // 30 + 60 + 61 = 151 minutes -> 2.52 hours, ceiling 3
        assert_eq!(summary.total_hours, 3);

        let names: Vec<&str> = summary.session_times.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Recruiter Screens", "Tech Interviews"]);
        // 30 minutes rounds half up to 1 hour
        assert_eq!(summary.session_times[0].value, 1);
        // 121 minutes -> 2 hours
        assert_eq!(summary.session_times[1].value, 2);
        assert_eq!(summary.session_times[1].fill, "var(--color-techInterviews)");
    }

    #[test]
    fn test_time_without_stage_is_ignored() {
        let mut a = applied();
        a.ceo_time = Some("90".to_string());

        let summary = application_sessions(&[a]);

        assert_eq!(summary.sessions_amount, 0);
        assert_eq!(summary.total_hours, 0);
        assert!(summary.session_times.is_empty());
    }

    #[test]
    fn test_pipeline_counts_are_independent() {
        let mut a = applied();
        a.panel = Some("01/09/2025".to_string());
        a.offer = Some("01/20/2025".to_string());

        let mut b = applied();
        b.tech_interview2 = Some("01/04/2025".to_string());

        let summary = application_sessions(&[a, b, applied()]);
        let values: Vec<u64> = summary.application_sessions.iter().map(|d| d.value).collect();

        assert_eq!(values, vec![3, 0, 0, 1, 1, 1]);
        assert_eq!(summary.application_sessions[0].fill, "var(--color-blue-900)");
        assert_eq!(summary.application_sessions[5].name, "Offers");
    }

    #[test]
    fn test_hour_rounding() {
        assert_eq!(hours_rounded(89.0), 1);
        assert_eq!(hours_rounded(90.0), 2);
        assert_eq!(hours_ceiling(61.0), 2);
        assert_eq!(hours_ceiling(60.0), 1);
        assert_eq!(hours_ceiling(0.0), 0);
    }
}
