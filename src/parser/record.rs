//! The application record and its classifications.
//!
//! One `Application` is one spreadsheet row. Text fields are stored
//! already normalized (trimmed, empty → `None`) so every aggregator can
//! use plain `Option` presence tests.

use super::fields::{parse_currency, parse_date, parse_minutes, present};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One job application
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    /// Date applied (`MM/DD/YYYY`); always parseable after ingestion
    pub applied: String,

    /// Date the application was closed
    #[serde(default)]
    pub out: Option<String>,

    /// Free-text outcome
    #[serde(default)]
    pub decision: Option<String>,

    #[serde(default)]
    pub recruiter_screen: Option<String>,
    #[serde(default)]
    pub manager_screen: Option<String>,
    #[serde(default)]
    pub tech_interview1: Option<String>,
    #[serde(default)]
    pub tech_interview2: Option<String>,
    #[serde(default)]
    pub panel: Option<String>,
    #[serde(default)]
    pub ceo: Option<String>,
    #[serde(default)]
    pub offer: Option<String>,

    #[serde(default)]
    pub recruiter_screen_time: Option<String>,
    #[serde(default)]
    pub manager_screen_time: Option<String>,
    #[serde(default)]
    pub tech_interview1_time: Option<String>,
    #[serde(default)]
    pub tech_interview2_time: Option<String>,
    #[serde(default)]
    pub panel_time: Option<String>,
    #[serde(default)]
    pub ceo_time: Option<String>,

    #[serde(default)]
    pub pay_min: Option<String>,
    #[serde(default)]
    pub pay_max: Option<String>,

    /// `Senior`, `Mid-level`, `Junior`, or anything else
    #[serde(default)]
    pub level: Option<String>,
}

/// Interview pipeline stage, in pipeline order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    RecruiterScreen,
    ManagerScreen,
    TechInterview1,
    TechInterview2,
    Panel,
    Ceo,
}

impl Stage {
    /// Every interview stage, in pipeline order
    pub const ALL: [Stage; 6] = [
        Stage::RecruiterScreen,
        Stage::ManagerScreen,
        Stage::TechInterview1,
        Stage::TechInterview2,
        Stage::Panel,
        Stage::Ceo,
    ];

    /// Spreadsheet column holding the stage date
    pub fn column(self) -> &'static str {
        match self {
            Stage::RecruiterScreen => "recruiterScreen",
            Stage::ManagerScreen => "managerScreen",
            Stage::TechInterview1 => "techInterview1",
            Stage::TechInterview2 => "techInterview2",
            Stage::Panel => "panel",
            Stage::Ceo => "ceo",
        }
    }

    /// Spreadsheet column holding minutes spent in the stage
    pub fn time_column(self) -> &'static str {
        match self {
            Stage::RecruiterScreen => "recruiterScreenTime",
            Stage::ManagerScreen => "managerScreenTime",
            Stage::TechInterview1 => "techInterview1Time",
            Stage::TechInterview2 => "techInterview2Time",
            Stage::Panel => "panelTime",
            Stage::Ceo => "ceoTime",
        }
    }
}

/// Outcome bucket derived from the free-text `decision`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Decision {
    Pending,
    Interviewing,
    NotSelected,
    Ghosted,
    Cancelled,
    ApplicationRescinded,
    OfferRescinded,
    Unclassified,
}

impl Decision {
    /// Classify decision text by case-insensitive substring match
    ///
    /// The rescinded variants are checked before the shorter keywords so
    /// a record lands in exactly one bucket. Absent text means pending.
    pub fn classify(text: Option<&str>) -> Decision {
        let Some(text) = present(text) else {
            return Decision::Pending;
        };
        let text = text.to_lowercase();

        const RULES: [(&str, Decision); 6] = [
            ("application rescinded", Decision::ApplicationRescinded),
            ("offer rescinded", Decision::OfferRescinded),
            ("not selected", Decision::NotSelected),
            ("ghosted", Decision::Ghosted),
            ("cancelled", Decision::Cancelled),
            ("interviewing", Decision::Interviewing),
        ];

        RULES
            .iter()
            .find(|(needle, _)| text.contains(needle))
            .map(|(_, decision)| *decision)
            .unwrap_or(Decision::Unclassified)
    }
}

impl Application {
    /// Parsed `applied` date
    pub fn applied_date(&self) -> Option<NaiveDate> {
        parse_date(Some(&self.applied))
    }

    /// Parsed `out` date
    pub fn out_date(&self) -> Option<NaiveDate> {
        parse_date(self.out.as_deref())
    }

    /// Whether the application has been closed
    pub fn is_closed(&self) -> bool {
        present(self.out.as_deref()).is_some()
    }

    /// Outcome bucket of this application
    pub fn decision_kind(&self) -> Decision {
        Decision::classify(self.decision.as_deref())
    }

    /// Raw cell of a stage date
    pub fn stage(&self, stage: Stage) -> Option<&str> {
        let cell = match stage {
            Stage::RecruiterScreen => &self.recruiter_screen,
            Stage::ManagerScreen => &self.manager_screen,
            Stage::TechInterview1 => &self.tech_interview1,
            Stage::TechInterview2 => &self.tech_interview2,
            Stage::Panel => &self.panel,
            Stage::Ceo => &self.ceo,
        };
        present(cell.as_deref())
    }

    /// Whether the stage was reached (cell present, whatever it holds)
    pub fn reached(&self, stage: Stage) -> bool {
        self.stage(stage).is_some()
    }

    /// Whether any interview stage was reached
    pub fn reached_any_stage(&self) -> bool {
        Stage::ALL.iter().any(|s| self.reached(*s))
    }

    /// Whether an offer was made
    pub fn has_offer(&self) -> bool {
        present(self.offer.as_deref()).is_some()
    }

    /// Parsed date of a stage
    pub fn stage_date(&self, stage: Stage) -> Option<NaiveDate> {
        parse_date(self.stage(stage))
    }

    /// Minutes spent in a stage; absent or non-numeric is 0
    pub fn stage_minutes(&self, stage: Stage) -> f64 {
        let cell = match stage {
            Stage::RecruiterScreen => &self.recruiter_screen_time,
            Stage::ManagerScreen => &self.manager_screen_time,
            Stage::TechInterview1 => &self.tech_interview1_time,
            Stage::TechInterview2 => &self.tech_interview2_time,
            Stage::Panel => &self.panel_time,
            Stage::Ceo => &self.ceo_time,
        };
        parse_minutes(cell.as_deref())
    }

    /// Minutes recorded across all stage duration columns
    pub fn total_interview_minutes(&self) -> f64 {
        Stage::ALL.iter().map(|s| self.stage_minutes(*s)).sum()
    }

    /// Valid salary range as `(min, max)`
    ///
    /// Both ends must parse, be strictly positive, and satisfy `max >= min`.
    pub fn salary_range(&self) -> Option<(f64, f64)> {
        let min = parse_currency(self.pay_min.as_deref())?;
        let max = parse_currency(self.pay_max.as_deref())?;

        (min > 0.0 && max > 0.0 && max >= min).then_some((min, max))
    }
}
