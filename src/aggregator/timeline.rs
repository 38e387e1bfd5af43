//! Daily event timeline and its weekly/monthly roll-ups.
//!
//! The daily series covers every calendar day from the earliest to the
//! latest date found anywhere in the data (applied, out, or any stage),
//! with zero-filled days in between.

use crate::parser::record::{Application, Decision, Stage};
use crate::parser::schema::TimelinePoint;
use chrono::{Datelike, Days, NaiveDate};
use log::debug;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

/// Bucket size for a resampled timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Granularity {
    Daily,
    #[default]
    Weekly,
    Monthly,
}

impl Granularity {
    /// First day of the bucket containing `date`
    ///
    /// Weeks start on Sunday, months on the 1st.
    pub fn period_start(self, date: NaiveDate) -> NaiveDate {
        match self {
            Granularity::Daily => date,
            Granularity::Weekly => {
                let back = u64::from(date.weekday().num_days_from_sunday());
                date.checked_sub_days(Days::new(back)).unwrap_or(date)
            }
            Granularity::Monthly => date.with_day(1).unwrap_or(date),
        }
    }
}

impl FromStr for Granularity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "daily" | "day" => Ok(Granularity::Daily),
            "weekly" | "week" => Ok(Granularity::Weekly),
            "monthly" | "month" => Ok(Granularity::Monthly),
            other => Err(format!(
                "unknown granularity '{}' (expected daily, weekly or monthly)",
                other
            )),
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Granularity::Daily => "daily",
            Granularity::Weekly => "weekly",
            Granularity::Monthly => "monthly",
        };
        f.write_str(name)
    }
}

/// Build the zero-filled daily timeline
///
/// **Public** - main entry point for the time series
///
/// # Algorithm
/// 1. Single pass: drop each application's events into per-day buckets
///    (applied, out-by-decision, and distinct stage days)
/// 2. Walk from the earliest to the latest event day, emitting every day
///
/// An application with two stages on one day counts once for that day.
pub fn application_data_over_time(applications: &[Application]) -> Vec<TimelinePoint> {
    let mut buckets: BTreeMap<NaiveDate, TimelinePoint> = BTreeMap::new();

    for app in applications {
        if let Some(applied) = app.applied_date() {
            bucket(&mut buckets, applied).applied += 1;
        }

        if let Some(out) = app.out_date() {
            let day = bucket(&mut buckets, out);
            match app.decision_kind() {
                Decision::Ghosted => day.ghosted += 1,
                Decision::NotSelected => day.not_selected += 1,
                Decision::Cancelled => day.cancelled += 1,
                Decision::ApplicationRescinded => day.application_rescinded += 1,
                Decision::OfferRescinded => day.offer_rescinded += 1,
                Decision::Pending | Decision::Interviewing | Decision::Unclassified => {}
            }
        }

        let stage_days: BTreeSet<NaiveDate> =
            Stage::ALL.iter().filter_map(|s| app.stage_date(*s)).collect();
        for day in stage_days {
            bucket(&mut buckets, day).interviews += 1;
        }
    }

    let (Some(first), Some(last)) = (
        buckets.keys().next().copied(),
        buckets.keys().next_back().copied(),
    ) else {
        return Vec::new();
    };

    debug!(
        "Timeline spans {} to {} ({} active days)",
        first,
        last,
        buckets.len()
    );

    first
        .iter_days()
        .take_while(|day| *day <= last)
        .map(|day| {
            buckets
                .remove(&day)
                .unwrap_or_else(|| TimelinePoint::empty(day))
        })
        .collect()
}

fn bucket(buckets: &mut BTreeMap<NaiveDate, TimelinePoint>, day: NaiveDate) -> &mut TimelinePoint {
    buckets
        .entry(day)
        .or_insert_with(|| TimelinePoint::empty(day))
}

/// Sum a daily timeline into coarser buckets
///
/// **Public** - presentation helper
///
/// Each output point is keyed by its period start and the output is
/// ordered by date. `Daily` returns the input unchanged.
pub fn resample(daily: &[TimelinePoint], granularity: Granularity) -> Vec<TimelinePoint> {
    if granularity == Granularity::Daily {
        return daily.to_vec();
    }

    let mut grouped: BTreeMap<NaiveDate, TimelinePoint> = BTreeMap::new();
    for point in daily {
        let start = granularity.period_start(point.date);
        grouped
            .entry(start)
            .or_insert_with(|| TimelinePoint::empty(start))
            .absorb(point);
    }

    grouped.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(m: u32, d: u32, y: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn app(applied: &str) -> Application {
        Application {
            applied: applied.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_zero_filled_range() {
        let mut a = app("01/01/2025");
        a.out = Some("01/05/2025".to_string());
        a.decision = Some("ghosted".to_string());

        let series = application_data_over_time(&[a, app("01/03/2025")]);

        assert_eq!(series.len(), 5);
        assert_eq!(series[0].date, date(1, 1, 2025));
        assert_eq!(series[0].applied, 1);
        assert_eq!(series[1].applied, 0);
        assert_eq!(series[2].applied, 1);
        assert_eq!(series[4].ghosted, 1);
        assert_eq!(series[4].date, date(1, 5, 2025));
    }

    #[test]
    fn test_range_extends_to_stage_dates() {
        let mut a = app("01/10/2025");
        a.recruiter_screen = Some("01/08/2025".to_string());
        a.panel = Some("01/12/2025".to_string());

        let series = application_data_over_time(&[a]);

        assert_eq!(series.first().unwrap().date, date(1, 8, 2025));
        assert_eq!(series.last().unwrap().date, date(1, 12, 2025));
        assert_eq!(series[0].interviews, 1);
    }

    #[test]
    fn test_same_day_stages_count_once() {
        let mut a = app("01/01/2025");
        a.tech_interview1 = Some("01/02/2025".to_string());
        a.tech_interview2 = Some("01/02/2025".to_string());
        a.panel = Some("01/03/2025".to_string());

        let series = application_data_over_time(&[a]);

        assert_eq!(series[1].interviews, 1);
        assert_eq!(series[2].interviews, 1);
    }

    #[test]
    fn test_out_without_closing_decision() {
        let mut a = app("01/01/2025");
        a.out = Some("01/02/2025".to_string());
        a.decision = Some("interviewing".to_string());

        let series = application_data_over_time(&[a]);

        assert_eq!(series.len(), 2);
        assert_eq!(series[1], TimelinePoint::empty(date(1, 2, 2025)));
    }

    #[test]
    fn test_empty_input() {
        assert!(application_data_over_time(&[]).is_empty());
    }

    #[test]
    fn test_period_start() {
        // 01/08/2025 is a Wednesday
        assert_eq!(Granularity::Weekly.period_start(date(1, 8, 2025)), date(1, 5, 2025));
        assert_eq!(Granularity::Weekly.period_start(date(1, 5, 2025)), date(1, 5, 2025));
        assert_eq!(Granularity::Monthly.period_start(date(1, 31, 2025)), date(1, 1, 2025));
        assert_eq!(Granularity::Daily.period_start(date(1, 8, 2025)), date(1, 8, 2025));
    }

    #[test]
    fn test_resample_weekly_and_monthly() {
        let apps: Vec<Application> = ["01/03/2025", "01/04/2025", "01/05/2025", "02/01/2025"]
            .iter()
            .map(|d| app(d))
            .collect();
        let daily = application_data_over_time(&apps);

        let weekly = resample(&daily, Granularity::Weekly);
        assert_eq!(weekly.first().unwrap().date, date(12, 29, 2024));
        assert_eq!(weekly[0].applied, 2);
        assert_eq!(weekly[1].date, date(1, 5, 2025));
        assert_eq!(weekly[1].applied, 1);
        let weekly_total: usize = weekly.iter().map(|p| p.applied).sum();
        assert_eq!(weekly_total, 4);

        let monthly = resample(&daily, Granularity::Monthly);
        assert_eq!(monthly.len(), 2);
        assert_eq!(monthly[0].date, date(1, 1, 2025));
        assert_eq!(monthly[0].applied, 3);
        assert_eq!(monthly[1].applied, 1);

        assert_eq!(resample(&daily, Granularity::Daily), daily);
    }

    #[test]
    fn test_granularity_from_str() {
        assert_eq!("Weekly".parse::<Granularity>().unwrap(), Granularity::Weekly);
        assert_eq!("month".parse::<Granularity>().unwrap(), Granularity::Monthly);
        assert!("yearly".parse::<Granularity>().is_err());
        assert_eq!(Granularity::Daily.to_string(), "daily");
    }
}
