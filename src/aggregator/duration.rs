//! Human-readable length of the job search.

use chrono::{Months, NaiveDate};

/// Render the time elapsed from `start` to `today`
///
/// Whole years first, then whole months, then the remaining days, e.g.
/// `"1 year, 3 months, and 20 days"`. Zero parts are left out. Month
/// steps landing past the end of a shorter month clamp to its last day.
///
/// Returns `"0 days"` when `start` is after `today` or they are equal.
pub fn format_search_duration(start: NaiveDate, today: NaiveDate) -> String {
    if start >= today {
        return "0 days".to_string();
    }

    let years = count_steps(start, today, 12);
    let after_years = add_months(start, years * 12);
    let months = count_steps(after_years, today, 1);
    let anchor = add_months(start, years * 12 + months);
    let days = (today - anchor).num_days();

    let parts: Vec<String> = [(years as i64, "year"), (months as i64, "month"), (days, "day")]
        .iter()
        .filter(|(amount, _)| *amount > 0)
        .map(|(amount, unit)| plural(*amount, unit))
        .collect();

    match parts.as_slice() {
        [] => "0 days".to_string(),
        [only] => only.clone(),
        [first, second] => format!("{} and {}", first, second),
        [init @ .., last] => format!("{}, and {}", init.join(", "), last),
    }
}

/// How many `step`-month jumps from `from` stay on or before `until`
fn count_steps(from: NaiveDate, until: NaiveDate, step: u32) -> u32 {
    let mut count = 0;
    while add_months(from, (count + 1) * step) <= until {
        count += 1;
    }
    count
}

fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

fn plural(amount: i64, unit: &str) -> String {
    if amount == 1 {
        format!("{} {}", amount, unit)
    } else {
        format!("{} {}s", amount, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(m: u32, d: u32, y: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_three_parts() {
        assert_eq!(
            format_search_duration(date(1, 1, 2024), date(4, 21, 2025)),
            "1 year, 3 months, and 20 days"
        );
    }

    #[test]
    fn test_two_parts_and_singulars() {
        assert_eq!(
            format_search_duration(date(1, 1, 2025), date(2, 2, 2025)),
            "1 month and 1 day"
        );
        assert_eq!(
            format_search_duration(date(3, 15, 2023), date(3, 15, 2025)),
            "2 years"
        );
        assert_eq!(
            format_search_duration(date(1, 1, 2025), date(1, 11, 2025)),
            "10 days"
        );
    }

    #[test]
    fn test_month_end_clamps() {
        // Jan 31 + 1 month clamps to Feb 28
        assert_eq!(
            format_search_duration(date(1, 31, 2025), date(3, 1, 2025)),
            "1 month and 1 day"
        );
    }

    #[test]
    fn test_nothing_elapsed() {
        assert_eq!(format_search_duration(date(5, 1, 2025), date(5, 1, 2025)), "0 days");
        assert_eq!(format_search_duration(date(6, 1, 2025), date(5, 1, 2025)), "0 days");
    }
}
