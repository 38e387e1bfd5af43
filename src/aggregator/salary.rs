//! Salary range statistics per experience level.
//!
//! Statistics are computed on trimmed samples: the extreme tails of each
//! sorted list are dropped before quartiles, bounds and mean are taken.

use crate::parser::fields::percentage;
use crate::parser::record::Application;
use crate::parser::schema::SalaryRange;
use crate::utils::config::{SALARY_LEVELS, SALARY_TRIM_FRACTION};
use log::debug;

/// Salary statistics for the whole snapshot
///
/// **Public** - returned from salary_ranges
#[derive(Debug, Clone, PartialEq)]
pub struct SalaryReport {
    /// One row per level, in fixed order
    pub salary_ranges: Vec<SalaryRange>,

    /// Share of all applications with a usable range, percent with 2 decimals
    pub salary_range_percentage: f64,
}

/// Sort ascending and drop `fraction` of the values from each end
///
/// The trim count is `floor(len × fraction)`; when it is 0 the whole
/// sorted list is returned.
pub fn trim_outliers(values: &[f64], fraction: f64) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let trim = (sorted.len() as f64 * fraction).floor() as usize;
    if trim == 0 || trim * 2 >= sorted.len() {
        return sorted;
    }

    sorted[trim..sorted.len() - trim].to_vec()
}

/// Interpolated quantile of an ascending list
///
/// Index `(n − 1) × p`, linearly interpolated between its floor and ceiling.
/// Returns 0 for an empty list.
pub fn quantile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }

    let index = (sorted.len() - 1) as f64 * p;
    let lower = index.floor() as usize;
    let upper = index.ceil() as usize;
    if lower == upper {
        return sorted[lower];
    }

    let weight = index - lower as f64;
    sorted[lower] * (1.0 - weight) + sorted[upper] * weight
}

/// Compute salary ranges for every level
///
/// **Public** - main entry point for salary statistics
///
/// # Algorithm
/// 1. Keep applications with a valid range (both ends positive, max >= min)
/// 2. Per level: collect midpoints, mins and maxes, trimming each list
/// 3. Quartiles and mean from the trimmed midpoints; bounds from the
///    trimmed mins and maxes
/// 4. Round everything to whole currency units
///
/// Levels without data report a zeroed row.
pub fn salary_ranges(applications: &[Application]) -> SalaryReport {
    let with_salary: Vec<(&Application, (f64, f64))> = applications
        .iter()
        .filter_map(|app| app.salary_range().map(|range| (app, range)))
        .collect();

    let salary_ranges = SALARY_LEVELS
        .iter()
        .map(|level| {
            let ranges: Vec<(f64, f64)> = with_salary
                .iter()
                .filter(|(app, _)| app.level.as_deref().map(str::trim) == Some(*level))
                .map(|(_, range)| *range)
                .collect();

            debug!("{} salary ranges for level {}", ranges.len(), level);
            level_statistics(level, &ranges)
        })
        .collect();

    SalaryReport {
        salary_ranges,
        salary_range_percentage: percentage(with_salary.len(), applications.len()),
    }
}

fn level_statistics(level: &str, ranges: &[(f64, f64)]) -> SalaryRange {
    if ranges.is_empty() {
        return SalaryRange::zeroed(level);
    }

    let midpoints: Vec<f64> = ranges.iter().map(|(min, max)| (min + max) / 2.0).collect();
    let mins: Vec<f64> = ranges.iter().map(|(min, _)| *min).collect();
    let maxes: Vec<f64> = ranges.iter().map(|(_, max)| *max).collect();

    let midpoints = trim_outliers(&midpoints, SALARY_TRIM_FRACTION);
    let mins = trim_outliers(&mins, SALARY_TRIM_FRACTION);
    let maxes = trim_outliers(&maxes, SALARY_TRIM_FRACTION);

    let average = midpoints.iter().sum::<f64>() / midpoints.len() as f64;

    SalaryRange {
        name: level.to_string(),
        min: round_whole(mins.first().copied().unwrap_or(0.0)),
        lower_quartile: round_whole(quantile(&midpoints, 0.25)),
        median: round_whole(quantile(&midpoints, 0.5)),
        upper_quartile: round_whole(quantile(&midpoints, 0.75)),
        max: round_whole(maxes.last().copied().unwrap_or(0.0)),
        average: round_whole(average),
    }
}

fn round_whole(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn priced(level: &str, min: &str, max: &str) -> Application {
        Application {
            applied: "01/01/2025".to_string(),
            pay_min: Some(min.to_string()),
            pay_max: Some(max.to_string()),
            level: Some(level.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_single_range() {
        let report = salary_ranges(&[priced("Senior", "$100,000", "$120,000")]);

        assert_eq!(
            report.salary_ranges[0],
            SalaryRange {
                name: "Senior".to_string(),
                min: 100_000,
                lower_quartile: 110_000,
                median: 110_000,
                upper_quartile: 110_000,
                max: 120_000,
                average: 110_000,
            }
        );
        assert_eq!(report.salary_ranges[1], SalaryRange::zeroed("Mid-level"));
        assert_eq!(report.salary_ranges[2], SalaryRange::zeroed("Junior"));
        assert_eq!(report.salary_range_percentage, 100.0);
    }

    #[test]
    fn test_quartiles_interpolate() {
        let apps = vec![
            priced("Junior", "50000", "50000"),
            priced("Junior", "60000", "60000"),
            priced("Junior", "70000", "70000"),
            priced("Junior", "90000", "90000"),
        ];

        let junior = &salary_ranges(&apps).salary_ranges[2];

        // index 0.75 between 50k and 60k
        assert_eq!(junior.lower_quartile, 57_500);
        assert_eq!(junior.median, 65_000);
        assert_eq!(junior.upper_quartile, 75_000);
        assert_eq!(junior.average, 67_500);
        assert_eq!(junior.min, 50_000);
        assert_eq!(junior.max, 90_000);
    }

    #[test]
    fn test_invalid_ranges_excluded() {
        let apps = vec![
            priced("Senior", "$150,000", "$100,000"),
            priced("Senior", "0", "100000"),
            priced("Senior", "competitive", "100000"),
            priced("Senior", "$90,000", "$110,000"),
        ];

        let report = salary_ranges(&apps);

        assert_eq!(report.salary_ranges[0].median, 100_000);
        assert_eq!(report.salary_range_percentage, 25.0);
    }

    #[test]
    fn test_unknown_level_counts_toward_percentage_only() {
        let apps = vec![priced("Staff", "100000", "150000"), priced("Junior", "", "")];
        let report = salary_ranges(&apps);

        assert!(report.salary_ranges.iter().all(|r| r.median == 0));
        assert_eq!(report.salary_range_percentage, 50.0);
    }

    #[test]
    fn test_trim_outliers_small_sample_untouched() {
        let values: Vec<f64> = (0..19).rev().map(f64::from).collect();
        let trimmed = trim_outliers(&values, 0.05);

        assert_eq!(trimmed.len(), 19);
        assert_eq!(trimmed.first(), Some(&0.0));
        assert_eq!(trimmed.last(), Some(&18.0));
    }

    #[test]
    fn test_trim_outliers_drops_tails() {
        let values: Vec<f64> = (1..=40).map(f64::from).collect();
        let trimmed = trim_outliers(&values, 0.05);

        assert_eq!(trimmed.len(), 36);
        assert_eq!(trimmed.first(), Some(&3.0));
        assert_eq!(trimmed.last(), Some(&38.0));
    }

    #[test]
    fn test_salary_ranges_idempotent() {
        let apps: Vec<Application> = (0..25)
            .map(|i| {
                let base = 80_000 + (i * 7_919) % 50_000;
                priced("Mid-level", &base.to_string(), &(base + 20_000).to_string())
            })
            .collect();

        assert_eq!(salary_ranges(&apps), salary_ranges(&apps));
    }

    #[test]
    fn test_quantile_empty() {
        assert_eq!(quantile(&[], 0.5), 0.0);
        assert_eq!(quantile(&[42.0], 0.75), 42.0);
    }

    #[test]
    fn test_empty_input() {
        let report = salary_ranges(&[]);
        assert_eq!(report.salary_ranges.len(), 3);
        assert_eq!(report.salary_range_percentage, 0.0);
    }
}
