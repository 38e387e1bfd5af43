//! Field normalization helpers.
//!
//! Spreadsheet cells arrive as loose text. Every helper here treats an
//! empty or whitespace-only cell the same as a missing one, and never
//! fails: anything that cannot be understood becomes `None` (or 0 where
//! a quantity is expected).

use crate::utils::config::DATE_FORMAT;
use chrono::{Datelike, NaiveDate};

/// Normalize a cell: trim it, and map empty text to `None`
pub fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Parse the longest numeric prefix of `text`
///
/// Accepts an optional sign, digits with an optional fraction, and an
/// optional exponent, ignoring anything after the number
/// (`"45 min"` parses as `45.0`). Returns `None` when no digits lead.
pub fn parse_leading_float(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when followed by at least one digit
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end].parse::<f64>().ok()
}

/// Parse a duration cell as minutes; absent or non-numeric is 0
pub fn parse_minutes(value: Option<&str>) -> f64 {
    present(value)
        .and_then(parse_leading_float)
        .filter(|m| m.is_finite())
        .unwrap_or(0.0)
}

/// Parse a currency cell such as `"$120,000"`
///
/// Strips `$`, commas and whitespace before parsing. Returns `None` for
/// absent or non-numeric cells; sign and magnitude checks are left to
/// the caller.
pub fn parse_currency(value: Option<&str>) -> Option<f64> {
    let raw = present(value)?;
    let cleaned: String = raw
        .chars()
        .filter(|c| *c != '$' && *c != ',' && !c.is_whitespace())
        .collect();

    parse_leading_float(&cleaned).filter(|v| v.is_finite())
}

/// Parse a calendar date cell
///
/// The sheet format is `MM/DD/YYYY` (single-digit month/day accepted);
/// ISO `YYYY-MM-DD` is accepted as a fallback. The year must have four
/// digits, so `01/05/25` is `None` rather than year 25. Anything else is `None`.
pub fn parse_date(value: Option<&str>) -> Option<NaiveDate> {
    let raw = present(value)?;

    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .ok()
        .filter(|date| (1000..=9999).contains(&date.year()))
}

/// Render a date the way the sheet and the report spell it
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Round half up to `decimals` places
///
/// Matches how the dashboard displays rates (`60.00`, `33.33`).
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor + 0.5).floor() / factor
}

/// Percentage of `part` in `whole`, rounded to 2 decimals; 0 when `whole` is 0
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    round_to(part as f64 / whole as f64 * 100.0, 2)
}
