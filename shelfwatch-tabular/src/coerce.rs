//! Cell coercion helpers.
//!
//! Spreadsheet exports write numbers as `"$1,234.50"` and blanks as `"n/a"`.
//! Coercion never raises: a cell either yields a finite value or it does not,
//! and the caller substitutes its documented fallback.

use chrono::NaiveDate;

/// Date formats accepted for expiration columns, tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%m/%d/%y", "%Y/%m/%d"];

/// Parse a numeric cell, tolerating currency symbols, thousands separators,
/// and surrounding whitespace. Returns `None` for empty, non-numeric, or
/// non-finite values.
pub fn to_number(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | ' '))
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a numeric cell, substituting 0 when coercion fails.
pub fn to_number_or_zero(raw: &str) -> f64 {
    to_number(raw).unwrap_or(0.0)
}

/// Parse a calendar date cell. Returns `None` when no accepted format matches.
pub fn to_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}
