//! Coerce-or-null parsers for the two typed columns.
//!
//! Unparseable input yields `None` rather than an error; the pipeline drops
//! those rows instead of aborting the whole render.

use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::models::Scalar;

/// Coerce a cell to a finite numeric value.
///
/// Handles:
/// * native numbers (non-finite values are rejected);
/// * text such as `"1234.5"`, `" 42 "`, `"$1,234.50"`, `"-7"`;
/// * everything else (empty cells, dates, unparseable text) → `None`.
pub fn parse_numeric(cell: &Scalar) -> Option<f64> {
    match cell {
        Scalar::Number(n) if n.is_finite() => Some(*n),
        Scalar::Number(_) => None,
        Scalar::Text(s) => parse_numeric_str(s),
        _ => None,
    }
}

/// Coerce a cell to a calendar date.
///
/// Handles:
/// * native date/date-time cells (the time component is dropped);
/// * text in RFC 3339 or a fixed list of common date and date-time patterns;
/// * everything else → `None`.
pub fn parse_date(cell: &Scalar) -> Option<NaiveDate> {
    match cell {
        Scalar::DateTime(dt) => Some(dt.date()),
        Scalar::Text(s) => parse_date_str(s),
        _ => None,
    }
}

/// Coerce a cell to a category label.
///
/// Category grouping is a pass-through on strings; numeric cells are kept as
/// their display form so numeric category codes still group correctly. Blank
/// text and date cells carry no category and yield `None`.
pub fn parse_category(cell: &Scalar) -> Option<String> {
    match cell {
        Scalar::Text(s) if !s.trim().is_empty() => Some(s.clone()),
        Scalar::Number(n) if n.is_finite() => Some(format_number_key(*n)),
        _ => None,
    }
}

/// Display a numeric category key without a trailing `.0` for whole numbers.
fn format_number_key(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

// ── Internal ──────────────────────────────────────────────────────────────────

fn parse_numeric_str(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Tolerate a leading currency symbol and thousands separators, the way
    // sales exports commonly format amounts.
    let cleaned: String = trimmed
        .trim_start_matches(['$', '€', '£'])
        .chars()
        .filter(|c| *c != ',')
        .collect();

    match cleaned.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => {
            debug!("parse_numeric: could not coerce \"{}\"", s);
            None
        }
    }
}

/// Date-time patterns tried before date-only patterns, so values like
/// `"2024-01-15 09:30:00"` keep their calendar day.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%m/%d/%y",
    "%d %b %Y",
    "%d-%b-%Y",
    "%B %d, %Y",
];

fn parse_date_str(s: &str) -> Option<NaiveDate> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }

    // RFC 3339 with offset (including a trailing 'Z').
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.date_naive());
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(dt.date());
        }
    }

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Some(date);
        }
    }

    debug!("parse_date: could not coerce \"{}\"", s);
    None
}

// ── Tests ─────────────────────────────────────────────────────────────────────
