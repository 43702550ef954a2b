//! Required-column validation for the two charts.
//!
//! Each chart declares the normalized column names it needs. Validation is
//! per chart: a table missing the trend columns can still feed the category
//! chart, and vice versa.

use board_core::models::{ChartKind, NormalizedTable};

/// Columns required by the trend chart, in `(key, value)` order.
pub const TREND_REQUIRED: [&str; 2] = ["Date Ordered", "Sales"];

/// Columns required by the category chart, in `(key, value)` order.
pub const CATEGORY_REQUIRED: [&str; 2] = ["Category", "Sales"];

/// Resolved column indices for one chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartColumns {
    /// Index of the grouping column (`Date Ordered` or `Category`).
    pub key: usize,
    /// Index of the `Sales` value column.
    pub value: usize,
}

/// The normalized column names `kind` requires.
pub fn required_columns(kind: ChartKind) -> &'static [&'static str] {
    match kind {
        ChartKind::Trend => &TREND_REQUIRED,
        ChartKind::Category => &CATEGORY_REQUIRED,
    }
}

/// Check that `table` carries the columns `kind` needs.
///
/// Returns the resolved indices on success, or the list of missing column
/// names (in required order) on failure. Duplicate column names resolve to
/// their first occurrence.
pub fn resolve(table: &NormalizedTable, kind: ChartKind) -> Result<ChartColumns, Vec<String>> {
    let required = required_columns(kind);

    let missing: Vec<String> = required
        .iter()
        .filter(|name| table.table().column_index(name).is_none())
        .map(|name| name.to_string())
        .collect();

    if !missing.is_empty() {
        return Err(missing);
    }

    // Lookups are infallible after the missing check above.
    let key = table.table().column_index(required[0]).unwrap_or(0);
    let value = table.table().column_index(required[1]).unwrap_or(0);
    Ok(ChartColumns { key, value })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
