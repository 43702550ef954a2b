use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// ── Cell values ───────────────────────────────────────────────────────────────

/// An untyped cell value as it arrives from the table loader.
///
/// CSV cells come in as [`Scalar::Text`] (or [`Scalar::Empty`] for blank
/// fields); spreadsheet cells keep their native type so that numeric and date
/// cells survive without a round-trip through strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Scalar {
    /// Missing / blank cell.
    Empty,
    /// Native numeric cell.
    Number(f64),
    /// String cell, untrimmed.
    Text(String),
    /// Native date/date-time cell.
    DateTime(NaiveDateTime),
}

// ── Tables ────────────────────────────────────────────────────────────────────

/// An ordered tabular dataset loaded wholesale from the uploaded bytes.
///
/// Invariant (upheld by the loader): every row has exactly
/// `columns.len()` cells.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    /// Column names in file order, as found in the header row.
    pub columns: Vec<String>,
    /// Data rows, one `Scalar` per column.
    pub rows: Vec<Vec<Scalar>>,
}

impl RawTable {
    /// Index of the first column named `name`, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}

/// A [`RawTable`] whose column names have been normalized.
///
/// A distinct type so the schema validator cannot be handed a table whose
/// header was never cleaned. Values are untouched by normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedTable(pub RawTable);

impl NormalizedTable {
    /// The underlying table.
    pub fn table(&self) -> &RawTable {
        &self.0
    }

    /// Normalized column names, in file order.
    pub fn columns(&self) -> &[String] {
        &self.0.columns
    }
}

// ── Charts and series ─────────────────────────────────────────────────────────

/// Which of the two dashboard charts a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Line chart: summed `Sales` by `Date Ordered`, ascending by date.
    Trend,
    /// Bar chart: summed `Sales` by `Category`, descending by sum.
    Category,
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartKind::Trend => write!(f, "daily trend chart"),
            ChartKind::Category => write!(f, "category chart"),
        }
    }
}

/// Summed sales per date, strictly ascending, duplicate dates merged.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrendSeries {
    pub points: Vec<(NaiveDate, f64)>,
}

impl TrendSeries {
    /// Sum of all point values.
    pub fn total(&self) -> f64 {
        self.points.iter().map(|(_, v)| v).sum()
    }

    /// Largest point value, or 0 for an empty series.
    pub fn max_value(&self) -> f64 {
        self.points.iter().map(|(_, v)| *v).fold(0.0, f64::max)
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Summed sales per category, descending by sum; ties keep input order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategorySeries {
    pub points: Vec<(String, f64)>,
}

impl CategorySeries {
    /// Sum of all point values.
    pub fn total(&self) -> f64 {
        self.points.iter().map(|(_, v)| v).sum()
    }

    /// Largest point value, or 0 for an empty series.
    pub fn max_value(&self) -> f64 {
        self.points.iter().map(|(_, v)| *v).fold(0.0, f64::max)
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

// ── User-visible messages ─────────────────────────────────────────────────────

/// How loudly a pipeline message should be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Chart skipped for a recoverable reason (e.g. zero valid rows).
    Warning,
    /// Required columns absent; the chart cannot be produced.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A user-visible notice produced while building the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub severity: Severity,
    pub text: String,
}

impl Message {
    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            text: text.into(),
        }
    }
}

// ── RenderResult ──────────────────────────────────────────────────────────────

/// Everything one pipeline run hands to the rendering surface.
///
/// Recomputed from scratch for every upload; nothing here outlives a single
/// render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderResult {
    /// Name of the uploaded file, for the dashboard header.
    pub source_name: String,
    /// Normalized column names, surfaced to the user for transparency.
    pub detected_columns: Vec<String>,
    /// Trend series, or `None` when that chart was skipped.
    pub trend: Option<TrendSeries>,
    /// Category series, or `None` when that chart was skipped.
    pub category: Option<CategorySeries>,
    /// Warnings and per-chart errors accumulated along the way.
    pub messages: Vec<Message>,
}

impl RenderResult {
    /// `true` when neither chart could be produced.
    pub fn has_no_charts(&self) -> bool {
        self.trend.is_none() && self.category.is_none()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
