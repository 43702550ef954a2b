//! The per-upload render pipeline.
//!
//! `render` is a pure input→output function: bytes in, [`RenderResult`] out.
//! Nothing is cached between invocations, so re-rendering the same bytes
//! yields an identical result. A load failure is the only hard error; schema
//! problems and empty subsets degrade to per-chart skips carried as
//! [`Message`]s.

use chrono::NaiveDate;
use tracing::{debug, warn};

use board_core::coerce::{parse_category, parse_date, parse_numeric};
use board_core::error::Result;
use board_core::models::{
    CategorySeries, ChartKind, Message, NormalizedTable, RenderResult, TrendSeries,
};
use board_core::normalize;

use crate::aggregate;
use crate::loader;
use crate::schema;

/// Run the whole pipeline for one uploaded file.
///
/// Steps: load → normalize column names → per chart (validate schema, coerce
/// and filter rows, aggregate). Each chart is attempted independently; the
/// messages explain every skipped chart.
pub fn render(bytes: &[u8], filename: &str) -> Result<RenderResult> {
    let raw = loader::load_table(bytes, filename)?;
    let table = normalize::normalize_columns(raw);

    let mut messages: Vec<Message> = Vec::new();
    let trend = build_trend(&table, &mut messages);
    let category = build_category(&table, &mut messages);

    debug!(
        "Rendered {}: trend={}, category={}, {} message(s)",
        filename,
        trend.is_some(),
        category.is_some(),
        messages.len()
    );

    Ok(RenderResult {
        source_name: filename.to_string(),
        detected_columns: table.columns().to_vec(),
        trend,
        category,
        messages,
    })
}

// ── Per-chart builders ────────────────────────────────────────────────────────

fn build_trend(table: &NormalizedTable, messages: &mut Vec<Message>) -> Option<TrendSeries> {
    let cols = match schema::resolve(table, ChartKind::Trend) {
        Ok(cols) => cols,
        Err(missing) => {
            messages.push(missing_columns_message(ChartKind::Trend, &missing));
            return None;
        }
    };

    // Coerce-or-null, then drop rows where either side failed.
    let cleaned: Vec<(NaiveDate, f64)> = table
        .table()
        .rows
        .iter()
        .filter_map(|row| {
            let date = parse_date(&row[cols.key])?;
            let sales = parse_numeric(&row[cols.value])?;
            Some((date, sales))
        })
        .collect();

    if cleaned.is_empty() {
        warn!("Trend chart skipped: no valid rows after coercion");
        messages.push(empty_subset_message(ChartKind::Trend));
        return None;
    }

    Some(aggregate::sum_by_date(&cleaned))
}

fn build_category(table: &NormalizedTable, messages: &mut Vec<Message>) -> Option<CategorySeries> {
    let cols = match schema::resolve(table, ChartKind::Category) {
        Ok(cols) => cols,
        Err(missing) => {
            messages.push(missing_columns_message(ChartKind::Category, &missing));
            return None;
        }
    };

    let cleaned: Vec<(String, f64)> = table
        .table()
        .rows
        .iter()
        .filter_map(|row| {
            let category = parse_category(&row[cols.key])?;
            let sales = parse_numeric(&row[cols.value])?;
            Some((category, sales))
        })
        .collect();

    if cleaned.is_empty() {
        warn!("Category chart skipped: no valid rows after coercion");
        messages.push(empty_subset_message(ChartKind::Category));
        return None;
    }

    Some(aggregate::sum_by_category(&cleaned))
}

// ── Message construction ──────────────────────────────────────────────────────

fn missing_columns_message(kind: ChartKind, missing: &[String]) -> Message {
    Message::error(format!(
        "Your file must include the column{} {} for the {}.",
        if missing.len() == 1 { "" } else { "s" },
        missing
            .iter()
            .map(|m| format!("'{}'", m))
            .collect::<Vec<_>>()
            .join(" and "),
        kind
    ))
}

fn empty_subset_message(kind: ChartKind) -> Message {
    Message::warning(format!(
        "No rows with valid values remain after cleaning; skipping the {}.",
        kind
    ))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
