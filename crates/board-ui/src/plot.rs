//! PNG export of the dashboard charts via `plotters`.
//!
//! Writes `daily_trend.png` and `sales_by_category.png` into a chosen
//! directory using the same axis titles and ordering as the TUI views.

use std::path::{Path, PathBuf};

use plotters::prelude::*;
use tracing::info;

use board_core::error::{BoardError, Result};
use board_core::models::{CategorySeries, RenderResult, TrendSeries};

/// Output image size in pixels.
const PLOT_SIZE: (u32, u32) = (1024, 640);

/// First of the two fixed bar colours (steel blue).
const BAR_PRIMARY: RGBColor = RGBColor(70, 130, 180);
/// Second of the two fixed bar colours (orange).
const BAR_SECONDARY: RGBColor = RGBColor(255, 165, 0);

fn plot_err<E: std::fmt::Display>(err: E) -> BoardError {
    BoardError::PlotExport(err.to_string())
}

/// Export every available chart in `result` to `dir`.
///
/// Returns the paths written. Skipped charts (those the pipeline could not
/// build) are simply not exported; if neither chart exists the result is an
/// empty list, not an error.
pub fn export_all(result: &RenderResult, dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    if let Some(trend) = &result.trend {
        written.push(export_trend_png(trend, dir)?);
    }
    if let Some(category) = &result.category {
        written.push(export_category_png(category, dir)?);
    }
    Ok(written)
}

/// Render the daily trend as a line chart and write `daily_trend.png`.
pub fn export_trend_png(trend: &TrendSeries, dir: &Path) -> Result<PathBuf> {
    if trend.is_empty() {
        return Err(BoardError::PlotExport(
            "trend series has no data points".to_string(),
        ));
    }

    let path = dir.join("daily_trend.png");
    let backend_path = path.clone();
    let root = BitMapBackend::new(&backend_path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let max_y = trend.max_value().max(1.0);
    let max_x = (trend.points.len().saturating_sub(1)).max(1) as f64;
    let dates: Vec<String> = trend.points.iter().map(|(d, _)| d.to_string()).collect();

    let mut chart = ChartBuilder::on(&root)
        .caption("Daily Sales Trend", ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(80)
        .y_label_area_size(70)
        .build_cartesian_2d(0.0..max_x, 0.0..max_y * 1.05)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("Date Ordered")
        .y_desc("Total Sales ($)")
        .x_labels(dates.len().min(12))
        .x_label_formatter(&|x| {
            let idx = x.round() as usize;
            dates.get(idx).cloned().unwrap_or_default()
        })
        .x_label_style(
            ("sans-serif", 14)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(LineSeries::new(
            trend
                .points
                .iter()
                .enumerate()
                .map(|(i, (_, v))| (i as f64, *v)),
            &BAR_PRIMARY,
        ))
        .map_err(plot_err)?;
    chart
        .draw_series(
            trend
                .points
                .iter()
                .enumerate()
                .map(|(i, (_, v))| Circle::new((i as f64, *v), 3, BAR_PRIMARY.filled())),
        )
        .map_err(plot_err)?;

    root.present().map_err(plot_err)?;
    info!(path = %path.display(), "exported daily trend chart");
    Ok(path)
}

/// Render the category totals as a bar chart and write `sales_by_category.png`.
///
/// Bars keep the series' descending order and alternate between the two
/// fixed colours.
pub fn export_category_png(category: &CategorySeries, dir: &Path) -> Result<PathBuf> {
    if category.is_empty() {
        return Err(BoardError::PlotExport(
            "category series has no data points".to_string(),
        ));
    }

    let path = dir.join("sales_by_category.png");
    let backend_path = path.clone();
    let root = BitMapBackend::new(&backend_path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let max_y = category.max_value().max(1.0);
    let n = category.points.len();
    let labels: Vec<String> = category.points.iter().map(|(c, _)| c.clone()).collect();

    let mut chart = ChartBuilder::on(&root)
        .caption("Sales by Category", ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(100)
        .y_label_area_size(70)
        .build_cartesian_2d(0.0..n as f64, 0.0..max_y * 1.05)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Category")
        .y_desc("Total Sales ($)")
        .x_labels(n)
        .x_label_formatter(&|x| {
            // Ticks land on bar centres at i + 0.5.
            let idx = x.floor() as usize;
            labels.get(idx).cloned().unwrap_or_default()
        })
        .x_label_style(
            ("sans-serif", 14)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(category.points.iter().enumerate().map(|(i, (_, v))| {
            let colour = if i % 2 == 0 { BAR_PRIMARY } else { BAR_SECONDARY };
            Rectangle::new([(i as f64 + 0.1, 0.0), (i as f64 + 0.9, *v)], colour.filled())
        }))
        .map_err(plot_err)?;

    root.present().map_err(plot_err)?;
    info!(path = %path.display(), "exported category chart");
    Ok(path)
}

// ── Tests ──────────────────────────────────────────────────────────────────────
