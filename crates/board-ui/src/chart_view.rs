//! Chart dashboard view: daily trend line chart and category bar chart.
//!
//! Renders the two charts produced by the data pipeline along with the fixed
//! interpretation text shown beneath each one, the detected-columns line, and
//! any warning/error messages.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use board_core::formatting;
use board_core::models::RenderResult;

use crate::components::{message_lines, Header};
use crate::themes::Theme;

/// Fixed interpretation paragraph shown under the daily trend chart.
pub const TREND_INTERPRETATION: &str = "This line chart shows how total sales \
change over time. Higher points represent strong sales days, while lower \
points indicate slower performance. This helps identify patterns and peak \
sales periods.";

/// Fixed interpretation paragraph shown under the category chart.
pub const CATEGORY_INTERPRETATION: &str = "This bar chart compares total \
sales across product categories. Taller bars are the stronger sellers; the \
categories are ordered from highest to lowest total so the leaders are \
always on the left.";

/// Render the full dashboard view into `area`.
///
/// Layout, top to bottom: header, detected-columns line, trend chart with its
/// interpretation, category chart with its interpretation, messages, footer.
/// Charts that the pipeline skipped are omitted; if both are missing only the
/// messages and a placeholder are shown.
pub fn render_dashboard(frame: &mut Frame, area: Rect, result: &RenderResult, theme: &Theme) {
    if result.has_no_charts() {
        render_no_charts(frame, area, result, theme);
        return;
    }

    let has_trend = result.trend.is_some();
    let has_category = result.category.is_some();

    let mut constraints = vec![
        Constraint::Length(4), // header
        Constraint::Length(1), // detected columns
    ];
    if has_trend {
        constraints.push(Constraint::Min(8)); // trend chart
        constraints.push(Constraint::Length(3)); // trend interpretation
    }
    if has_category {
        constraints.push(Constraint::Min(8)); // category chart
        constraints.push(Constraint::Length(3)); // category interpretation
    }
    constraints.push(Constraint::Length(result.messages.len() as u16));
    constraints.push(Constraint::Length(1)); // footer

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut idx = 0;

    let header = Header::new(&result.source_name, "dashboard", theme);
    frame.render_widget(Paragraph::new(header.to_lines()), chunks[idx]);
    idx += 1;

    frame.render_widget(
        Paragraph::new(detected_columns_line(result, theme)),
        chunks[idx],
    );
    idx += 1;

    if let Some(trend) = &result.trend {
        render_trend_chart(frame, chunks[idx], trend, theme);
        idx += 1;
        frame.render_widget(
            Paragraph::new(Span::styled(TREND_INTERPRETATION, theme.dim))
                .wrap(Wrap { trim: true }),
            chunks[idx],
        );
        idx += 1;
    }

    if let Some(category) = &result.category {
        render_category_chart(frame, chunks[idx], category, theme);
        idx += 1;
        frame.render_widget(
            Paragraph::new(Span::styled(CATEGORY_INTERPRETATION, theme.dim))
                .wrap(Wrap { trim: true }),
            chunks[idx],
        );
        idx += 1;
    }

    frame.render_widget(
        Paragraph::new(message_lines(&result.messages, theme)),
        chunks[idx],
    );
    idx += 1;

    frame.render_widget(
        Paragraph::new(Span::styled(
            "q: quit | r: reload | e: export PNGs",
            theme.dim,
        )),
        chunks[idx],
    );
}

/// One-line summary of which columns were found in the file.
fn detected_columns_line<'a>(result: &'a RenderResult, theme: &'a Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled("Detected columns: ", theme.label),
        Span::styled(result.detected_columns.join(", "), theme.value),
    ])
}

/// Render the daily trend as a braille line chart.
///
/// The x axis is the day index with the first, middle and last dates as tick
/// labels; the y axis runs from zero to the maximum daily total.
pub fn render_trend_chart(
    frame: &mut Frame,
    area: Rect,
    trend: &board_core::models::TrendSeries,
    theme: &Theme,
) {
    let data: Vec<(f64, f64)> = trend
        .points
        .iter()
        .enumerate()
        .map(|(i, (_, v))| (i as f64, *v))
        .collect();

    let max_y = trend.max_value().max(1.0);
    let max_x = (trend.points.len().saturating_sub(1)).max(1) as f64;

    let x_labels: Vec<Span> = x_tick_labels(trend)
        .into_iter()
        .map(|l| Span::styled(l, theme.chart_axis))
        .collect();
    let y_labels = vec![
        Span::styled(formatting::format_currency(0.0), theme.chart_axis),
        Span::styled(formatting::format_currency(max_y / 2.0), theme.chart_axis),
        Span::styled(formatting::format_currency(max_y), theme.chart_axis),
    ];

    let datasets = vec![Dataset::default()
        .name("Total Sales")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(theme.chart_line)
        .data(&data)];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Daily Sales Trend "),
        )
        .x_axis(
            Axis::default()
                .title(Span::styled("Date Ordered", theme.chart_axis))
                .style(theme.chart_axis)
                .bounds([0.0, max_x])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled("Total Sales ($)", theme.chart_axis))
                .style(theme.chart_axis)
                .bounds([0.0, max_y])
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}

/// First, middle and last dates of the trend, formatted `YYYY-MM-DD`.
fn x_tick_labels(trend: &board_core::models::TrendSeries) -> Vec<String> {
    let n = trend.points.len();
    match n {
        0 => vec![],
        1 => vec![trend.points[0].0.to_string()],
        2 => vec![
            trend.points[0].0.to_string(),
            trend.points[1].0.to_string(),
        ],
        _ => vec![
            trend.points[0].0.to_string(),
            trend.points[n / 2].0.to_string(),
            trend.points[n - 1].0.to_string(),
        ],
    }
}

/// Render the per-category totals as a bar chart with alternating colours.
///
/// Bars keep the pipeline's descending order; labels wider than the bar are
/// truncated with an ellipsis.
pub fn render_category_chart(
    frame: &mut Frame,
    area: Rect,
    category: &board_core::models::CategorySeries,
    theme: &Theme,
) {
    let bar_count = category.points.len().max(1) as u16;
    let inner_width = area.width.saturating_sub(2);
    let bar_width = (inner_width / bar_count).saturating_sub(1).clamp(3, 16);

    let bars: Vec<Bar> = category
        .points
        .iter()
        .enumerate()
        .map(|(i, (name, value))| {
            Bar::default()
                .value(value.round() as u64)
                .text_value(formatting::format_number(*value, 0))
                .label(Line::from(truncate_label(name, bar_width as usize)))
                .style(theme.bar_style(i))
                .value_style(theme.bar_value)
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Sales by Category "),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1);

    frame.render_widget(chart, area);
}

/// Truncate a label to `width` display columns, appending `…` when cut.
fn truncate_label(label: &str, width: usize) -> String {
    if label.width() <= width {
        return label.to_string();
    }
    let mut out = String::new();
    for ch in label.chars() {
        if out.width() + 2 > width {
            break;
        }
        out.push(ch);
    }
    out.push('…');
    out
}

/// Placeholder shown when the pipeline produced no charts at all.
pub fn render_no_charts(frame: &mut Frame, area: Rect, result: &RenderResult, theme: &Theme) {
    let mut text = vec![
        Line::from(""),
        Line::from(Span::styled("No charts could be built", theme.warning)),
        Line::from(""),
    ];
    text.extend(message_lines(&result.messages, theme));
    text.push(Line::from(""));
    text.push(Line::from(Span::styled(
        "Press 'r' to reload the file or 'q' to exit",
        theme.dim,
    )));

    frame.render_widget(
        Paragraph::new(ratatui::text::Text::from(text))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Sales Dashboard "),
            ),
        area,
    );
}

/// Full-screen error view shown when the file could not be loaded at all.
pub fn render_load_error(frame: &mut Frame, area: Rect, message: &str, theme: &Theme) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled("Could not read the file", theme.error)),
        Line::from(""),
        Line::from(Span::styled(message.to_string(), theme.text)),
        Line::from(""),
        Line::from(Span::styled(
            "Press 'r' to retry or 'q' to exit",
            theme.dim,
        )),
    ];

    frame.render_widget(
        Paragraph::new(ratatui::text::Text::from(text))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Sales Dashboard "),
            ),
        area,
    );
}

// ── Tests ──────────────────────────────────────────────────────────────────────
