//! Summary table view: aggregate totals as bordered tables.
//!
//! Renders one [`ratatui::widgets::Table`] per chart series (daily trend,
//! category totals) with a highlighted TOTAL row at the bottom of each.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use board_core::formatting;
use board_core::models::RenderResult;

use crate::components::{message_lines, Header};
use crate::themes::Theme;

/// A single label/value row of a summary table.
#[derive(Debug, Clone)]
pub struct SummaryRow {
    /// Group key, e.g. `"2024-03-01"` or `"Office Supplies"`.
    pub label: String,
    /// Summed sales for the group.
    pub value: f64,
}

/// Render one summary table: data rows followed by a TOTAL row.
pub fn render_summary_table(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    key_header: &str,
    rows: &[SummaryRow],
    theme: &Theme,
) {
    let header_cells = [key_header, "Total Sales"]
        .into_iter()
        .map(|h| Cell::from(h).style(theme.table_header));
    let header = Row::new(header_cells).height(1);

    let data_rows: Vec<Row> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let style = if i % 2 == 0 {
                theme.table_row
            } else {
                theme.table_row_alt
            };
            Row::new(vec![
                Cell::from(row.label.clone()),
                Cell::from(formatting::format_currency(row.value)),
            ])
            .style(style)
        })
        .collect();

    let grand_total: f64 = rows.iter().map(|r| r.value).sum();
    let total_row = Row::new(vec![
        Cell::from("TOTAL").style(theme.table_total),
        Cell::from(formatting::format_currency(grand_total)),
    ])
    .style(theme.table_total);

    let mut all_rows = data_rows;
    all_rows.push(total_row);

    let widths = [Constraint::Length(24), Constraint::Length(16)];

    let table = Table::new(all_rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.table_border)
                .title(format!(" {} ", title)),
        )
        .style(theme.text);

    frame.render_widget(table, area);
}

/// Render the full summary view: header, one table per available series,
/// then any pipeline messages.
pub fn render_summary(frame: &mut Frame, area: Rect, result: &RenderResult, theme: &Theme) {
    let has_trend = result.trend.is_some();
    let has_category = result.category.is_some();

    let mut constraints = vec![Constraint::Length(4)];
    if has_trend {
        constraints.push(Constraint::Min(6));
    }
    if has_category {
        constraints.push(Constraint::Min(6));
    }
    constraints.push(Constraint::Length((result.messages.len() as u16).max(1)));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut idx = 0;

    let header = Header::new(&result.source_name, "summary", theme);
    frame.render_widget(Paragraph::new(header.to_lines()), chunks[idx]);
    idx += 1;

    if let Some(trend) = &result.trend {
        let rows: Vec<SummaryRow> = trend
            .points
            .iter()
            .map(|(d, v)| SummaryRow {
                label: d.to_string(),
                value: *v,
            })
            .collect();
        render_summary_table(frame, chunks[idx], "Daily Sales", "Date Ordered", &rows, theme);
        idx += 1;
    }

    if let Some(category) = &result.category {
        let rows: Vec<SummaryRow> = category
            .points
            .iter()
            .map(|(c, v)| SummaryRow {
                label: c.clone(),
                value: *v,
            })
            .collect();
        render_summary_table(
            frame,
            chunks[idx],
            "Sales by Category",
            "Category",
            &rows,
            theme,
        );
        idx += 1;
    }

    frame.render_widget(
        Paragraph::new(message_lines(&result.messages, theme)),
        chunks[idx],
    );
}

// ── Tests ──────────────────────────────────────────────────────────────────────
