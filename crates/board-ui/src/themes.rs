use ratatui::style::{Color, Modifier, Style};

/// Terminal background type detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackgroundType {
    Dark,
    Light,
    Unknown,
}

/// Detect terminal background type from the `COLORFGBG` environment variable.
///
/// The variable has the format `"foreground;background"`.  Background values
/// 0–6 are considered dark; 7–15 are considered light.  If the variable is
/// absent or unparseable, `BackgroundType::Dark` is returned as the safe
/// default.
pub fn detect_background() -> BackgroundType {
    if let Ok(val) = std::env::var("COLORFGBG") {
        if let Some(bg) = val.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                return if bg_num <= 6 {
                    BackgroundType::Dark
                } else {
                    BackgroundType::Light
                };
            }
        }
    }
    BackgroundType::Dark
}

/// Complete theme definition carrying all UI styles used by board-ui
/// components.
#[derive(Debug, Clone)]
pub struct Theme {
    // ── Header ───────────────────────────────────────────────────────────────
    pub header: Style,
    pub header_sparkle: Style,
    pub separator: Style,

    // ── Text ─────────────────────────────────────────────────────────────────
    pub text: Style,
    pub dim: Style,
    pub label: Style,
    pub value: Style,

    // ── Status ───────────────────────────────────────────────────────────────
    pub info: Style,
    pub warning: Style,
    pub error: Style,

    // ── Charts ───────────────────────────────────────────────────────────────
    /// Trend line and its markers.
    pub chart_line: Style,
    /// Axis titles and tick labels.
    pub chart_axis: Style,
    /// First of the two fixed category bar colours.
    pub bar_primary: Style,
    /// Second of the two fixed category bar colours.
    pub bar_secondary: Style,
    /// Value text drawn on top of a bar.
    pub bar_value: Style,

    // ── Table ────────────────────────────────────────────────────────────────
    pub table_header: Style,
    pub table_border: Style,
    pub table_row: Style,
    pub table_row_alt: Style,
    pub table_total: Style,
}

impl Theme {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Dark-background terminal theme (default).
    pub fn dark() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            header_sparkle: Style::default().fg(Color::Yellow),
            separator: Style::default().fg(Color::DarkGray),

            text: Style::default().fg(Color::White),
            dim: Style::default().fg(Color::DarkGray),
            label: Style::default().fg(Color::Gray),
            value: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),

            info: Style::default().fg(Color::Cyan),
            warning: Style::default().fg(Color::Yellow),
            error: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),

            chart_line: Style::default().fg(Color::Cyan),
            chart_axis: Style::default().fg(Color::Gray),
            bar_primary: Style::default().fg(Color::LightBlue),
            bar_secondary: Style::default().fg(Color::Yellow),
            bar_value: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),

            table_header: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            table_border: Style::default().fg(Color::DarkGray),
            table_row: Style::default().fg(Color::White),
            table_row_alt: Style::default().fg(Color::Gray),
            table_total: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        }
    }

    /// Light-background terminal theme.
    ///
    /// Uses dark colours for text and saturated accent colours so content
    /// remains legible against a white/light-grey terminal canvas.
    pub fn light() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            header_sparkle: Style::default().fg(Color::Magenta),
            separator: Style::default().fg(Color::Gray),

            text: Style::default().fg(Color::Black),
            dim: Style::default().fg(Color::Gray),
            label: Style::default().fg(Color::DarkGray),
            value: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),

            info: Style::default().fg(Color::Blue),
            warning: Style::default().fg(Color::Yellow),
            error: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),

            chart_line: Style::default().fg(Color::Blue),
            chart_axis: Style::default().fg(Color::DarkGray),
            bar_primary: Style::default().fg(Color::Blue),
            bar_secondary: Style::default().fg(Color::Magenta),
            bar_value: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),

            table_header: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            table_border: Style::default().fg(Color::Gray),
            table_row: Style::default().fg(Color::Black),
            table_row_alt: Style::default().fg(Color::DarkGray),
            table_total: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        }
    }

    /// Pick dark or light based on the detected terminal background.
    pub fn auto_detect() -> Self {
        match detect_background() {
            BackgroundType::Light => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Resolve a theme name from settings; unknown names auto-detect.
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            "dark" => Self::dark(),
            _ => Self::auto_detect(),
        }
    }

    // ── Style helpers ────────────────────────────────────────────────────────

    /// Bar colour for the category at `index`: the two fixed colours
    /// alternate.
    pub fn bar_style(&self, index: usize) -> Style {
        if index % 2 == 0 {
            self.bar_primary
        } else {
            self.bar_secondary
        }
    }

    /// Style for a pipeline message of the given severity.
    pub fn message_style(&self, severity: board_core::models::Severity) -> Style {
        match severity {
            board_core::models::Severity::Warning => self.warning,
            board_core::models::Severity::Error => self.error,
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use board_core::models::Severity;

    #[test]
    fn test_from_name_dark() {
        let t = Theme::from_name("dark");
        assert_eq!(t.header.fg, Some(Color::Cyan));
    }

    #[test]
    fn test_from_name_light() {
        let t = Theme::from_name("light");
        assert_eq!(t.header.fg, Some(Color::Blue));
    }

    #[test]
    fn test_from_name_unknown_falls_back() {
        // Unknown names must not panic; they resolve via auto-detect.
        let _ = Theme::from_name("neon");
    }

    #[test]
    fn test_bar_styles_alternate() {
        let t = Theme::dark();
        assert_eq!(t.bar_style(0), t.bar_primary);
        assert_eq!(t.bar_style(1), t.bar_secondary);
        assert_eq!(t.bar_style(2), t.bar_primary);
    }

    #[test]
    fn test_message_style_by_severity() {
        let t = Theme::dark();
        assert_eq!(t.message_style(Severity::Warning), t.warning);
        assert_eq!(t.message_style(Severity::Error), t.error);
    }
}
