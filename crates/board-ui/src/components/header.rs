use crate::themes::Theme;
use ratatui::text::{Line, Span};

/// Decorative sparkle string placed either side of the application title.
pub const SPARKLES: &str = "✦ ✧ ✦ ✧";

/// Dashboard header rendering four lines:
///
/// 1. Application title with sparkle decorations (ALL CAPS).
/// 2. A 60-column `=` separator.
/// 3. Source file and view information in `[ file | view ]` format.
/// 4. An empty line.
pub struct Header<'a> {
    /// Name of the file the dashboard was built from.
    pub source_name: &'a str,
    /// Active view name (e.g. "dashboard", "summary").
    pub view: &'a str,
    /// Theme providing colour styles for each part of the header.
    pub theme: &'a Theme,
}

impl<'a> Header<'a> {
    /// Construct a new header.
    pub fn new(source_name: &'a str, view: &'a str, theme: &'a Theme) -> Self {
        Self {
            source_name,
            view,
            theme,
        }
    }

    /// Render the header as a `Vec<Line>` containing exactly four lines.
    ///
    /// The returned lines are:
    ///
    /// 1. `"✦ ✧ ✦ ✧ SALES DASHBOARD ✦ ✧ ✦ ✧"`
    /// 2. `"============================================================"` (60 `=` chars)
    /// 3. `"[ sales.csv | dashboard ]"`
    /// 4. `""`
    pub fn to_lines(&self) -> Vec<Line<'a>> {
        let separator = "=".repeat(60);

        vec![
            // Title line.
            Line::from(vec![
                Span::styled(SPARKLES, self.theme.header_sparkle),
                Span::styled(" SALES DASHBOARD ", self.theme.header),
                Span::styled(SPARKLES, self.theme.header_sparkle),
            ]),
            // Separator line.
            Line::from(Span::styled(separator, self.theme.separator)),
            // Source / view info line.
            Line::from(vec![
                Span::styled("[ ", self.theme.label),
                Span::styled(self.source_name, self.theme.value),
                Span::styled(" | ", self.theme.label),
                Span::styled(self.view, self.theme.value),
                Span::styled(" ]", self.theme.label),
            ]),
            // Empty line.
            Line::from(""),
        ]
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::Theme;

    #[test]
    fn test_header_to_lines_count() {
        let theme = Theme::dark();
        let header = Header::new("sales.csv", "dashboard", &theme);
        let lines = header.to_lines();
        assert_eq!(lines.len(), 4, "header must produce exactly 4 lines");
    }

    #[test]
    fn test_header_title_line_content() {
        let theme = Theme::dark();
        let header = Header::new("sales.csv", "dashboard", &theme);
        let lines = header.to_lines();

        // Reconstruct the text of the first line.
        let title_text: String = lines[0].spans.iter().map(|s| s.content.as_ref()).collect();

        assert!(
            title_text.contains("SALES DASHBOARD"),
            "title line must contain 'SALES DASHBOARD', got: {title_text}"
        );
        assert!(
            title_text.contains(SPARKLES),
            "title line must contain sparkles, got: {title_text}"
        );
    }

    #[test]
    fn test_header_info_line_content() {
        let theme = Theme::dark();
        let header = Header::new("orders.xlsx", "summary", &theme);
        let lines = header.to_lines();

        let info_text: String = lines[2].spans.iter().map(|s| s.content.as_ref()).collect();

        assert!(
            info_text.contains("orders.xlsx"),
            "file name must appear, got: {info_text}"
        );
        assert!(
            info_text.contains("summary"),
            "view name must appear, got: {info_text}"
        );
        assert!(
            info_text.contains("[ ") && info_text.contains(" | ") && info_text.contains(" ]"),
            "format must be '[ file | view ]', got: {info_text}"
        );
    }

    #[test]
    fn test_header_separator_line() {
        let theme = Theme::dark();
        let header = Header::new("sales.csv", "dashboard", &theme);
        let lines = header.to_lines();

        // Second line must be a 60-column `=` separator.
        let sep_text: String = lines[1].spans.iter().map(|s| s.content.as_ref()).collect();

        assert_eq!(
            sep_text.chars().count(),
            60,
            "separator must be 60 chars wide"
        );
        assert!(
            sep_text.chars().all(|c| c == '='),
            "separator must consist of '=' characters, got: {sep_text}"
        );
    }

    #[test]
    fn test_header_empty_fourth_line() {
        let theme = Theme::dark();
        let header = Header::new("sales.csv", "dashboard", &theme);
        let lines = header.to_lines();

        let empty_text: String = lines[3].spans.iter().map(|s| s.content.as_ref()).collect();

        assert!(
            empty_text.is_empty(),
            "fourth line must be empty, got: {empty_text:?}"
        );
    }
}
