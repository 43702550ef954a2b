use crate::themes::Theme;
use board_core::models::{Message, Severity};
use ratatui::text::{Line, Span};

/// Render a list of pipeline messages as styled lines.
///
/// Warnings get a `"⚠ "` prefix and the warning style; errors get a `"✖ "`
/// prefix and the error style.  An empty slice produces no lines.
pub fn message_lines<'a>(messages: &'a [Message], theme: &'a Theme) -> Vec<Line<'a>> {
    messages
        .iter()
        .map(|msg| {
            let style = theme.message_style(msg.severity);
            let prefix = match msg.severity {
                Severity::Warning => "⚠ ",
                Severity::Error => "✖ ",
            };
            Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(msg.text.as_str(), style),
            ])
        })
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_messages_produce_no_lines() {
        let theme = Theme::dark();
        assert!(message_lines(&[], &theme).is_empty());
    }

    #[test]
    fn test_warning_line_prefix_and_text() {
        let theme = Theme::dark();
        let msgs = vec![Message::warning("No rows with valid values remain")];
        let lines = message_lines(&msgs, &theme);

        assert_eq!(lines.len(), 1);
        let text: String = lines[0].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.starts_with("⚠ "), "warning prefix expected, got: {text}");
        assert!(text.contains("valid values remain"));
    }

    #[test]
    fn test_error_line_uses_error_style() {
        let theme = Theme::dark();
        let msgs = vec![Message::error("Your file must include the column 'Sales'")];
        let lines = message_lines(&msgs, &theme);

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].spans[0].style, theme.error);
        let text: String = lines[0].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.starts_with("✖ "));
    }

    #[test]
    fn test_mixed_messages_preserve_order() {
        let theme = Theme::dark();
        let msgs = vec![
            Message::error("first"),
            Message::warning("second"),
            Message::error("third"),
        ];
        let lines = message_lines(&msgs, &theme);

        let texts: Vec<String> = lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        assert!(texts[0].contains("first"));
        assert!(texts[1].contains("second"));
        assert!(texts[2].contains("third"));
    }
}
