// Text helpers shared by the view renderers

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use unicode_width::UnicodeWidthStr;

/// Pad `s` with spaces to `width` terminal columns. Emoji flags and CJK
/// text take two columns, so byte or char counts would misalign tables.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

/// `[ON ]` / `[OFF]` switch rendering
pub fn switch_span(on: bool, on_color: Color) -> Span<'static> {
    if on {
        Span::styled(
            "[ ON]",
            Style::default().fg(on_color).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled("[OFF]", Style::default().fg(Color::DarkGray))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_right_counts_columns() {
        assert_eq!(pad_right("abc", 5), "abc  ");
        assert_eq!(pad_right("abcdef", 3), "abcdef");
        // CJK characters are two columns wide
        assert_eq!(UnicodeWidthStr::width(pad_right("日本", 6).as_str()), 6);
    }
}
