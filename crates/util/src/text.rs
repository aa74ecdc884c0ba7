use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Shortens `text` to at most `max_width` terminal columns, ending with `…`
/// when something was cut. Wide characters are never split.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let width = ch.width().unwrap_or(0);
        if used + width > budget {
            break;
        }
        used += width;
        out.push(ch);
    }
    out.push('…');
    out
}

/// Number of terminal columns `text` occupies.
pub fn display_width(text: &str) -> usize {
    text.width()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_to_width("Kontakte", 8), "Kontakte");
    }

    #[test]
    fn long_text_gets_ellipsis_within_budget() {
        let out = truncate_to_width("Automatisierungen", 10);
        assert_eq!(out, "Automatis…");
        assert_eq!(display_width(&out), 10);
    }

    #[test]
    fn wide_characters_are_not_split() {
        // each CJK character is two columns wide
        assert_eq!(truncate_to_width("文書文書", 4), "文…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }
}
