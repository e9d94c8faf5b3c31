//! Width-aware text helpers

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `text` to at most `max_width` display columns, ending in `…` when cut
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_unchanged() {
        assert_eq!(truncate("Fix roads", 20), "Fix roads");
        assert_eq!(truncate("exact", 5), "exact");
    }

    #[test]
    fn test_long_text_gets_ellipsis() {
        assert_eq!(truncate("Build more housing", 8), "Build m…");
    }

    #[test]
    fn test_wide_chars_counted_by_columns() {
        // Each CJK char is two columns wide
        let cut = truncate("住宅住宅住宅", 5);
        assert_eq!(cut, "住宅…");
        assert!(cut.width() <= 5);
    }

    #[test]
    fn test_zero_width() {
        assert_eq!(truncate("abc", 0), "");
    }
}
