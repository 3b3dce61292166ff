//! Width-aware text helpers

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate `text` to at most `max_width` terminal columns, ending in `…`
/// when anything was cut.
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width - 1 {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}

/// Greedy word wrap into at most `max_lines` lines of `width` columns.
/// The last line ends in `…` when text was left over.
pub fn wrap_clamped(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut overflow = false;

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.width() + 1 + word.width() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
            if lines.len() == max_lines {
                overflow = true;
                break;
            }
        }
    }
    if !overflow && !current.is_empty() {
        lines.push(current);
    }

    let mut lines: Vec<String> = lines.iter().map(|l| truncate(l, width)).collect();
    if overflow {
        if let Some(last) = lines.last_mut() {
            if last.width() < width {
                last.push('…');
            } else if !last.ends_with('…') {
                *last = truncate(&format!("{last}…"), width);
            }
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short() {
        assert_eq!(truncate("Math", 10), "Math");
    }

    #[test]
    fn test_truncate_long() {
        assert_eq!(truncate("Fractions Quest", 8), "Fractio…");
    }

    #[test]
    fn test_truncate_exact_fit() {
        assert_eq!(truncate("G5–G7", 5), "G5–G7");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // Each emoji is two columns wide
        assert_eq!(truncate("🤖🤖🤖", 4), "🤖…");
    }

    #[test]
    fn test_wrap_clamped_fits_two_lines() {
        assert_eq!(
            wrap_clamped("Fractions Quest – Episode 1", 16, 2),
            vec!["Fractions Quest", "– Episode 1"]
        );
    }

    #[test]
    fn test_wrap_clamped_marks_overflow() {
        assert_eq!(
            wrap_clamped("How to Start a Great Composition", 16, 2),
            vec!["How to Start a", "Great…"]
        );
    }

    #[test]
    fn test_wrap_clamped_short_text() {
        assert_eq!(wrap_clamped("Math", 16, 2), vec!["Math"]);
        assert!(wrap_clamped("Math", 0, 2).is_empty());
    }

    #[test]
    fn test_truncate_zero_width() {
        assert_eq!(truncate("abc", 0), "");
    }
}
