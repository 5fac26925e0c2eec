//! Shared rendering utilities.
//!
//! Cursor positioning, search match highlighting and width-aware text fitting.
//! All ranges and widths are in characters, never bytes, so multi-byte names
//! render and truncate safely.
//!
//! # Example
//!
//! ```rust
//! use restloop::ui::helpers::{fit, match_ranges};
//!
//! assert_eq!(match_ranges("Lakeside Rest Area", "rest"), vec![(9, 13)]);
//! assert_eq!(fit("Lakeside Rest Area", 10), "Lakesid...");
//! ```

use crate::ui::theme::Theme;

/// Positions the cursor at a 1-indexed row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Finds case-insensitive, non-overlapping occurrences of `query` in `text`.
///
/// Returns `(start, end)` character ranges with an exclusive end. A blank
/// query matches nothing.
#[must_use]
pub fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();
    if needle.iter().all(|c| c.is_whitespace()) {
        return Vec::new();
    }

    let hay: Vec<char> = text.chars().collect();
    let mut ranges = Vec::new();
    let mut start = 0;

    while start + needle.len() <= hay.len() {
        let matched = hay[start..start + needle.len()]
            .iter()
            .zip(&needle)
            .all(|(h, n)| h.to_lowercase().eq(std::iter::once(*n)));

        if matched {
            ranges.push((start, start + needle.len()));
            start += needle.len();
        } else {
            start += 1;
        }
    }

    ranges
}

/// Truncates `text` to at most `width` characters, ending in `...` when cut.
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return text.to_string();
    }
    if width <= 3 {
        return text.chars().take(width).collect();
    }
    let mut out: String = text.chars().take(width - 3).collect();
    out.push_str("...");
    out
}

/// Character count of `text`.
#[must_use]
pub fn width_of(text: &str) -> usize {
    text.chars().count()
}

/// Prints `text` centered in `cols` columns, padding both sides.
pub fn print_centered(text: &str, cols: usize) {
    let text = fit(text, cols);
    let len = width_of(&text);
    let padding = cols.saturating_sub(len) / 2;
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
}

/// Renders text with highlighted character ranges for search matches.
///
/// Highlighted sections use match highlight colors unless the item is
/// selected, in which case the selection colors are left alone. Ranges past
/// the end of `text` are clipped.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        let normal_section: String = chars[current_pos..start].iter().collect();
        print!("{normal_section}");

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_is_case_insensitive() {
        assert_eq!(match_ranges("Sunset Rest Area", "SUNSET"), vec![(0, 6)]);
    }

    #[test]
    fn finds_every_non_overlapping_match() {
        assert_eq!(match_ranges("aaaa", "aa"), vec![(0, 2), (2, 4)]);
        assert_eq!(match_ranges("Rest Rest", "rest"), vec![(0, 4), (5, 9)]);
    }

    #[test]
    fn ranges_are_char_indices() {
        assert_eq!(match_ranges("Café Stop", "stop"), vec![(5, 9)]);
    }

    #[test]
    fn blank_or_absent_query_matches_nothing() {
        assert!(match_ranges("Valley Stop", "").is_empty());
        assert!(match_ranges("Valley Stop", "  ").is_empty());
        assert!(match_ranges("Valley", "Valley Stop").is_empty());
    }

    #[test]
    fn fit_truncates_by_chars() {
        assert_eq!(fit("short", 10), "short");
        assert_eq!(fit("Mountain View Stop", 10), "Mountai...");
        assert_eq!(fit("ééééé", 4), "é...");
        assert_eq!(fit("abcdef", 2), "ab");
    }
}
