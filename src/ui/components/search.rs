//! Search bar component renderer.

use crate::ui::helpers::{fit, position_cursor, width_of};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Renders the search input box at the specified row.
///
/// ```text
/// [margin] ┌──────────────────────────────┐ [margin]
/// [margin] │ Search: Enter suburb or address │ [margin]
/// [margin] └──────────────────────────────┘ [margin]
/// ```
///
/// An empty query shows the dimmed placeholder. A focused bar shows a cursor
/// after the query and uses the highlighted border color.
///
/// Returns the next available row (row + 3).
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border_color = if search.is_focused {
        &theme.colors.search_bar_border
    } else {
        &theme.colors.border
    };

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border_color));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let (text, text_color) = if search.query.is_empty() && !search.is_focused {
        (format!(" Search: {}", search.placeholder), &theme.colors.text_dim)
    } else {
        let cursor = if search.is_focused { "_" } else { "" };
        (format!(" Search: {}{cursor}", search.query), &theme.colors.text_normal)
    };
    let text = fit(&text, inner_width);
    let padding = inner_width.saturating_sub(width_of(&text));

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border_color));
    print!("│");
    print!("{}", Theme::fg(text_color));
    print!("{text}");
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(border_color));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border_color));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}
