//! Empty state component renderer.

use crate::ui::helpers::{position_cursor, print_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders a centered two-line message starting two rows below `row`.
///
/// ```text
/// [2 blank lines]
///        No rest points found
///  Try a different search term or location
/// ```
///
/// Returns the row after the subtitle.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let message_row = row + 2;

    position_cursor(message_row, 1);
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print_centered(&empty.message, cols);
    print!("{}", Theme::reset());

    position_cursor(message_row + 1, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print_centered(&empty.subtitle, cols);
    print!("{}", Theme::reset());

    message_row + 2
}

/// Renders a single centered, dimmed line. Used by the admin movies tab.
pub fn render_message(row: usize, message: &str, theme: &Theme, cols: usize) -> usize {
    position_cursor(row + 2, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print_centered(message, cols);
    print!("{}", Theme::reset());
    row + 3
}
