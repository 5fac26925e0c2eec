//! Footer and notice line renderers.

use crate::ui::helpers::{fit, position_cursor, print_centered, width_of};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer help bar at the specified row.
///
/// Keybinding hints are centered and dimmed. Text wider than the terminal is
/// truncated so it cannot wrap into the next row.
///
/// Returns the next available row.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print_centered(&footer.keybindings, cols);
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the notice line, or blanks the row when there is no notice.
pub fn render_notice(row: usize, notice: Option<&str>, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    match notice {
        Some(text) => {
            let text = fit(&format!(" ! {text}"), cols);
            print!("{}{text}", Theme::fg(&theme.colors.notice_fg));
            print!("{}", " ".repeat(cols.saturating_sub(width_of(&text))));
            print!("{}", Theme::reset());
        }
        None => print!("{}", " ".repeat(cols)),
    }
    row + 1
}
