//! Header and tab strip renderers.

use crate::ui::helpers::{fit, position_cursor, width_of};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{HeaderInfo, TabsInfo};

/// Renders the title bar at the specified row.
///
/// The title is bold and centered together with the dimmed page subtitle:
///
/// ```text
/// [left padding] RESTLOOP  Find rest points near you [right padding]
/// ```
///
/// Returns the next available row.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title = fit(&header.title, cols);
    let subtitle = fit(
        &header.subtitle,
        cols.saturating_sub(width_of(&title) + 2),
    );
    let text_len = width_of(&title)
        + if subtitle.is_empty() {
            0
        } else {
            2 + width_of(&subtitle)
        };
    let padding = cols.saturating_sub(text_len) / 2;

    position_cursor(row, 1);
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{}", " ".repeat(padding));
    print!("{}{}{title}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
    print!("{}", Theme::reset());
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    if !subtitle.is_empty() {
        print!("  {}{subtitle}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the tab strip with the active tab highlighted.
///
/// Returns the next available row.
pub fn render_tabs(row: usize, tabs: &TabsInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    let mut used = 0;

    for (idx, label) in tabs.labels.iter().enumerate() {
        let cell = format!(" {label} ");
        let cell_len = width_of(&cell);
        if used + cell_len + 1 > cols {
            break;
        }

        print!(" ");
        if idx == tabs.active {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.tab_active_fg));
            print!("{}", Theme::bg(&theme.colors.tab_active_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_dim));
        }
        print!("{cell}");
        print!("{}", Theme::reset());
        used += cell_len + 1;
    }

    print!("{}", " ".repeat(cols.saturating_sub(used)));
    row + 1
}
