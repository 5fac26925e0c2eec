//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: Title bar and tab strip
//! - [`footer`]: Keybinding hints and the notice line
//! - [`search`]: Search input box
//! - [`cards`]: Postcode headings and rest point cards
//! - [`skeleton`]: Loading and movies placeholders
//! - [`table`]: Admin table (NAME, ADDRESS, POSTCODE, HOURS)
//! - [`empty`]: Centered messages for empty results
//! - [`dialog`]: Modal add/edit/delete dialogs
//!
//! # Layout Modes
//!
//! - [`render_public_page`]: Header + Tabs + `SearchBar` + Listing + Footer
//! - [`render_admin_page`]: Header + Tabs + Table + Footer

mod cards;
mod dialog;
mod empty;
mod footer;
mod header;
mod search;
mod skeleton;
mod table;

pub use dialog::render_dialog;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Body, UIViewModel};

use cards::render_listing;
use empty::{render_empty_state, render_message};
use footer::{render_footer, render_notice};
use header::{render_header, render_tabs};
use search::render_search_bar;
use skeleton::{render_movies, render_skeleton};
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal border line at the specified row.
///
/// Returns the next available row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the chrome shared by both pages: header, tabs and a border.
fn render_top(vm: &UIViewModel, theme: &Theme, cols: usize) -> usize {
    let mut current_row = 2; // Row 1 stays blank.
    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_tabs(current_row, &vm.tabs, theme, cols);
    render_border(current_row, &theme.colors.border, cols)
}

/// Renders notice, border and footer at the bottom of the screen.
///
/// Returns the last row available to the body.
fn render_bottom(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) -> usize {
    let footer_row = rows.saturating_sub(1);
    let border_row = footer_row.saturating_sub(1);
    let notice_row = border_row.saturating_sub(1);

    render_notice(notice_row, vm.notice.as_deref(), theme, cols);
    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
    notice_row.saturating_sub(1)
}

/// Renders the public page layout.
///
/// ```text
/// [blank line]
/// [Header]
/// [Tabs]
/// [Border]
/// [Search Bar - 3 lines, rest points only]
/// [Listing | Skeleton | Movies | Empty state]
/// [Notice]
/// [Border]
/// [Footer]
/// ```
pub fn render_public_page(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = render_top(vm, theme, cols);
    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }
    let last_body_row = render_bottom(vm, theme, cols, rows);

    match &vm.body {
        Body::Skeleton {
            sections,
            cards_per_section,
        } => {
            render_skeleton(current_row, *sections, *cards_per_section, last_body_row, theme, cols);
        }
        Body::Listing(listing) => {
            render_listing(current_row, listing, theme, cols);
        }
        Body::Movies { placeholders } => {
            render_movies(current_row, *placeholders, last_body_row, theme, cols);
        }
        Body::Empty(empty) => {
            render_empty_state(current_row, empty, theme, cols);
        }
        Body::AdminTable(_) | Body::AdminMovies { .. } => {
            tracing::warn!("admin body on public page");
        }
    }
}

/// Renders the admin page layout.
///
/// ```text
/// [blank line]
/// [Header]
/// [Tabs]
/// [Border]
/// [Table Title]
/// [Table Headers]
/// [Table Rows | Movies message]
/// [Notice]
/// [Border]
/// [Footer]
/// ```
pub fn render_admin_page(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let current_row = render_top(vm, theme, cols);
    render_bottom(vm, theme, cols, rows);

    match &vm.body {
        Body::AdminTable(table) => {
            let rows_start = render_table_headers(current_row, table, theme, cols);
            render_table_rows(rows_start, &table.rows, theme, cols);
        }
        Body::AdminMovies { message } => {
            render_message(current_row, message, theme, cols);
        }
        _ => tracing::warn!("public body on admin page"),
    }
}
