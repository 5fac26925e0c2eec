//! Admin table component renderer.
//!
//! Four columns (NAME, ADDRESS, POSTCODE, HOURS) with selection highlighting.
//! Column widths shrink with the terminal; HOURS takes whatever remains.

use crate::ui::helpers::{fit, position_cursor, width_of};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{TableRow, TableView};

/// Column widths for NAME, ADDRESS and POSTCODE, given the terminal width.
fn column_widths(cols: usize) -> [usize; 3] {
    let name = (cols * 3 / 10).clamp(10, 28);
    let address = (cols * 4 / 10).clamp(10, 36);
    [name, address, 10]
}

fn print_cells(cells: [&str; 4], cols: usize) -> usize {
    let widths = column_widths(cols);
    let mut used = 1;
    print!(" ");

    for (cell, width) in cells.iter().zip(widths) {
        let text = fit(cell, width.saturating_sub(1));
        let pad = width.saturating_sub(width_of(&text));
        if used + width > cols {
            return used;
        }
        print!("{text}{}", " ".repeat(pad));
        used += width;
    }

    let hours = fit(cells[3], cols.saturating_sub(used));
    print!("{hours}");
    used + width_of(&hours)
}

/// Renders the table title and column headers.
///
/// Returns the next available row.
pub fn render_table_headers(row: usize, table: &TableView, theme: &Theme, cols: usize) -> usize {
    let title = fit(
        &format!(" {} ({})", table.title, table.total_rows),
        cols,
    );
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{title}");
    print!("{}", " ".repeat(cols.saturating_sub(width_of(&title))));
    print!("{}", Theme::reset());

    let headers: Vec<&str> = table.columns.iter().map(String::as_str).collect();
    position_cursor(row + 1, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    if let [name, address, postcode, hours] = headers.as_slice() {
        let used = print_cells([*name, *address, *postcode, *hours], cols);
        print!("{}", " ".repeat(cols.saturating_sub(used)));
    }
    print!("{}", Theme::reset());
    row + 2
}

/// Renders all table rows starting at the specified row.
///
/// Returns the next available row.
pub fn render_table_rows(row: usize, rows: &[TableRow], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in rows {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders one rest point, padded to the full width so the selection
/// background covers the whole row.
fn render_table_row(row: usize, item: &TableRow, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    let used = print_cells(
        [
            item.name.as_str(),
            item.address.as_str(),
            item.postcode.as_str(),
            item.hours.as_str(),
        ],
        cols,
    );
    print!("{}", " ".repeat(cols.saturating_sub(used)));

    print!("{}", Theme::reset());
    row + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_fit_narrow_and_wide_terminals() {
        assert_eq!(column_widths(40), [12, 16, 10]);
        assert_eq!(column_widths(200), [28, 36, 10]);
        assert_eq!(column_widths(20), [10, 10, 10]);
    }
}
