//! Placeholder renderers: the loading skeleton and the movies listing.

use crate::ui::helpers::{fit, position_cursor, width_of};
use crate::ui::theme::Theme;

const HEADING_BLOCK: &str = "░░░░░░░░░░░░";
const CARD_BLOCK: &str = "▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒   ▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒";

fn print_line(row: usize, text: &str, color: &str, cols: usize) {
    let text = fit(text, cols);
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(width_of(&text))));
    print!("{}", Theme::reset());
}

/// Renders `sections` heading blocks, each followed by `cards_per_section`
/// card blocks, stopping at `max_row`.
///
/// Returns the next available row.
pub fn render_skeleton(
    row: usize,
    sections: usize,
    cards_per_section: usize,
    max_row: usize,
    theme: &Theme,
    cols: usize,
) -> usize {
    let color = &theme.colors.skeleton_fg;
    let mut current_row = row;

    for _ in 0..sections {
        for line in std::iter::once(HEADING_BLOCK)
            .chain(std::iter::repeat(CARD_BLOCK).take(cards_per_section))
        {
            if current_row > max_row {
                return current_row;
            }
            let indented = if line == HEADING_BLOCK {
                line.to_string()
            } else {
                format!("   {line}")
            };
            print_line(current_row, &indented, color, cols);
            current_row += 1;
        }
    }
    current_row
}

fn movie_line(n: usize) -> String {
    format!("   [ poster ]  Movie Title {n}  Now Showing")
}

/// Renders `count` movie placeholder cards, stopping at `max_row`.
pub fn render_movies(row: usize, count: usize, max_row: usize, theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for n in 1..=count {
        if current_row > max_row {
            break;
        }
        print_line(
            current_row,
            &movie_line(n),
            &theme.colors.text_dim,
            cols,
        );
        current_row += 1;
    }
    current_row
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movie_placeholders_are_numbered_and_now_showing() {
        assert_eq!(movie_line(3), "   [ poster ]  Movie Title 3  Now Showing");
    }
}
