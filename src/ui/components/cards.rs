//! Public listing renderer: postcode headings and one-line rest point cards.

use crate::ui::helpers::{self, fit, position_cursor, width_of};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CardView, GroupHeading, ListLine, ListingView};

/// Width of the name column, including the selection marker.
const NAME_COLUMN_WIDTH: usize = 28;

/// Renders the visible window of the listing starting at `row`.
///
/// Returns the next available row.
pub fn render_listing(row: usize, listing: &ListingView, theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for line in &listing.lines {
        current_row = match line {
            ListLine::Heading(heading) => render_heading(current_row, heading, theme, cols),
            ListLine::Card(card) => render_card(current_row, card, theme, cols),
        };
    }
    current_row
}

fn render_heading(row: usize, heading: &GroupHeading, theme: &Theme, cols: usize) -> usize {
    let label = fit(&heading.label(), cols);

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.group_heading_fg));
    print!("{label}");
    print!("{}", " ".repeat(cols.saturating_sub(width_of(&label))));
    print!("{}", Theme::reset());
    row + 1
}

fn set_row_style(card: &CardView, theme: &Theme) {
    if card.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }
}

/// Renders one card as a single row.
///
/// ```text
///  > Sunset Rest Area          123 Highway Drive | 24/7 | 555-123-4567  Restrooms  Food
/// ```
///
/// Details are truncated first; amenity badges are drawn only while they fit.
fn render_card(row: usize, card: &CardView, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    set_row_style(card, theme);

    let marker = if card.is_selected { " > " } else { "   " };
    let name = fit(&card.name, NAME_COLUMN_WIDTH.saturating_sub(4));
    print!("{marker}");
    helpers::render_highlighted_text(&name, &card.highlight_ranges, theme, card.is_selected);
    let mut used = width_of(marker) + width_of(&name);
    let name_pad = NAME_COLUMN_WIDTH.saturating_sub(used).min(cols.saturating_sub(used));
    print!("{}", " ".repeat(name_pad));
    used += name_pad;

    let mut details = vec![card.address.as_str(), card.hours.as_str()];
    if let Some(phone) = &card.phone {
        details.push(phone);
    }
    let details = fit(&details.join(" | "), cols.saturating_sub(used));
    print!("{details}");
    used += width_of(&details);

    for amenity in &card.amenities {
        let badge = format!(" {amenity} ");
        let badge_len = width_of(&badge) + 1;
        if used + badge_len > cols {
            break;
        }
        print!(" ");
        print!("{}", Theme::fg(&theme.colors.badge_fg));
        print!("{}", Theme::bg(&theme.colors.badge_bg));
        print!("{badge}");
        print!("{}", Theme::reset());
        set_row_style(card, theme);
        used += badge_len;
    }

    print!("{}", " ".repeat(cols.saturating_sub(used)));
    print!("{}", Theme::reset());
    row + 1
}
