//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They hold
//! display-ready data only: pre-formatted labels, highlight ranges, selection
//! flags and the visible window of the current list.
//!
//! # Example
//!
//! ```rust
//! use restloop::ui::viewmodel::GroupHeading;
//!
//! let heading = GroupHeading { postcode: "2000".to_string(), count: 2 };
//! assert_eq!(heading.label(), "[2000] 2 locations");
//! ```

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct UIViewModel {
    /// Title bar.
    pub header: HeaderInfo,

    /// Category or admin tabs.
    pub tabs: TabsInfo,

    /// Search bar, present on the public rest points listing only.
    pub search_bar: Option<SearchBarInfo>,

    /// Main content area.
    pub body: Body,

    /// Keybinding hints.
    pub footer: FooterInfo,

    /// One-line message, e.g. a validation failure.
    pub notice: Option<String>,

    /// Modal dialog drawn over the body.
    pub dialog: Option<DialogView>,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    /// Page name shown next to the title.
    pub subtitle: String,
}

/// Tab strip display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabsInfo {
    pub labels: Vec<String>,
    /// Index into `labels` of the active tab.
    pub active: usize,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text (e.g., "j/k: navigate  /: search  q: quit").
    pub keybindings: String,
}

/// Search bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,
    /// Shown when the query is empty.
    pub placeholder: String,
    /// Whether keystrokes go into the search bar.
    pub is_focused: bool,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No rest points found").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// What the main content area shows.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// Placeholder cards while the initial load is in progress.
    Skeleton {
        sections: usize,
        cards_per_section: usize,
    },

    /// Postcode headings interleaved with rest point cards.
    Listing(ListingView),

    /// Placeholder cards for the movies category.
    Movies { placeholders: usize },

    /// Nothing matched the search.
    Empty(EmptyState),

    /// Admin rest point table.
    AdminTable(TableView),

    /// Admin movies tab.
    AdminMovies { message: String },
}

/// Visible window of the public listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingView {
    pub lines: Vec<ListLine>,
    /// Total number of cards across all groups, not just the window.
    pub total_cards: usize,
}

/// One row of the public listing.
#[derive(Debug, Clone, PartialEq)]
pub enum ListLine {
    Heading(GroupHeading),
    Card(CardView),
}

/// Heading above a postcode group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupHeading {
    pub postcode: String,
    pub count: usize,
}

impl GroupHeading {
    #[must_use]
    pub fn label(&self) -> String {
        let noun = if self.count == 1 { "location" } else { "locations" };
        format!("[{}] {} {noun}", self.postcode, self.count)
    }
}

/// Display information for a single rest point card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub name: String,
    pub address: String,
    pub hours: String,
    pub phone: Option<String>,
    pub amenities: Vec<String>,

    /// Whether this card is currently selected.
    pub is_selected: bool,

    /// Character ranges of `name` matching the search query.
    ///
    /// Each tuple is `(start_index, end_index)` in UTF-8 character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Admin table display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub title: String,
    pub columns: Vec<String>,
    /// Visible window of rows.
    pub rows: Vec<TableRow>,
    pub total_rows: usize,
}

/// One rest point in the admin table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub id: u64,
    pub name: String,
    pub address: String,
    pub postcode: String,
    pub hours: String,
    pub is_selected: bool,
}

/// Modal dialog display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogView {
    Form {
        title: String,
        fields: Vec<FormFieldView>,
        submit_label: String,
    },
    Confirm {
        title: String,
        message: String,
    },
}

/// One labelled input in a form dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFieldView {
    pub label: String,
    pub value: String,
    pub is_focused: bool,
    pub is_required: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_label_pluralizes() {
        let one = GroupHeading {
            postcode: "2030".to_string(),
            count: 1,
        };
        let two = GroupHeading {
            postcode: "2000".to_string(),
            count: 2,
        };
        assert_eq!(one.label(), "[2030] 1 location");
        assert_eq!(two.label(), "[2000] 2 locations");
    }
}
