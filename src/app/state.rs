//! Application state and view model computation.
//!
//! [`AppState`] owns the rest point store together with the transient UI
//! state around it: the active page, input mode, selection cursor, open
//! dialog and the loading timer slot. View models are computed on demand from
//! a state snapshot.
//!
//! # Selection
//!
//! The cursor indexes the list currently on screen. On the public page that
//! is the postcode-grouped listing flattened in display order; on the admin
//! page it is the table of all rest points. Selection wraps at both ends and
//! is clamped whenever the underlying list shrinks.
//!
//! # Example
//!
//! ```rust
//! use restloop::app::AppState;
//! use restloop::store::RestPointStore;
//! use restloop::ui::Theme;
//!
//! let mut state = AppState::new(RestPointStore::seeded()?, Theme::default(), 1.5);
//! state.store.finish_loading();
//! state.move_selection_down();
//! assert_eq!(state.selected_id(), Some(2));
//! let viewmodel = state.compute_viewmodel(24, 80);
//! # Ok::<(), restloop::RestloopError>(())
//! ```

use super::modes::{Dialog, InputMode, Page, SearchFocus, TimerSlot};
use crate::domain::{Category, RestPoint};
use crate::form::FormField;
use crate::store::{PostcodeGroup, RestPointStore};
use crate::ui::helpers::match_ranges;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    Body, CardView, DialogView, EmptyState, FooterInfo, FormFieldView, GroupHeading, HeaderInfo,
    ListLine, ListingView, SearchBarInfo, TableRow, TableView, TabsInfo, UIViewModel,
};

/// Rows taken by everything except the listing on the public page: leading
/// blank, header, tabs, border, 3-line search box, notice, border, footer and
/// trailing blank.
const PUBLIC_CHROME_ROWS: usize = 11;

/// Rows taken by everything except table rows on the admin page.
const ADMIN_CHROME_ROWS: usize = 10;

const SKELETON_SECTIONS: usize = 2;
const SKELETON_CARDS_PER_SECTION: usize = 3;
const MOVIE_PLACEHOLDERS: usize = 6;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Rest points and the public page query parameters.
    pub store: RestPointStore,

    pub page: Page,

    /// Search state of the public page. Always `Normal` on the admin page.
    pub input_mode: InputMode,

    /// Zero-based cursor into the list on screen.
    pub selected_index: usize,

    /// Active tab of the admin page.
    pub admin_tab: Category,

    /// Open modal dialog on the admin page.
    pub dialog: Option<Dialog>,

    /// Message shown above the footer until the next successful action.
    pub notice: Option<String>,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Fire-once timer ending the initial loading state.
    pub timer: TimerSlot,

    /// Seconds between startup and the end of the loading state.
    pub loading_delay: f64,
}

impl AppState {
    #[must_use]
    pub fn new(store: RestPointStore, theme: Theme, loading_delay: f64) -> Self {
        Self {
            store,
            page: Page::Public,
            input_mode: InputMode::Normal,
            selected_index: 0,
            admin_tab: Category::RestPoints,
            dialog: None,
            notice: None,
            theme,
            timer: TimerSlot::Idle,
            loading_delay,
        }
    }

    /// Whether the public page shows the rest point listing (not skeleton or movies).
    #[must_use]
    pub fn shows_public_listing(&self) -> bool {
        self.page == Page::Public
            && self.store.category() == Category::RestPoints
            && !self.store.loading()
    }

    /// Whether the admin page shows the rest point table.
    #[must_use]
    pub fn shows_admin_table(&self) -> bool {
        self.page == Page::Admin && self.admin_tab == Category::RestPoints
    }

    /// Rest points in the order they appear on screen.
    fn visible_points(&self) -> Vec<&RestPoint> {
        if self.shows_public_listing() {
            self.store
                .grouped()
                .into_iter()
                .flat_map(|group| group.points)
                .collect()
        } else if self.shows_admin_table() {
            self.store.list_all().iter().collect()
        } else {
            Vec::new()
        }
    }

    fn selectable_len(&self) -> usize {
        if self.shows_public_listing() {
            self.store.filtered().len()
        } else if self.shows_admin_table() {
            self.store.len()
        } else {
            0
        }
    }

    /// Moves selection cursor down by one position, wrapping to top if at end.
    pub fn move_selection_down(&mut self) {
        let len = self.selectable_len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Moves selection cursor up by one position, wrapping to bottom if at start.
    pub fn move_selection_up(&mut self) {
        let len = self.selectable_len();
        if len == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = len - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Keeps the cursor inside the list after it shrinks.
    pub fn clamp_selection(&mut self) {
        let len = self.selectable_len();
        self.selected_index = if len == 0 {
            0
        } else {
            self.selected_index.min(len - 1)
        };
    }

    /// Id of the rest point under the cursor, if any.
    #[must_use]
    pub fn selected_id(&self) -> Option<u64> {
        self.visible_points()
            .get(self.selected_index)
            .map(|point| point.id)
    }

    /// Computes a renderable UI view model from current state and terminal dimensions.
    ///
    /// The list on screen is windowed so the selected line stays visible:
    /// the window is centered on the selection and shifted back when it would
    /// run past the end of the list.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let _span = tracing::trace_span!("compute_viewmodel", rows, cols, page = ?self.page).entered();

        let body = match self.page {
            Page::Public => self.compute_public_body(rows),
            Page::Admin => self.compute_admin_body(rows),
        };

        UIViewModel {
            header: self.compute_header(),
            tabs: self.compute_tabs(),
            search_bar: self.compute_search_bar(),
            body,
            footer: self.compute_footer(),
            notice: self.notice.clone(),
            dialog: self.dialog.as_ref().map(compute_dialog),
        }
    }

    fn compute_public_body(&self, rows: usize) -> Body {
        if self.store.loading() {
            return Body::Skeleton {
                sections: SKELETON_SECTIONS,
                cards_per_section: SKELETON_CARDS_PER_SECTION,
            };
        }

        if self.store.category() == Category::Movies {
            return Body::Movies {
                placeholders: MOVIE_PLACEHOLDERS,
            };
        }

        let groups = self.store.grouped();
        if groups.is_empty() {
            return Body::Empty(EmptyState {
                message: "No rest points found".to_string(),
                subtitle: "Try a different search term or location".to_string(),
            });
        }

        let (lines, selected_line, total_cards) = self.listing_lines(&groups);
        let available = rows.saturating_sub(PUBLIC_CHROME_ROWS).max(1);
        let (start, end) = visible_window(selected_line, lines.len(), available);

        Body::Listing(ListingView {
            lines: lines[start..end].to_vec(),
            total_cards,
        })
    }

    /// Flattens groups into heading and card lines.
    ///
    /// Returns the lines, the line index of the selected card and the card count.
    fn listing_lines(&self, groups: &[PostcodeGroup<'_>]) -> (Vec<ListLine>, usize, usize) {
        let highlight_query = match self.input_mode {
            InputMode::Search(_) if !self.store.search_query().trim().is_empty() => {
                Some(self.store.search_query())
            }
            _ => None,
        };

        let mut lines = Vec::new();
        let mut selected_line = 0;
        let mut card_index = 0;

        for group in groups {
            lines.push(ListLine::Heading(GroupHeading {
                postcode: group.postcode.to_string(),
                count: group.len(),
            }));

            for point in &group.points {
                let is_selected = card_index == self.selected_index;
                if is_selected {
                    selected_line = lines.len();
                }
                lines.push(ListLine::Card(CardView {
                    name: point.name.clone(),
                    address: point.address.clone(),
                    hours: point.hours.clone(),
                    phone: point.phone.clone(),
                    amenities: point.amenities.clone(),
                    is_selected,
                    highlight_ranges: highlight_query
                        .map_or_else(Vec::new, |query| match_ranges(&point.name, query)),
                }));
                card_index += 1;
            }
        }

        (lines, selected_line, card_index)
    }

    fn compute_admin_body(&self, rows: usize) -> Body {
        if self.admin_tab == Category::Movies {
            return Body::AdminMovies {
                message: "Movie management functionality will be implemented in a future update."
                    .to_string(),
            };
        }

        let points = self.store.list_all();
        let available = rows.saturating_sub(ADMIN_CHROME_ROWS).max(1);
        let (start, end) = visible_window(self.selected_index, points.len(), available);

        let table_rows = points[start..end]
            .iter()
            .enumerate()
            .map(|(offset, point)| TableRow {
                id: point.id,
                name: point.name.clone(),
                address: point.address.clone(),
                postcode: point.postcode.clone(),
                hours: point.hours.clone(),
                is_selected: start + offset == self.selected_index,
            })
            .collect();

        Body::AdminTable(TableView {
            title: "Manage Rest Points".to_string(),
            columns: ["NAME", "ADDRESS", "POSTCODE", "HOURS"]
                .into_iter()
                .map(String::from)
                .collect(),
            rows: table_rows,
            total_rows: points.len(),
        })
    }

    fn compute_header(&self) -> HeaderInfo {
        let subtitle = match self.page {
            Page::Public => "Find rest points near you",
            Page::Admin => "Admin Dashboard",
        };
        HeaderInfo {
            title: "RESTLOOP".to_string(),
            subtitle: subtitle.to_string(),
        }
    }

    fn compute_tabs(&self) -> TabsInfo {
        let active = match self.page {
            Page::Public => self.store.category(),
            Page::Admin => self.admin_tab,
        };
        TabsInfo {
            labels: Category::ALL.iter().map(|c| c.label().to_string()).collect(),
            active: active.index(),
        }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        if self.page != Page::Public || self.store.category() != Category::RestPoints {
            return None;
        }
        Some(SearchBarInfo {
            query: self.store.search_query().to_string(),
            placeholder: "Enter suburb or address".to_string(),
            is_focused: self.input_mode == InputMode::Search(SearchFocus::Typing),
        })
    }

    /// Keybinding hints for the current page, mode and dialog.
    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (&self.dialog, self.page, self.input_mode) {
            (Some(Dialog::ConfirmDelete { .. }), _, _) => "Enter: delete  Esc: cancel",
            (Some(_), _, _) => "Tab/Shift+Tab: next/prev field  Enter: save  Esc: cancel",
            (None, Page::Public, InputMode::Search(SearchFocus::Typing)) => {
                "ESC: exit search  Enter: results  Type to filter"
            }
            (None, Page::Public, InputMode::Search(SearchFocus::Navigating)) => {
                "ESC: exit search  /: edit query  j/k: navigate"
            }
            (None, Page::Public, InputMode::Normal) => {
                "j/k: navigate  /: search  Tab: category  A: admin  q: quit"
            }
            (None, Page::Admin, _) => {
                "j/k: navigate  n: add  e: edit  d: delete  Tab: tab  p: public  q: quit"
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

fn compute_dialog(dialog: &Dialog) -> DialogView {
    let title = dialog.title().to_string();
    match dialog {
        Dialog::ConfirmDelete { name, .. } => DialogView::Confirm {
            title,
            message: format!(
                "Are you sure you want to delete {name}? This action cannot be undone."
            ),
        },
        Dialog::Add(form) | Dialog::Edit { form, .. } => {
            let submit_label = match dialog {
                Dialog::Add(_) => "Add Rest Point",
                _ => "Save Changes",
            };
            let fields = FormField::ALL
                .into_iter()
                .map(|field| FormFieldView {
                    label: field.label().to_string(),
                    value: form.value(field).to_string(),
                    is_focused: form.focus == field,
                    is_required: field.is_required(),
                })
                .collect();
            DialogView::Form {
                title,
                fields,
                submit_label: submit_label.to_string(),
            }
        }
    }
}

/// Returns the `[start, end)` range of a window of `available` lines that
/// keeps `selected` visible.
fn visible_window(selected: usize, len: usize, available: usize) -> (usize, usize) {
    let mut start = selected.saturating_sub(available / 2);
    let end = (start + available).min(len);

    if end - start.min(end) < available && len >= available {
        start = end.saturating_sub(available);
    }
    (start.min(end), end)
}
