//! Event handling and state transition logic.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime (mapped key presses, timers)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations go through `AppState` and its store
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`
//! - **Search**: `SearchMode`, `FocusSearchBar`, `FocusResults`, `ExitSearch`
//! - **Input**: `Char`, `Backspace`, `Escape`
//! - **Pages and tabs**: `ShowPublic`, `ShowAdmin`, `NextCategory`
//! - **Admin dialogs**: `OpenAddDialog`, `OpenEditDialog`, `OpenDeleteDialog`,
//!   `NextField`, `PrevField`, `Submit`, `CancelDialog`
//! - **Lifecycle**: `Started`, `LoadingElapsed`, `CloseFocus`
//!
//! # Example
//!
//! ```rust
//! use restloop::app::{handle_event, Action, AppState, Event};
//! use restloop::store::RestPointStore;
//! use restloop::ui::Theme;
//!
//! let mut state = AppState::new(RestPointStore::seeded()?, Theme::default(), 1.5);
//! let (_, actions) = handle_event(&mut state, &Event::Started)?;
//! assert_eq!(actions, vec![Action::ScheduleLoadingTimer { seconds: 1.5 }]);
//! # Ok::<(), restloop::RestloopError>(())
//! ```

use super::modes::{Dialog, InputMode, Page, SearchFocus};
use crate::app::{Action, AppState};
use crate::domain::{Category, Result};
use crate::form::RestPointForm;

/// Events triggered by user input or the plugin lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Moves selection cursor down by one position (wraps to top).
    KeyDown,
    /// Moves selection cursor up by one position (wraps to bottom).
    KeyUp,
    /// Hides the plugin pane.
    CloseFocus,

    /// Enters search mode with typing focus.
    SearchMode,
    /// Focuses the search input field (from navigating mode).
    FocusSearchBar,
    /// Focuses the search results list (from typing mode).
    FocusResults,
    /// Exits search mode and clears the query.
    ExitSearch,
    /// Appends a character to the search query or the focused form field.
    Char(char),
    /// Removes the last character from the search query or the focused form field.
    Backspace,
    /// Clears search query and returns to normal mode.
    Escape,

    /// Cycles the public category or the admin tab.
    NextCategory,
    /// Switches to the public listing.
    ShowPublic,
    /// Switches to the admin dashboard.
    ShowAdmin,

    /// Opens a blank add form.
    OpenAddDialog,
    /// Opens an edit form for the selected row.
    OpenEditDialog,
    /// Asks for confirmation before deleting the selected row.
    OpenDeleteDialog,
    /// Moves form focus to the next field.
    NextField,
    /// Moves form focus to the previous field.
    PrevField,
    /// Submits the open form or confirms the deletion.
    Submit,
    /// Closes the open dialog without changes.
    CancelDialog,

    /// Plugin finished loading; arms the loading timer.
    Started,
    /// The loading timer fired.
    LoadingElapsed,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// The boolean is `true` when the UI needs a re-render.
///
/// # Errors
///
/// Recoverable errors (a blank required field, a vanished record) are turned
/// into a notice and keep the dialog open. Any other error is returned.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Started => {
            if !state.timer.arm() {
                return Ok((false, vec![]));
            }
            if state.loading_delay <= 0.0 {
                state.timer.fire();
                state.store.finish_loading();
                return Ok((true, vec![]));
            }
            tracing::debug!(seconds = state.loading_delay, "loading timer armed");
            Ok((
                true,
                vec![Action::ScheduleLoadingTimer {
                    seconds: state.loading_delay,
                }],
            ))
        }
        Event::LoadingElapsed => {
            if !state.timer.fire() {
                tracing::debug!(slot = ?state.timer, "ignoring timer outside armed slot");
                return Ok((false, vec![]));
            }
            let changed = state.store.finish_loading();
            state.clamp_selection();
            tracing::debug!(changed, "loading finished");
            Ok((changed, vec![]))
        }
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::SearchMode => {
            if state.page != Page::Public || state.store.category() != Category::RestPoints {
                return Ok((false, vec![]));
            }
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            state.store.set_search_query(String::new());
            state.selected_index = 0;
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if state.store.search_query().trim().is_empty() {
                state.input_mode = InputMode::Normal;
                state.store.set_search_query(String::new());
                state.clamp_selection();
                return Ok((true, vec![]));
            }
            state.input_mode = InputMode::Search(SearchFocus::Navigating);
            Ok((true, vec![]))
        }
        Event::ExitSearch | Event::Escape => {
            tracing::debug!(query = %state.store.search_query(), "exiting search mode");
            state.input_mode = InputMode::Normal;
            state.store.set_search_query(String::new());
            state.clamp_selection();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if let Some(form) = state.dialog.as_mut().and_then(Dialog::form_mut) {
                form.push_char(*c);
                return Ok((true, vec![]));
            }
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }

            let mut query = state.store.search_query().to_string();
            query.push(*c);
            tracing::trace!(query = %query, char = %c, "search query updated");
            state.store.set_search_query(query);
            state.selected_index = 0;
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if let Some(form) = state.dialog.as_mut().and_then(Dialog::form_mut) {
                form.backspace();
                return Ok((true, vec![]));
            }
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }

            let mut query = state.store.search_query().to_string();
            query.pop();
            state.store.set_search_query(query);
            state.selected_index = 0;
            Ok((true, vec![]))
        }
        Event::NextCategory => {
            match state.page {
                Page::Public => {
                    let next = state.store.category().next();
                    state.store.set_category(next);
                    state.input_mode = InputMode::Normal;
                    tracing::debug!(category = %next, "category switched");
                }
                Page::Admin => {
                    state.admin_tab = state.admin_tab.next();
                    tracing::debug!(tab = %state.admin_tab, "admin tab switched");
                }
            }
            state.selected_index = 0;
            Ok((true, vec![]))
        }
        Event::ShowPublic => {
            state.page = Page::Public;
            state.input_mode = InputMode::Normal;
            state.dialog = None;
            state.notice = None;
            state.selected_index = 0;
            Ok((true, vec![]))
        }
        Event::ShowAdmin => {
            state.page = Page::Admin;
            state.input_mode = InputMode::Normal;
            state.notice = None;
            state.selected_index = 0;
            Ok((true, vec![]))
        }
        Event::OpenAddDialog => {
            if !state.shows_admin_table() {
                return Ok((false, vec![]));
            }
            state.dialog = Some(Dialog::Add(RestPointForm::default()));
            state.notice = None;
            Ok((true, vec![]))
        }
        Event::OpenEditDialog => {
            let Some(point) = admin_selection(state) else {
                tracing::debug!("no rest point selected to edit");
                return Ok((false, vec![]));
            };
            state.dialog = Some(Dialog::Edit {
                id: point.id,
                form: RestPointForm::from_rest_point(&point),
            });
            state.notice = None;
            Ok((true, vec![]))
        }
        Event::OpenDeleteDialog => {
            let Some(point) = admin_selection(state) else {
                tracing::debug!("no rest point selected to delete");
                return Ok((false, vec![]));
            };
            state.dialog = Some(Dialog::ConfirmDelete {
                id: point.id,
                name: point.name,
            });
            state.notice = None;
            Ok((true, vec![]))
        }
        Event::NextField | Event::PrevField => {
            let Some(form) = state.dialog.as_mut().and_then(Dialog::form_mut) else {
                return Ok((false, vec![]));
            };
            if *event == Event::NextField {
                form.focus_next();
            } else {
                form.focus_prev();
            }
            Ok((true, vec![]))
        }
        Event::Submit => {
            let Some(dialog) = state.dialog.take() else {
                return Ok((false, vec![]));
            };
            submit_dialog(state, dialog)?;
            Ok((true, vec![]))
        }
        Event::CancelDialog => {
            let had_dialog = state.dialog.take().is_some();
            state.notice = None;
            Ok((had_dialog, vec![]))
        }
    }
}

/// The rest point under the admin cursor, cloned out of the store.
fn admin_selection(state: &AppState) -> Option<crate::domain::RestPoint> {
    if !state.shows_admin_table() {
        return None;
    }
    state
        .selected_id()
        .and_then(|id| state.store.get(id))
        .cloned()
}

/// Applies a submitted dialog to the store.
///
/// On a recoverable failure the dialog is put back and the error becomes the
/// notice.
fn submit_dialog(state: &mut AppState, dialog: Dialog) -> Result<()> {
    let outcome = match &dialog {
        Dialog::Add(form) => form.to_new_rest_point().map(|input| {
            state.store.add(input);
        }),
        Dialog::Edit { id, form } => form
            .to_patch()
            .and_then(|patch| state.store.update(*id, patch))
            .map(|_| ()),
        Dialog::ConfirmDelete { id, .. } => {
            state.store.delete(*id);
            Ok(())
        }
    };

    match outcome {
        Ok(()) => {
            state.notice = None;
            state.clamp_selection();
            Ok(())
        }
        Err(e) if e.is_recoverable() => {
            tracing::warn!(error = %e, dialog = dialog.title(), "dialog submit rejected");
            state.notice = Some(e.to_string());
            state.dialog = Some(dialog);
            Ok(())
        }
        Err(e) => {
            state.dialog = Some(dialog);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::TimerSlot;
    use crate::store::RestPointStore;
    use crate::ui::Theme;

    fn state() -> AppState {
        AppState::new(RestPointStore::seeded().unwrap(), Theme::default(), 1.5)
    }

    fn loaded_state() -> AppState {
        let mut state = state();
        handle_event(&mut state, &Event::Started).unwrap();
        handle_event(&mut state, &Event::LoadingElapsed).unwrap();
        state
    }

    fn admin_state() -> AppState {
        let mut state = loaded_state();
        handle_event(&mut state, &Event::ShowAdmin).unwrap();
        state
    }

    fn send(state: &mut AppState, events: &[Event]) {
        for event in events {
            handle_event(state, event).unwrap();
        }
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_event(state, &Event::Char(c)).unwrap();
        }
    }

    #[test]
    fn loading_is_true_until_timer_fires_then_stays_false() {
        let mut state = state();
        assert!(state.store.loading());

        let (_, actions) = handle_event(&mut state, &Event::Started).unwrap();
        assert_eq!(actions, vec![Action::ScheduleLoadingTimer { seconds: 1.5 }]);
        assert!(state.store.loading());

        let (render, _) = handle_event(&mut state, &Event::LoadingElapsed).unwrap();
        assert!(render);
        assert!(!state.store.loading());

        let (render, _) = handle_event(&mut state, &Event::LoadingElapsed).unwrap();
        assert!(!render);
        assert!(!state.store.loading());
    }

    #[test]
    fn second_start_does_not_reschedule() {
        let mut state = state();
        handle_event(&mut state, &Event::Started).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::Started).unwrap();
        assert!(actions.is_empty());
    }

    #[test]
    fn cancelled_timer_is_ignored() {
        let mut state = state();
        handle_event(&mut state, &Event::Started).unwrap();
        state.timer.cancel();

        handle_event(&mut state, &Event::LoadingElapsed).unwrap();

        assert_eq!(state.timer, TimerSlot::Cancelled);
        assert!(state.store.loading());
    }

    #[test]
    fn zero_delay_finishes_loading_immediately() {
        let mut state = AppState::new(RestPointStore::seeded().unwrap(), Theme::default(), 0.0);
        let (_, actions) = handle_event(&mut state, &Event::Started).unwrap();
        assert!(actions.is_empty());
        assert!(!state.store.loading());
    }

    #[test]
    fn typing_filters_and_escape_clears() {
        let mut state = loaded_state();
        handle_event(&mut state, &Event::SearchMode).unwrap();
        type_text(&mut state, "2000");

        assert_eq!(state.store.search_query(), "2000");
        assert_eq!(state.store.filtered().len(), 2);

        handle_event(&mut state, &Event::Escape).unwrap();
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.store.search_query(), "");
        assert_eq!(state.store.filtered().len(), 8);
    }

    #[test]
    fn focus_results_with_query_switches_to_navigating() {
        let mut state = loaded_state();
        send(&mut state, &[Event::SearchMode, Event::Char('v')]);
        send(&mut state, &[Event::FocusResults]);
        assert_eq!(state.input_mode, InputMode::Search(SearchFocus::Navigating));

        send(&mut state, &[Event::FocusSearchBar, Event::Backspace, Event::FocusResults]);
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn chars_outside_search_are_ignored() {
        let mut state = loaded_state();
        let (render, _) = handle_event(&mut state, &Event::Char('x')).unwrap();
        assert!(!render);
        assert_eq!(state.store.search_query(), "");
    }

    #[test]
    fn close_focus_emits_action() {
        let mut state = loaded_state();
        let (_, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert_eq!(actions, vec![Action::CloseFocus]);
    }

    #[test]
    fn next_category_cycles_public_and_admin_independently() {
        let mut state = loaded_state();
        handle_event(&mut state, &Event::NextCategory).unwrap();
        assert_eq!(state.store.category(), Category::Movies);

        send(&mut state, &[Event::ShowAdmin, Event::NextCategory]);
        assert_eq!(state.admin_tab, Category::Movies);
        assert_eq!(state.store.category(), Category::Movies);
    }

    #[test]
    fn add_dialog_creates_record_with_parsed_amenities() {
        let mut state = admin_state();
        handle_event(&mut state, &Event::OpenAddDialog).unwrap();

        for (i, text) in ["Harbour Stop", "1 Wharf Road", "2060", "24/7", "", "Restrooms, Food"]
            .into_iter()
            .enumerate()
        {
            if i > 0 {
                handle_event(&mut state, &Event::NextField).unwrap();
            }
            type_text(&mut state, text);
        }
        handle_event(&mut state, &Event::Submit).unwrap();

        assert!(state.dialog.is_none());
        let added = state.store.get(9).unwrap();
        assert_eq!(added.name, "Harbour Stop");
        assert_eq!(added.phone, None);
        assert_eq!(added.amenities, vec!["Restrooms", "Food"]);
    }

    #[test]
    fn invalid_add_keeps_dialog_open_with_notice() {
        let mut state = admin_state();
        send(&mut state, &[Event::OpenAddDialog, Event::Submit]);

        assert!(matches!(state.dialog, Some(Dialog::Add(_))));
        assert_eq!(
            state.notice.as_deref(),
            Some("Validation error: Name is required")
        );
        assert_eq!(state.store.len(), 8);
    }

    #[test]
    fn edit_clearing_phone_makes_it_absent() {
        let mut state = admin_state();
        handle_event(&mut state, &Event::OpenEditDialog).unwrap();

        let Some(Dialog::Edit { id, form }) = &state.dialog else {
            panic!("expected edit dialog");
        };
        assert_eq!(*id, 1);
        let phone_len = form.phone.chars().count();

        send(&mut state, &[Event::PrevField, Event::PrevField]);
        for _ in 0..phone_len {
            handle_event(&mut state, &Event::Backspace).unwrap();
        }
        handle_event(&mut state, &Event::Submit).unwrap();

        assert!(state.dialog.is_none());
        assert_eq!(state.store.get(1).unwrap().phone, None);
    }

    #[test]
    fn edit_of_vanished_record_keeps_dialog_open() {
        let mut state = admin_state();
        handle_event(&mut state, &Event::OpenEditDialog).unwrap();
        state.store.delete(1);

        handle_event(&mut state, &Event::Submit).unwrap();

        assert!(matches!(state.dialog, Some(Dialog::Edit { id: 1, .. })));
        assert_eq!(state.notice.as_deref(), Some("Rest point 1 not found"));
    }

    #[test]
    fn delete_flow_removes_selected_record() {
        let mut state = admin_state();
        send(&mut state, &[Event::KeyUp, Event::OpenDeleteDialog]);

        assert_eq!(
            state.dialog,
            Some(Dialog::ConfirmDelete {
                id: 8,
                name: "Desert Oasis".to_string()
            })
        );

        handle_event(&mut state, &Event::Submit).unwrap();
        assert!(state.store.get(8).is_none());
        assert_eq!(state.selected_index, 6);
    }

    #[test]
    fn cancel_leaves_store_untouched() {
        let mut state = admin_state();
        send(&mut state, &[Event::OpenDeleteDialog, Event::CancelDialog]);
        assert!(state.dialog.is_none());
        assert_eq!(state.store.len(), 8);
    }

    #[test]
    fn dialogs_require_admin_rest_points_tab() {
        let mut state = loaded_state();
        let (render, _) = handle_event(&mut state, &Event::OpenAddDialog).unwrap();
        assert!(!render);
        assert!(state.dialog.is_none());

        send(&mut state, &[Event::ShowAdmin, Event::NextCategory, Event::OpenEditDialog]);
        assert!(state.dialog.is_none());
    }
}
