//! Zellij plugin entry point.
//!
//! Thin integration layer between the Restloop library and Zellij: it parses
//! configuration, turns Zellij events into library [`Event`]s and runs the
//! resulting [`Action`]s.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: parse config, initialize tracing, build `AppState`
//! 2. **Subscribe**: `Key` and `Timer`
//! 3. **Start**: dispatch `Event::Started`, which arms the loading timer
//! 4. **Update**: map keys and timer ticks, delegate to `handle_event`
//! 5. **Render**: call the library renderer
//!
//! # Keybindings
//!
//! Public page:
//! - `j`/`Down`, `k`/`Up`: move selection
//! - `/`: search (type to filter, `Enter` to focus results, `Esc` to clear)
//! - `Tab`: switch category
//! - `A`: admin page
//! - `q`: close
//!
//! Admin page:
//! - `j`/`Down`, `k`/`Up`: move selection
//! - `n`: add, `e`/`Enter`: edit, `d`: delete
//! - `Tab`: switch tab
//! - `p`/`Esc`: public page
//! - `q`: close
//!
//! Dialogs:
//! - type to edit the focused field
//! - `Tab`/`Down` next field, `Shift+Tab`/`Up` previous field
//! - `Enter` submit or confirm, `Esc` cancel

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use restloop::{
    handle_event, Action, AppState, Config, Event, InputMode, Page, RestPointStore, SearchFocus,
    Theme,
};

register_plugin!(State);

/// Plugin state wrapper.
struct State {
    app: AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: AppState::new(
                RestPointStore::empty(),
                Theme::default(),
                restloop::DEFAULT_LOADING_DELAY,
            ),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        restloop::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(config = ?config, "parsed configuration");
        match restloop::initialize(&config) {
            Ok(app) => self.app = app,
            Err(e) => tracing::error!(error = %e, "failed to initialize, starting empty"),
        }

        subscribe(&[EventType::Key, EventType::Timer]);

        self.dispatch(&Event::Started);
        tracing::debug!("plugin load complete");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let span = tracing::debug_span!("plugin_update_event", otel.name = %span_name, event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Timer(elapsed) => {
                tracing::debug!(elapsed, "timer fired");
                Event::LoadingElapsed
            }
            _ => return false,
        };

        self.dispatch(&our_event)
    }

    fn render(&mut self, rows: usize, cols: usize) {
        restloop::ui::render(&self.app, rows, cols);
    }
}

/// Marks the loading timer cancelled on unload; a late `Timer` is already
/// ignored by `LoadingElapsed` unless the slot is still armed.
impl Drop for State {
    fn drop(&mut self) {
        if self.app.timer.cancel() {
            tracing::debug!("loading timer cancelled on unload");
        }
    }
}

impl State {
    /// Runs an event through the library and executes its actions.
    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled"
                );
                for action in &actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::error!(error = %e, "error handling event");
                false
            }
        }
    }

    fn execute_action(action: &Action) {
        tracing::debug!(action = ?action, "executing action");
        match action {
            Action::CloseFocus => hide_self(),
            Action::ScheduleLoadingTimer { seconds } => set_timeout(*seconds),
        }
    }

    fn event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            _ => "Other".to_string(),
        }
    }

    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if self.app.dialog.is_some() {
            return Self::map_dialog_key(key);
        }
        match self.app.page {
            Page::Public => self.map_public_key(key),
            Page::Admin => Self::map_admin_key(key),
        }
    }

    fn map_dialog_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Esc => Event::CancelDialog,
            BareKey::Enter => Event::Submit,
            BareKey::Tab if key.has_modifiers(&[KeyModifier::Shift]) => Event::PrevField,
            BareKey::Tab | BareKey::Down => Event::NextField,
            BareKey::Up => Event::PrevField,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    fn map_public_key(&self, key: &KeyWithModifier) -> Option<Event> {
        Some(match (self.app.input_mode, key.bare_key) {
            (InputMode::Search(_), BareKey::Esc) => Event::ExitSearch,
            (InputMode::Search(SearchFocus::Typing), BareKey::Enter) => Event::FocusResults,
            (InputMode::Search(SearchFocus::Typing), BareKey::Char(c)) => Event::Char(c),
            (InputMode::Search(SearchFocus::Navigating), BareKey::Char('/')) => {
                Event::FocusSearchBar
            }
            (InputMode::Search(_), BareKey::Backspace) => Event::Backspace,

            (_, BareKey::Down | BareKey::Char('j')) => Event::KeyDown,
            (_, BareKey::Up | BareKey::Char('k')) => Event::KeyUp,
            (_, BareKey::Tab) => Event::NextCategory,

            (InputMode::Normal, BareKey::Char('/')) => Event::SearchMode,
            (InputMode::Normal, BareKey::Char('A')) => Event::ShowAdmin,
            (InputMode::Normal, BareKey::Char('q')) => Event::CloseFocus,
            (InputMode::Normal, BareKey::Esc) => Event::Escape,
            (InputMode::Search(SearchFocus::Navigating), BareKey::Char(c)) => Event::Char(c),
            _ => return None,
        })
    }

    fn map_admin_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Char('n') => Event::OpenAddDialog,
            BareKey::Char('e') | BareKey::Enter => Event::OpenEditDialog,
            BareKey::Char('d') => Event::OpenDeleteDialog,
            BareKey::Tab => Event::NextCategory,
            BareKey::Char('p') | BareKey::Esc => Event::ShowPublic,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }
}
