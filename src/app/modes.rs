//! Page, input and dialog state machines.
//!
//! # State Machine
//!
//! The plugin shows one of two pages:
//! - **Public**: Searchable, postcode-grouped listing
//! - **Admin**: Rest point table with add/edit/delete dialogs
//!
//! On the public page input is either in **Normal** mode or in **Search** mode
//! with typing or result navigation focus. On the admin page an open
//! [`Dialog`] captures all input until it is submitted or cancelled.
//!
//! # Example
//!
//! ```rust
//! use restloop::app::modes::{InputMode, Page, SearchFocus, TimerSlot};
//!
//! let input_mode = InputMode::Search(SearchFocus::Typing);
//! let mut timer = TimerSlot::default();
//! assert!(timer.arm());
//! assert!(timer.fire());
//! assert_eq!(Page::default(), Page::Public);
//! ```

use crate::form::RestPointForm;

/// Focus state within search mode.
///
/// Determines whether search input is being typed or search results are being
/// navigated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// Typing into the search bar. Characters extend the query.
    Typing,

    /// Moving through the filtered results. `/` returns to typing.
    Navigating,
}

/// Current input handling mode on the public page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Navigation and command keys.
    #[default]
    Normal,

    /// Active search with focus state.
    Search(SearchFocus),
}

/// Which page is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// Listing for drivers looking for a stop.
    #[default]
    Public,
    /// Management dashboard.
    Admin,
}

/// A modal dialog on the admin page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    /// Blank form for a new rest point.
    Add(RestPointForm),
    /// Form pre-filled from the rest point with `id`.
    Edit { id: u64, form: RestPointForm },
    /// Confirmation before deleting the rest point with `id`.
    ConfirmDelete { id: u64, name: String },
}

impl Dialog {
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Add(_) => "Add Rest Point",
            Self::Edit { .. } => "Edit Rest Point",
            Self::ConfirmDelete { .. } => "Confirm Deletion",
        }
    }

    /// The form being edited, if this dialog has one.
    pub fn form_mut(&mut self) -> Option<&mut RestPointForm> {
        match self {
            Self::Add(form) | Self::Edit { form, .. } => Some(form),
            Self::ConfirmDelete { .. } => None,
        }
    }
}

/// Lifecycle of the fire-once loading timer.
///
/// ```text
/// Idle ──arm──▶ Armed ──fire──▶ Fired
///                 │
///                 └──cancel──▶ Cancelled
/// ```
///
/// A timer event only has an effect while the slot is `Armed`, so a timer that
/// fires after cancellation, or a second timer event, is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerSlot {
    #[default]
    Idle,
    Armed,
    Fired,
    Cancelled,
}

impl TimerSlot {
    /// Moves `Idle` to `Armed`. Returns `false` from any other state.
    pub fn arm(&mut self) -> bool {
        self.transition(Self::Idle, Self::Armed)
    }

    /// Moves `Armed` to `Fired`. Returns `false` from any other state.
    pub fn fire(&mut self) -> bool {
        self.transition(Self::Armed, Self::Fired)
    }

    /// Moves `Armed` to `Cancelled`. Returns `false` from any other state.
    pub fn cancel(&mut self) -> bool {
        self.transition(Self::Armed, Self::Cancelled)
    }

    fn transition(&mut self, from: Self, to: Self) -> bool {
        if *self == from {
            *self = to;
            true
        } else {
            false
        }
    }
}
