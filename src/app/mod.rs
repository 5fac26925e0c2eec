//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (`main.rs`) and the store. Key presses and
//! timer ticks arrive as [`Event`]s, [`handle_event`] applies them to
//! [`AppState`], and any side effect the runtime must perform comes back as an
//! [`Action`].
//!
//! ```text
//! Key / Timer → Event → handle_event → Store + AppState → Actions → Zellij
//!                                            ↓
//!                                     compute_viewmodel → render
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transitions
//! - [`modes`]: Page, input, dialog and timer state machines
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{Dialog, InputMode, Page, SearchFocus, TimerSlot};
pub use state::AppState;
