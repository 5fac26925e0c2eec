//! Side effects returned by the event handler for the plugin runtime to run.
//!
//! The handler itself never touches Zellij APIs. Anything that has to reach
//! the host (hiding the pane, scheduling a timer) comes back as an [`Action`]
//! and is executed in order by `main.rs`.
//!
//! # Example
//!
//! ```rust
//! use restloop::app::Action;
//!
//! let actions = vec![Action::ScheduleLoadingTimer { seconds: 1.5 }];
//! assert_eq!(actions.len(), 1);
//! ```

/// Commands for the plugin runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when the user explicitly requests to exit (pressing `q`).
    CloseFocus,

    /// Schedules the fire-once timer that ends the initial loading state.
    ///
    /// The runtime answers with a timer event after `seconds` have elapsed.
    ScheduleLoadingTimer {
        /// Delay before the timer fires.
        seconds: f64,
    },
}
