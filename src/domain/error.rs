//! Error types for the Restloop plugin.
//!
//! This module defines the centralized error type [`RestloopError`] and a type alias
//! [`Result`] used throughout the crate. All errors derive their `Error`
//! implementation through `thiserror`.

use thiserror::Error;

/// The main error type for Restloop operations.
///
/// Store mutations, form reconciliation, theme loading and configuration parsing
/// all report failures through this enum. None of them are fatal to the plugin:
/// the event handler turns them into a notice line and keeps running.
///
/// # Examples
///
/// ```
/// use restloop::domain::RestloopError;
///
/// fn require_name(name: &str) -> Result<(), RestloopError> {
///     if name.trim().is_empty() {
///         return Err(RestloopError::Validation("Name is required".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(require_name("").is_err());
/// ```
#[derive(Debug, Error)]
pub enum RestloopError {
    /// No rest point with the given id exists in the store.
    ///
    /// Returned by `update`. Deleting a missing id is not an error.
    #[error("Rest point {id} not found")]
    NotFound {
        /// The id that was looked up.
        id: u64,
    },

    /// Input was rejected before it reached the store.
    ///
    /// Covers blank required form fields and unknown category names.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The embedded sample data could not be parsed.
    #[error("Seed data error: {0}")]
    Seed(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl RestloopError {
    /// Returns `true` for errors the user can fix by editing the open dialog.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Validation(_))
    }
}

/// A specialized `Result` type for Restloop operations.
pub type Result<T> = std::result::Result<T, RestloopError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_the_id() {
        let err = RestloopError::NotFound { id: 42 };
        assert_eq!(err.to_string(), "Rest point 42 not found");
        assert!(err.is_recoverable());
    }

    #[test]
    fn io_errors_convert_with_question_mark() {
        fn read() -> Result<String> {
            Ok(std::fs::read_to_string("/definitely/not/here/restloop")?)
        }

        let err = read().unwrap_err();
        assert!(matches!(err, RestloopError::Io(_)));
        assert!(!err.is_recoverable());
    }
}
