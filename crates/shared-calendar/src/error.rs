//! Error types for shared-calendar operations.

use thiserror::Error;

/// Errors raised at calendar boundaries.
///
/// Removing an absent event and inserting an overlapping one are not
/// errors, so a single kind covers every failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// A name, instant, events list or event element was malformed.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl CalendarError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

/// Convenience alias used throughout shared-calendar.
pub type Result<T> = std::result::Result<T, CalendarError>;
