//! Error types for due-time parsing.

use thiserror::Error;

/// Errors returned while parsing `HH:MM` due-time strings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DueTimeFormatError {
    /// The value is not two ':'-separated numeric tokens.
    #[error("malformed due time '{0}', expected HH:MM")]
    Malformed(String),

    /// The hour token is outside 0-23.
    #[error("due-time hour {0} out of range, expected 0-23")]
    HourOutOfRange(u32),

    /// The minute token is outside 0-59.
    #[error("due-time minute {0} out of range, expected 0-59")]
    MinuteOutOfRange(u32),
}
