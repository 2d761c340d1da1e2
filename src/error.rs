//! Error types for Parkade.
//!
//! Defines the application-level error enum. Protocol-level problems (bad
//! commands, domain refusals) never surface here; those render as session
//! output lines. This type covers the launch and I/O faults that end the
//! process with a nonzero exit code.

use thiserror::Error;

/// Main error type for Parkade operations.
#[derive(Error, Debug)]
pub enum ParkadeError {
    /// Launch configuration errors (conflicting flags, invalid values, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal or file I/O failures.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal application errors (unexpected states, bugs, etc.)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ParkadeError {
    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates an internal error with the given message.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config(_) => "Configuration Error",
            Self::Io(_) => "I/O Error",
            Self::Internal(_) => "Internal Error",
        }
    }
}

/// Result type alias using ParkadeError.
pub type Result<T> = std::result::Result<T, ParkadeError>;
