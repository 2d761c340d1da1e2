//! Command handlers.
//!
//! Each handler is a function that takes the session's lot plus parsed
//! arguments and returns a [`CommandOutput`](crate::commands::CommandOutput).
//! Handlers that need a created lot guard for it themselves, so every entry
//! point reports the same not-created message.

pub mod lot;
pub mod reports;
pub mod system;

/// Printed by every lot-touching handler invoked before `create_parking_lot`.
pub(crate) const PARKING_LOT_NOT_CREATED: &str = "Parking lot not created yet.";
