//! Command parsing and dispatch.
//!
//! This module provides a clean separation between command parsing and
//! execution, enabling unit testing of command behavior without a terminal.

pub mod definitions;
pub mod handlers;
pub mod output;
pub mod router;

pub use definitions::{CommandCategory, CommandDef, COMMANDS};
pub use output::{CommandOutput, ControlAction};
pub use router::{Command, CommandRouter, UsageError};
