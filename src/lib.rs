//! Parkade - an interactive parking lot simulator for the terminal.
//!
//! A fixed pool of numbered slots with first-fit assignment, freeing, and
//! read-only reports, driven by a line-based command protocol. This library
//! exposes the core modules for use in integration tests.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod lot;
pub mod repl;
pub mod session;
