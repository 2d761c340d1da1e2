//! Session-level handlers (help, exit).

use crate::commands::definitions::generate_help_text;
use crate::commands::output::CommandOutput;

/// Handle help.
pub fn handle_help() -> CommandOutput {
    CommandOutput::info(generate_help_text())
}

/// Handle exit.
pub fn handle_exit() -> CommandOutput {
    CommandOutput::exit()
}
