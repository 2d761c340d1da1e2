//! Parkade - an interactive parking lot simulator for the terminal.

use std::io::IsTerminal;

use tracing::error;

use parkade::cli::Cli;
use parkade::error::{ParkadeError, Result};
use parkade::{logging, repl};

fn main() {
    let cli = Cli::parse_args();

    // Keep stdout byte-exact protocol output: interactive sessions log to a
    // file, scripted and piped runs log to stderr.
    if cli.is_script() || !std::io::stdin().is_terminal() {
        logging::init_stderr_logging();
    } else {
        logging::init_file_logging();
    }

    if let Err(e) = run(&cli) {
        error!("{}: {}", e.category(), e);
        eprintln!("{}: {}", e.category(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    cli.validate().map_err(ParkadeError::config)?;

    if cli.is_script() {
        repl::run_script(cli)
    } else {
        repl::run_interactive(cli)
    }
}
