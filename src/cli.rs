//! Command-line argument parsing for Parkade.
//!
//! Uses clap to parse launch flags. Everything after launch happens through
//! the line protocol on stdin/stdout; these flags only select the mode and
//! the optional pre-created lot.

use clap::Parser;
use std::path::PathBuf;

/// Output format for script mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text transcript, exactly as an interactive session prints it.
    #[default]
    Text,
    /// JSON object with the transcript and run metadata.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid output format: {s}. Expected: text or json")),
        }
    }
}

/// An interactive parking lot simulator for the terminal.
#[derive(Parser, Debug)]
#[command(name = "parkade")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Create the lot at startup with this many slots
    #[arg(short = 'n', long, value_name = "SLOTS")]
    pub capacity: Option<usize>,

    // === Script mode options ===
    /// Run commands from a script file instead of interactively (use "-" for stdin)
    #[arg(long, value_name = "PATH")]
    pub script: Option<String>,

    /// Output format for script mode
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    pub output: String,

    /// Write the script transcript to a file instead of stdout
    #[arg(long, value_name = "PATH")]
    pub output_file: Option<PathBuf>,

    /// Never print the interactive prompt, even on a terminal
    #[arg(long)]
    pub no_prompt: bool,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Returns true if script mode is enabled.
    pub fn is_script(&self) -> bool {
        self.script.is_some()
    }

    /// Parses the output format from the --output argument.
    pub fn parse_output_format(&self) -> std::result::Result<OutputFormat, String> {
        self.output.parse()
    }

    /// Validates flag combinations.
    /// Returns an error message if validation fails.
    pub fn validate(&self) -> std::result::Result<(), String> {
        let format = self.parse_output_format()?;

        if !self.is_script() {
            if format != OutputFormat::Text {
                return Err("--output requires --script".to_string());
            }
            if self.output_file.is_some() {
                return Err("--output-file requires --script".to_string());
            }
        }

        Ok(())
    }
}
