//! Session loops: the interactive prompt and the script runner.
//!
//! Both feed lines to a [`Session`] and render [`CommandOutput`] values as
//! protocol lines on stdout. The script runner additionally captures the
//! whole transcript, so automated runs can be checked in one piece or
//! emitted as JSON with run metadata.

use std::fs;
use std::io::{self, BufRead, IsTerminal, Read, Write};
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::info;

use crate::cli::{Cli, OutputFormat};
use crate::commands::CommandOutput;
use crate::error::{ParkadeError, Result};
use crate::session::Session;

/// Prompt written before each interactive read.
const PROMPT: &str = "$ ";

/// Runs an interactive session over stdin/stdout until `exit` or
/// end-of-input.
pub fn run_interactive(cli: &Cli) -> Result<()> {
    let stdin = io::stdin();
    let show_prompt = !cli.no_prompt && stdin.is_terminal();

    let mut session = Session::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in startup_lines(&mut session, cli.capacity)? {
        writeln!(out, "{line}")?;
    }

    let mut input = stdin.lock();
    let mut line = String::new();
    loop {
        if show_prompt {
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            info!("end of input, closing session");
            break;
        }

        // Strip only the line ending; interior and trailing spaces are
        // significant to the protocol.
        let output = session.execute(line.trim_end_matches(['\r', '\n']));
        for rendered in output.render_lines() {
            writeln!(out, "{rendered}")?;
        }
        if output.is_exit() {
            break;
        }
    }

    Ok(())
}

/// Result of a script run.
#[derive(Debug)]
pub struct ScriptResult {
    /// Every protocol line the session produced, in order.
    pub lines: Vec<String>,
    /// Number of command lines executed, including rejected ones.
    pub commands_executed: usize,
    /// Total execution duration.
    pub duration: Duration,
    /// Whether the script ended via `exit` rather than running out of lines.
    pub exited: bool,
}

/// Runs a list of command lines against a session, capturing output.
pub struct ScriptRunner {
    session: Session,
    commands: Vec<String>,
}

impl ScriptRunner {
    /// Creates a runner around a session, which may hold a pre-created lot.
    pub fn new(session: Session) -> Self {
        Self {
            session,
            commands: Vec::new(),
        }
    }

    /// Loads command lines from a string, one command per line. Blank lines
    /// are kept and executed like any other input.
    pub fn load_commands(&mut self, input: &str) {
        self.commands = input.lines().map(String::from).collect();
    }

    /// Loads command lines from a script file; `-` reads stdin to the end.
    pub fn load_script(&mut self, path: &str) -> Result<()> {
        let content = if path == "-" {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| ParkadeError::internal(format!("Failed to read stdin: {e}")))?;
            buffer
        } else {
            fs::read_to_string(path)
                .map_err(|e| ParkadeError::internal(format!("Failed to read script file: {e}")))?
        };

        self.load_commands(&content);
        Ok(())
    }

    /// Executes the loaded commands in order and returns the transcript.
    /// Stops early when a command ends the session.
    pub fn run(mut self) -> ScriptResult {
        let start_time = Instant::now();
        let commands = std::mem::take(&mut self.commands);

        let mut lines = Vec::new();
        let mut commands_executed = 0;
        let mut exited = false;

        for command in commands {
            let output = self.session.execute(&command);
            commands_executed += 1;
            lines.extend(output.render_lines());

            if output.is_exit() {
                exited = true;
                break;
            }
        }

        ScriptResult {
            lines,
            commands_executed,
            duration: start_time.elapsed(),
            exited,
        }
    }
}

/// JSON output structure.
#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    lines: &'a [String],
    commands_executed: usize,
    duration_ms: u64,
    exited: bool,
}

/// Formats script execution results.
pub struct ScriptOutput {
    format: OutputFormat,
}

impl ScriptOutput {
    /// Creates a new output formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats the result according to the configured format.
    pub fn format(&self, result: &ScriptResult) -> String {
        match self.format {
            OutputFormat::Text => Self::format_text(result),
            OutputFormat::Json => Self::format_json(result),
        }
    }

    /// Formats as plain text: the transcript exactly as an interactive
    /// session would print it, without prompts.
    fn format_text(result: &ScriptResult) -> String {
        if result.lines.is_empty() {
            String::new()
        } else {
            format!("{}\n", result.lines.join("\n"))
        }
    }

    /// Formats as JSON with run metadata.
    fn format_json(result: &ScriptResult) -> String {
        let json_output = JsonOutput {
            lines: &result.lines,
            commands_executed: result.commands_executed,
            duration_ms: result.duration.as_millis() as u64,
            exited: result.exited,
        };

        serde_json::to_string_pretty(&json_output)
            .map(|json| format!("{json}\n"))
            .unwrap_or_else(|e| format!("{{\"error\": \"Failed to serialize: {}\"}}\n", e))
    }
}

/// Runs script mode from CLI arguments.
pub fn run_script(cli: &Cli) -> Result<()> {
    let Some(script_path) = cli.script.as_deref() else {
        return Err(ParkadeError::internal("run_script requires --script"));
    };
    let format = cli.parse_output_format().map_err(ParkadeError::config)?;

    let mut session = Session::new();
    let mut transcript = startup_lines(&mut session, cli.capacity)?;

    let mut runner = ScriptRunner::new(session);
    runner.load_script(script_path)?;
    let mut result = runner.run();

    if !transcript.is_empty() {
        transcript.extend(result.lines);
        result.lines = transcript;
    }

    let output_str = ScriptOutput::new(format).format(&result);
    if let Some(ref path) = cli.output_file {
        fs::write(path, &output_str)
            .map_err(|e| ParkadeError::internal(format!("Failed to write output file: {e}")))?;
    } else {
        print!("{output_str}");
        io::stdout().flush()?;
    }

    info!(
        commands = result.commands_executed,
        exited = result.exited,
        "script run complete"
    );
    Ok(())
}

/// Pre-creates the lot when a capacity flag was given, returning the lines
/// the creation printed. A zero capacity is a launch error rather than a
/// session message.
fn startup_lines(session: &mut Session, capacity: Option<usize>) -> Result<Vec<String>> {
    let Some(capacity) = capacity else {
        return Ok(Vec::new());
    };

    let output = session.execute(&format!("create_parking_lot {capacity}"));
    if let CommandOutput::Error(message) = &output {
        return Err(ParkadeError::config(message.clone()));
    }
    Ok(output.render_lines())
}
