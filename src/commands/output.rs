//! Transport-agnostic command output types.
//!
//! These types represent command results in a way that is independent of the
//! presentation layer. The interactive loop and the script runner both turn
//! them into protocol lines through [`CommandOutput::render_lines`].

/// Output from a command handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Informational message (success, report text, etc.). May span several
    /// lines.
    Info(String),

    /// Error message. The protocol prints errors exactly like info text;
    /// the distinction exists for callers that want to tell them apart.
    Error(String),

    /// Structured table data for display.
    Table {
        /// Column headers.
        headers: Vec<String>,
        /// Row data (each row is a vector of cell values).
        rows: Vec<Vec<String>>,
    },

    /// Multiple outputs (for commands that produce several pieces).
    Multiple(Vec<CommandOutput>),

    /// Session control action.
    Control(ControlAction),
}

/// Control actions that affect the session loop rather than producing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    /// End the session.
    Exit,
}

impl CommandOutput {
    /// Creates an info message.
    pub fn info(msg: impl Into<String>) -> Self {
        Self::Info(msg.into())
    }

    /// Creates an error message.
    pub fn error(msg: impl Into<String>) -> Self {
        Self::Error(msg.into())
    }

    /// Creates a table output.
    pub fn table(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self::Table { headers, rows }
    }

    /// Creates a multiple output from a vector.
    pub fn multiple(outputs: Vec<CommandOutput>) -> Self {
        Self::Multiple(outputs)
    }

    /// Creates an exit control action.
    pub fn exit() -> Self {
        Self::Control(ControlAction::Exit)
    }

    /// True when this output ends the session.
    pub fn is_exit(&self) -> bool {
        matches!(self, Self::Control(ControlAction::Exit))
    }

    /// Renders the output as protocol lines, in order.
    ///
    /// Multi-line messages are split on newlines, table cells are joined
    /// with tabs, and control actions render nothing.
    pub fn render_lines(&self) -> Vec<String> {
        match self {
            Self::Info(msg) | Self::Error(msg) => msg.lines().map(String::from).collect(),
            Self::Table { headers, rows } => {
                let mut lines = vec![headers.join("\t")];
                lines.extend(rows.iter().map(|row| row.join("\t")));
                lines
            }
            Self::Multiple(outputs) => outputs
                .iter()
                .flat_map(CommandOutput::render_lines)
                .collect(),
            Self::Control(_) => Vec::new(),
        }
    }
}
