//! Host command boundary for the orgmenu workspace.
//!
//! An [`Executor`] applies one ex command string to the host editor and
//! returns no structured result. Everything above this crate only builds
//! command strings; everything below it is the editor's business. The
//! production implementation ([`ScriptWriter`]) streams commands into a
//! sourceable script; tests record them instead.
#![warn(missing_docs)]

use tracing::trace;

/// Result alias for host command execution.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the host command boundary.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The command string was empty or whitespace only.
    #[error("empty command")]
    Empty,
    /// The host rejected the command.
    #[error("host rejected command `{command}`: {message}")]
    Rejected {
        /// The command that was refused.
        command: String,
        /// Host-supplied reason.
        message: String,
    },
}

/// Applies one command string to the host editor.
///
/// Implementations run each call to completion before returning; there is no
/// queueing and no rollback. A failed command leaves previously executed
/// commands in effect.
pub trait Executor {
    /// Execute a single ex command.
    fn execute(&mut self, command: &str) -> Result<()>;
}

/// Executor that accumulates commands into a sourceable script.
#[derive(Debug, Default)]
pub struct ScriptWriter {
    lines: Vec<String>,
}

impl ScriptWriter {
    /// Create an empty script writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the writer and return the script, one command per line.
    pub fn finish(self) -> String {
        let mut out = self.lines.join("\n");
        if !out.is_empty() {
            out.push('\n');
        }
        out
    }
}

impl Executor for ScriptWriter {
    fn execute(&mut self, command: &str) -> Result<()> {
        if command.trim().is_empty() {
            return Err(Error::Empty);
        }
        trace!(command, "script_command");
        self.lines.push(command.to_string());
        Ok(())
    }
}

/// Executor that records commands for inspection in tests.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    commands: Vec<String>,
}

#[cfg(any(test, feature = "test-utils"))]
impl RecordingExecutor {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands executed so far, in order.
    pub fn commands(&self) -> &[String] {
        &self.commands
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl Executor for RecordingExecutor {
    fn execute(&mut self, command: &str) -> Result<()> {
        if command.trim().is_empty() {
            return Err(Error::Empty);
        }
        self.commands.push(command.to_string());
        Ok(())
    }
}
