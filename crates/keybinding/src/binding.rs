//! Key mapping descriptors.

use tracing::debug;
use vim_cmd::Executor;

use crate::Mode;

/// A key sequence bound to an ex command in a given applicability mode.
///
/// The key sequence may contain host placeholder tokens such as `<Tab>` or
/// `<localleader>`; they are passed through to the mapping command verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybinding {
    key: String,
    action: String,
    mode: Mode,
    /// Recursive mapping (`map`) instead of `noremap`.
    remap: bool,
    /// Scope the mapping to the current buffer.
    buffer_local: bool,
}

impl Keybinding {
    /// A non-recursive, global mapping active in Normal mode.
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
            mode: Mode::Normal,
            remap: false,
            buffer_local: false,
        }
    }

    /// Set the applicability mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Allow the right-hand side to be remapped (`map` instead of `noremap`).
    pub fn remappable(mut self) -> Self {
        self.remap = true;
        self
    }

    /// Restrict the mapping to the current buffer.
    pub fn buffer_local(mut self) -> Self {
        self.buffer_local = true;
        self
    }

    /// The key sequence, as written in the mapping command.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The ex command the mapping runs.
    pub fn action(&self) -> &str {
        &self.action
    }

    /// The applicability mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Register the mapping with the host.
    pub fn create(&self, vim: &mut dyn Executor) -> vim_cmd::Result<()> {
        let recurse = if self.remap { "" } else { "nore" };
        let scope = if self.buffer_local { "<buffer> " } else { "" };
        let command = format!(
            ":{}{}map {}{} {}",
            self.mode.token(),
            recurse,
            scope,
            self.key,
            self.action
        );
        debug!(key = %self.key, mode = %self.mode, "register_mapping");
        vim.execute(&command)
    }
}
