//! Node payloads held by the menu tree.

use std::sync::atomic::{AtomicU64, Ordering};

use keybinding::{Keybinding, Mode};

use crate::escape;

/// Source of an action entry's command, hint, and mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    /// A literal ex command.
    Literal(String),
    /// Delegate to a key mapping. The mapping's command, key, and mode win
    /// over any locally supplied hint or mode on the entry.
    Bound(Keybinding),
}

/// Composite node: a named menu able to hold further nodes.
///
/// The name may contain spaces; they are escaped whenever the name is used
/// as a path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submenu {
    name: String,
}

impl Submenu {
    /// A submenu with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The raw display name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Effective rendering values for an action entry, resolved in one place
/// from the action variant.
pub(crate) struct Resolved<'a> {
    pub(crate) action: &'a str,
    pub(crate) rname: Option<String>,
    pub(crate) mode: Mode,
}

/// Leaf node: one clickable menu entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionEntry {
    lname: String,
    action: MenuAction,
    rname: Option<String>,
    mode: Mode,
}

impl ActionEntry {
    /// An entry running a literal ex command in Normal mode.
    pub fn new(lname: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            lname: lname.into(),
            action: MenuAction::Literal(action.into()),
            rname: None,
            mode: Mode::Normal,
        }
    }

    /// An entry delegating command, hint, and mode to a key mapping.
    pub fn bound(lname: impl Into<String>, binding: Keybinding) -> Self {
        Self {
            lname: lname.into(),
            action: MenuAction::Bound(binding),
            rname: None,
            mode: Mode::Normal,
        }
    }

    /// Set the right-hand hint label. A bound entry's mapping key wins over
    /// this value.
    pub fn with_rname(mut self, rname: impl Into<String>) -> Self {
        self.rname = Some(rname.into());
        self
    }

    /// Set the applicability mode. A bound entry's mapping mode wins over
    /// this value.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// The left-hand label, escaped for host syntax.
    pub fn lname(&self) -> String {
        escape::label(&self.lname)
    }

    /// The action source this entry renders from.
    pub fn source(&self) -> &MenuAction {
        &self.action
    }

    /// The effective ex command.
    pub fn action(&self) -> &str {
        self.resolve().action
    }

    /// The effective right-hand hint, if any. For a bound entry this is the
    /// mapping key with the host tab placeholder rewritten.
    pub fn rname(&self) -> Option<String> {
        self.resolve().rname
    }

    /// The effective applicability mode.
    pub fn mode(&self) -> Mode {
        self.resolve().mode
    }

    /// Resolve command, hint, and mode from the action variant in one step,
    /// so the three can never disagree about which case they are in.
    pub(crate) fn resolve(&self) -> Resolved<'_> {
        match &self.action {
            MenuAction::Literal(action) => Resolved {
                action,
                rname: self.rname.clone(),
                mode: self.mode,
            },
            MenuAction::Bound(binding) => Resolved {
                action: binding.action(),
                rname: Some(escape::key_hint(binding.key())),
                mode: binding.mode(),
            },
        }
    }
}

/// Monotonic source for separator identity tokens.
static NEXT_SEPARATOR: AtomicU64 = AtomicU64::new(1);

/// Leaf node: a visual separator.
///
/// Separators carry no content, so each one is minted with a unique identity
/// token; value comparison never collapses two distinct lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HorizontalLine {
    token: u64,
}

impl HorizontalLine {
    /// A separator with a fresh identity token.
    pub fn new() -> Self {
        Self {
            token: NEXT_SEPARATOR.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// The menu label: the opaque token wrapped in dashes, as the host
    /// grammar expects for separator entries.
    pub(crate) fn label(&self) -> String {
        format!("-Sep{}-", self.token)
    }
}

impl Default for HorizontalLine {
    fn default() -> Self {
        Self::new()
    }
}

/// Any node payload accepted by the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItem {
    /// Composite submenu.
    Submenu(Submenu),
    /// Clickable entry.
    Action(ActionEntry),
    /// Separator line.
    Separator(HorizontalLine),
}

impl MenuItem {
    /// The escaped label this node contributes as a path segment.
    pub(crate) fn segment(&self) -> String {
        match self {
            Self::Submenu(submenu) => escape::label(submenu.name()),
            Self::Action(entry) => entry.lname(),
            Self::Separator(line) => line.label(),
        }
    }
}

impl From<Submenu> for MenuItem {
    fn from(submenu: Submenu) -> Self {
        Self::Submenu(submenu)
    }
}

impl From<ActionEntry> for MenuItem {
    fn from(entry: ActionEntry) -> Self {
        Self::Action(entry)
    }
}

impl From<HorizontalLine> for MenuItem {
    fn from(line: HorizontalLine) -> Self {
        Self::Separator(line)
    }
}
