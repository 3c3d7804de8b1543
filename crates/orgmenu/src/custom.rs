//! User-defined menu entries merged under Org.Custom.

use std::{fs, path::Path};

use keybinding::Mode;
use menu::{ActionEntry, HasMenu, MenuTree, NodeId, Submenu};
use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

/// One user-supplied entry.
///
/// Modes deserialize from their lowercase names; anything else fails the
/// whole file at load time, before any command is emitted.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomEntry {
    /// Left-hand label.
    pub label: String,
    /// Ex command to run.
    pub action: String,
    /// Optional right-hand hint.
    #[serde(default)]
    pub rname: Option<String>,
    /// Applicability mode.
    #[serde(default)]
    pub mode: Mode,
}

/// The custom entries file: a flat list rendered under one submenu.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomEntries {
    /// Entries in the order they should appear.
    pub entries: Vec<CustomEntry>,
}

impl CustomEntries {
    /// Load and validate a RON entries file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let parsed: Self = ron::from_str(&text).map_err(|e| Error::CustomEntries {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        debug!(count = parsed.entries.len(), "loaded custom entries");
        Ok(parsed)
    }

    /// Build the Org.Custom feature from the validated entries.
    pub fn into_feature(self) -> CustomFeature {
        let mut tree = MenuTree::new();
        let root = tree.insert_root(Submenu::new("Org"));
        let section = tree
            .insert(root, Submenu::new("Custom"))
            .expect("fresh section under a fresh root");
        for entry in self.entries {
            let mut item = ActionEntry::new(entry.label, entry.action).with_mode(entry.mode);
            if let Some(rname) = entry.rname {
                item = item.with_rname(rname);
            }
            tree.insert(section, item);
        }
        CustomFeature { tree, root }
    }
}

/// Factory product for the custom section.
pub struct CustomFeature {
    tree: MenuTree,
    root: NodeId,
}

impl HasMenu for CustomFeature {
    fn menu(&self) -> Option<(&MenuTree, NodeId)> {
        Some((&self.tree, self.root))
    }
}
