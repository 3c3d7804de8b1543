//! Arena storage and traversal for menu trees.

use keybinding::Mode;
use tracing::{debug, trace};
use vim_cmd::Executor;

use crate::item::{ActionEntry, HorizontalLine, MenuAction, MenuItem};

/// Stable handle to a node in a [`MenuTree`].
///
/// Handles are minted by the tree that owns the node and stay valid for the
/// tree's lifetime; detaching a node does not invalidate its handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

struct Node {
    parent: Option<NodeId>,
    /// Ownership edge: ordered child handles. Non-empty only for submenus.
    children: Vec<NodeId>,
    item: MenuItem,
}

/// Arena of menu nodes.
///
/// The tree may hold several roots; every structural operation is addressed
/// by [`NodeId`]. Operations given a handle the tree never minted are silent
/// no-ops, matching the tolerant add/remove contract.
#[derive(Default)]
pub struct MenuTree {
    nodes: Vec<Node>,
}

impl MenuTree {
    /// An empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parentless node, typically the top-level menu.
    pub fn insert_root(&mut self, item: impl Into<MenuItem>) -> NodeId {
        self.push_node(None, item.into())
    }

    /// Insert `item` as the last child of `parent`.
    ///
    /// Returns the new node's handle, or `None` without touching the tree
    /// when an equal child is already present (insertion is idempotent by
    /// value) or when `parent` is not a submenu.
    pub fn insert(&mut self, parent: NodeId, item: impl Into<MenuItem>) -> Option<NodeId> {
        let item = item.into();
        let parent_node = self.node(parent)?;
        if !matches!(parent_node.item, MenuItem::Submenu(_)) {
            trace!(?parent, "insert into non-submenu ignored");
            return None;
        }
        if parent_node
            .children
            .iter()
            .any(|child| self.nodes[child.index()].item == item)
        {
            trace!(?parent, "duplicate child ignored");
            return None;
        }
        let id = self.push_node(Some(parent), item);
        self.nodes[parent.index()].children.push(id);
        Some(id)
    }

    /// Detach `child` from `parent`.
    ///
    /// No-op when `child` is not among `parent`'s children. The detached
    /// node's parent back-reference is cleared, so a later re-insert sees a
    /// consistent tree.
    pub fn remove(&mut self, parent: NodeId, child: NodeId) {
        let Some(pos) = self
            .node(parent)
            .and_then(|node| node.children.iter().position(|c| *c == child))
        else {
            return;
        };
        self.nodes[parent.index()].children.remove(pos);
        self.nodes[child.index()].parent = None;
    }

    /// Immutable snapshot of a node's children, in insertion order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(|node| &node.children[..]).unwrap_or(&[])
    }

    /// The node's parent handle, if attached.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|node| node.parent)
    }

    /// The node's payload.
    pub fn get(&self, id: NodeId) -> Option<&MenuItem> {
        self.node(id).map(|node| &node.item)
    }

    /// Dotted, escaped path from the root down to `id`.
    pub fn path(&self, id: NodeId) -> String {
        let Some(node) = self.node(id) else {
            return String::new();
        };
        let segment = node.item.segment();
        match node.parent {
            Some(parent) => format!("{}.{}", self.path(parent), segment),
            None => segment,
        }
    }

    /// Emit host commands for `id` and its descendants, depth-first in
    /// insertion order.
    ///
    /// Submenus emit nothing themselves: the host materializes intermediate
    /// path segments when a leaf beneath them is defined. A host failure
    /// aborts the remaining traversal; commands already issued stay in
    /// effect.
    pub fn create(&self, id: NodeId, vim: &mut dyn Executor) -> vim_cmd::Result<()> {
        let Some(node) = self.node(id) else {
            return Ok(());
        };
        match &node.item {
            MenuItem::Submenu(_) => {
                for child in &node.children {
                    self.create(*child, vim)?;
                }
                Ok(())
            }
            MenuItem::Action(entry) => self.create_action(id, entry, vim),
            MenuItem::Separator(line) => self.create_separator(id, line, vim),
        }
    }

    /// Menu address of a leaf: parent path (empty at the root) joined to the
    /// leaf's escaped label.
    fn address(&self, id: NodeId, label: &str) -> String {
        let prefix = self
            .parent(id)
            .map(|parent| self.path(parent))
            .unwrap_or_default();
        format!("{prefix}.{label}")
    }

    fn create_action(
        &self,
        id: NodeId,
        entry: &ActionEntry,
        vim: &mut dyn Executor,
    ) -> vim_cmd::Result<()> {
        let resolved = entry.resolve();
        let address = self.address(id, &entry.lname());
        let command = match &resolved.rname {
            Some(rname) if !rname.is_empty() => format!(
                ":{}menu {}<Tab>{} {}",
                resolved.mode.token(),
                address,
                rname,
                resolved.action
            ),
            _ => format!(
                ":{}menu {} {}",
                resolved.mode.token(),
                address,
                resolved.action
            ),
        };
        debug!(command = %command, "define_menu_entry");
        vim.execute(&command)?;
        // Keep the key mapping and the menu entry in sync.
        if let MenuAction::Bound(binding) = entry.source() {
            binding.create(vim)?;
        }
        Ok(())
    }

    fn create_separator(
        &self,
        id: NodeId,
        line: &HorizontalLine,
        vim: &mut dyn Executor,
    ) -> vim_cmd::Result<()> {
        let address = self.address(id, &line.label());
        let command = format!(":{}menu {} :", Mode::All.token(), address);
        debug!(command = %command, "define_menu_separator");
        vim.execute(&command)
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    fn push_node(&mut self, parent: Option<NodeId>, item: MenuItem) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            parent,
            children: Vec::new(),
            item,
        });
        id
    }
}
