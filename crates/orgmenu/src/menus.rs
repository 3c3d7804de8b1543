//! Stock Org menu features.
//!
//! Each feature is a factory product carrying its own tree rooted at the
//! shared "Org" top level; the host merges the subtrees because every leaf
//! is addressed by its full dotted path.

use menu::{ActionEntry, HasMenu, HorizontalLine, Keybinding, MenuTree, Mode, NodeId, Submenu};

/// One feature area: a menu subtree plus the mappings bound into it.
pub struct Feature {
    tree: MenuTree,
    root: NodeId,
}

impl HasMenu for Feature {
    fn menu(&self) -> Option<(&MenuTree, NodeId)> {
        Some((&self.tree, self.root))
    }
}

/// Start a feature tree: an "Org" root with one named submenu under it.
fn feature(name: &str) -> (MenuTree, NodeId, NodeId) {
    let mut tree = MenuTree::new();
    let root = tree.insert_root(Submenu::new("Org"));
    let section = tree
        .insert(root, Submenu::new(name))
        .expect("fresh section name under a fresh root");
    (tree, root, section)
}

/// Entry bound to a `<localleader>` mapping.
fn bound(label: &str, keys: &str, action: &str) -> ActionEntry {
    ActionEntry::bound(label, Keybinding::new(keys, action).buffer_local())
}

/// Agenda views.
pub fn agenda() -> Feature {
    let (mut tree, root, section) = feature("Agenda");
    tree.insert(
        section,
        bound(
            "Agenda for current week or day",
            "<localleader>caa",
            ":OrgAgenda<CR>",
        ),
    );
    tree.insert(
        section,
        bound("List of all TODO entries", "<localleader>cat", ":OrgTodoList<CR>"),
    );
    tree.insert(section, HorizontalLine::new());
    tree.insert(
        section,
        bound(
            "Timeline for current buffer",
            "<localleader>caL",
            ":OrgTimeline<CR>",
        ),
    );
    Feature { tree, root }
}

/// Heading promotion and movement.
pub fn edit_structure() -> Feature {
    let (mut tree, root, section) = feature("Edit Structure");
    tree.insert(
        section,
        bound("Demote Heading", "<localleader>m>>", ":OrgDemoteHeading<CR>"),
    );
    tree.insert(
        section,
        bound("Promote Heading", "<localleader>m<<", ":OrgPromoteHeading<CR>"),
    );
    tree.insert(section, HorizontalLine::new());
    tree.insert(
        section,
        bound("Move Subtree Down", "<localleader>md", ":OrgMoveSubtreeDown<CR>"),
    );
    tree.insert(
        section,
        bound("Move Subtree Up", "<localleader>mu", ":OrgMoveSubtreeUp<CR>"),
    );
    Feature { tree, root }
}

/// Hyperlink navigation and editing.
pub fn hyperlinks() -> Feature {
    let (mut tree, root, section) = feature("Hyperlinks");
    tree.insert(
        section,
        bound("Follow Link", "<localleader>gl", ":OrgHyperlinkFollow<CR>"),
    );
    tree.insert(
        section,
        bound("Next Link", "<localleader>gn", ":OrgHyperlinkNextLink<CR>"),
    );
    tree.insert(
        section,
        bound(
            "Previous Link",
            "<localleader>gp",
            ":OrgHyperlinkPreviousLink<CR>",
        ),
    );
    tree.insert(section, HorizontalLine::new());
    tree.insert(
        section,
        bound("Insert Link", "<localleader>gil", ":OrgHyperlinkInsert<CR>"),
    );
    Feature { tree, root }
}

/// TODO state switching, including the visual-mode variants.
pub fn todo() -> Feature {
    let (mut tree, root, section) = feature("TODO Lists");
    tree.insert(
        section,
        bound("Toggle TODO state", "<localleader>ct", ":OrgTodoToggle<CR>"),
    );
    tree.insert(
        section,
        ActionEntry::bound(
            "Toggle TODO state (visual)",
            Keybinding::new("<localleader>ct", ":OrgTodoToggle<CR>")
                .with_mode(Mode::Visual)
                .buffer_local(),
        ),
    );
    Feature { tree, root }
}

/// Date and timestamp insertion; the insert-mode mapping keeps editing flow.
pub fn dates() -> Feature {
    let (mut tree, root, section) = feature("Dates and Scheduling");
    tree.insert(
        section,
        bound(
            "Insert Timestamp",
            "<localleader>sa",
            ":OrgDateInsertTimestampActiveCmdLine<CR>",
        ),
    );
    tree.insert(
        section,
        ActionEntry::bound(
            "Insert Timestamp (insert mode)",
            Keybinding::new("<C-o><localleader>sa", ":OrgDateInsertTimestampActiveCmdLine<CR>")
                .with_mode(Mode::Insert)
                .buffer_local(),
        ),
    );
    tree.insert(section, HorizontalLine::new());
    tree.insert(
        section,
        ActionEntry::new("About date formats", ":help org-dates<CR>")
            .with_rname("help")
            .with_mode(Mode::All),
    );
    Feature { tree, root }
}
