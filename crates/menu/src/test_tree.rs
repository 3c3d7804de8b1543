//! Structural tests: insertion, deduplication, removal, paths.

use crate::{ActionEntry, HorizontalLine, MenuItem, MenuTree, Submenu};

#[test]
fn insert_is_idempotent_by_value() {
    let mut tree = MenuTree::new();
    let root = tree.insert_root(Submenu::new("Org"));
    let first = tree.insert(root, ActionEntry::new("Open Agenda", "OrgAgenda"));
    assert!(first.is_some());
    // An equal entry is refused and the tree is unchanged.
    let second = tree.insert(root, ActionEntry::new("Open Agenda", "OrgAgenda"));
    assert!(second.is_none());
    assert_eq!(tree.children(root).len(), 1);
}

#[test]
fn insertion_order_is_preserved() {
    let mut tree = MenuTree::new();
    let root = tree.insert_root(Submenu::new("Org"));
    let e1 = tree.insert(root, ActionEntry::new("One", "Cmd1")).unwrap();
    let e2 = tree.insert(root, ActionEntry::new("Two", "Cmd2")).unwrap();
    let e3 = tree.insert(root, ActionEntry::new("Three", "Cmd3")).unwrap();
    assert_eq!(tree.children(root), [e1, e2, e3]);
}

#[test]
fn distinct_separators_do_not_deduplicate() {
    let mut tree = MenuTree::new();
    let root = tree.insert_root(Submenu::new("Org"));
    tree.insert(root, ActionEntry::new("One", "Cmd1")).unwrap();
    assert!(tree.insert(root, HorizontalLine::new()).is_some());
    tree.insert(root, ActionEntry::new("Two", "Cmd2")).unwrap();
    assert!(tree.insert(root, HorizontalLine::new()).is_some());
    assert_eq!(tree.children(root).len(), 4);
}

#[test]
fn a_cloned_separator_is_the_same_separator() {
    let mut tree = MenuTree::new();
    let root = tree.insert_root(Submenu::new("Org"));
    let line = HorizontalLine::new();
    assert!(tree.insert(root, line.clone()).is_some());
    // The clone carries the same identity token, so it counts as a duplicate.
    assert!(tree.insert(root, line).is_none());
}

#[test]
fn remove_detaches_and_clears_the_parent_reference() {
    let mut tree = MenuTree::new();
    let root = tree.insert_root(Submenu::new("Org"));
    let entry = tree
        .insert(root, ActionEntry::new("Open Agenda", "OrgAgenda"))
        .unwrap();
    assert_eq!(tree.parent(entry), Some(root));

    tree.remove(root, entry);
    assert!(tree.children(root).is_empty());
    assert_eq!(tree.parent(entry), None);

    // Removing again is a no-op.
    tree.remove(root, entry);
    assert!(tree.children(root).is_empty());
}

#[test]
fn removed_entry_can_be_reinserted() {
    let mut tree = MenuTree::new();
    let root = tree.insert_root(Submenu::new("Org"));
    let entry = tree
        .insert(root, ActionEntry::new("Open Agenda", "OrgAgenda"))
        .unwrap();
    tree.remove(root, entry);
    assert!(tree.insert(root, ActionEntry::new("Open Agenda", "OrgAgenda")).is_some());
    assert_eq!(tree.children(root).len(), 1);
}

#[test]
fn leaves_refuse_children() {
    let mut tree = MenuTree::new();
    let root = tree.insert_root(Submenu::new("Org"));
    let entry = tree
        .insert(root, ActionEntry::new("Open Agenda", "OrgAgenda"))
        .unwrap();
    assert!(tree.insert(entry, Submenu::new("Nested")).is_none());
    assert!(tree.children(entry).is_empty());
}

#[test]
fn path_joins_escaped_segments_with_dots() {
    let mut tree = MenuTree::new();
    let a = tree.insert_root(Submenu::new("My Menu"));
    let b = tree.insert(a, Submenu::new("Sub Item")).unwrap();
    assert_eq!(tree.path(a), "My\\ Menu");
    assert_eq!(tree.path(b), "My\\ Menu.Sub\\ Item");
}

#[test]
fn submenus_with_equal_names_deduplicate() {
    let mut tree = MenuTree::new();
    let root = tree.insert_root(Submenu::new("Org"));
    assert!(tree.insert(root, Submenu::new("Agenda")).is_some());
    assert!(tree.insert(root, Submenu::new("Agenda")).is_none());
}

#[test]
fn payload_is_reachable_through_the_handle() {
    let mut tree = MenuTree::new();
    let root = tree.insert_root(Submenu::new("Org"));
    match tree.get(root) {
        Some(MenuItem::Submenu(submenu)) => assert_eq!(submenu.name(), "Org"),
        other => panic!("unexpected payload: {other:?}"),
    }
}
