//! Hierarchical menu descriptions for a Vim-like host editor.
//!
//! Menus are assembled as a tree of three node kinds: [`Submenu`] (composite,
//! ordered and deduplicated children), [`ActionEntry`] (a clickable command,
//! optionally delegating to a [`Keybinding`]), and [`HorizontalLine`] (a
//! separator). Assembly is pure data manipulation; nothing reaches the host
//! until [`MenuTree::create`] walks the tree depth-first and emits one menu
//! definition command per leaf through a [`vim_cmd::Executor`].
//!
//! Nodes live in a [`MenuTree`] arena and are addressed by stable [`NodeId`]
//! handles: each node stores its parent handle as a back-reference, each
//! submenu stores the ordered child handles that constitute ownership.
//!
//! The [`register_menu`] hook ties construction to host registration: a
//! factory product that carries a menu node (via [`HasMenu`]) has it created
//! exactly once, right after the factory returns.

mod escape;
mod hook;
mod item;
mod tree;

#[cfg(test)]
mod test_tree;

pub use keybinding::{Keybinding, Mode};

pub use crate::{
    hook::{HasMenu, register_menu},
    item::{ActionEntry, HorizontalLine, MenuAction, MenuItem, Submenu},
    tree::{MenuTree, NodeId},
};
