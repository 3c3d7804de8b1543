//! Escaping helpers for the host menu definition grammar.

/// Escape literal spaces in a menu label.
///
/// Dotted menu paths are space-separated from the rest of the command, so
/// every space inside a label segment must be backslash-escaped.
pub(crate) fn label(name: &str) -> String {
    name.replace(' ', "\\ ")
}

/// Rewrite the host tab placeholder to the literal word `Tab`.
///
/// Right-hand hints are embedded after a real `<Tab>` separator; a raw
/// `<Tab>` token inside the hint text would split the entry.
pub(crate) fn key_hint(key: &str) -> String {
    key.replace("<Tab>", "Tab")
}
