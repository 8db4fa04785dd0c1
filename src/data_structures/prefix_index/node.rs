// Copyright (c) 2025 Ledger Suggest Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the prefix index.
//!
//! Each node owns its children directly. Children are kept in the order their
//! key character was first seen at that level, which is the order suggestions
//! are produced in.

/// A node in the prefix index trie.
///
/// A node is terminal when `stored_value` is set; the stored value is the
/// recorded string exactly as it was last recorded, casing included.
#[derive(Debug, Default)]
pub struct TrieNode {
    /// Child nodes keyed by the lower-case form of one character, in
    /// first-seen order. A key can span several chars (`'İ'` -> `"i\u{307}"`).
    children: Vec<(String, TrieNode)>,

    /// Original string terminating at this node, if any
    stored_value: Option<String>,
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            stored_value: None,
        }
    }

    /// Returns the child whose key is exactly `c`, if one exists.
    ///
    /// Keys spanning several chars never match a single `c`.
    pub fn child(&self, c: char) -> Option<&TrieNode> {
        let mut buf = [0u8; 4];
        let key: &str = c.encode_utf8(&mut buf);
        self.children
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, node)| node)
    }

    /// Returns the child reached through `key`, appending a new one if needed.
    pub fn child_or_insert(&mut self, key: &str) -> &mut TrieNode {
        let pos = match self.children.iter().position(|(k, _)| k == key) {
            Some(pos) => pos,
            None => {
                self.children.push((key.to_owned(), TrieNode::new()));
                self.children.len() - 1
            }
        };
        &mut self.children[pos].1
    }

    /// Iterates over the children in insertion order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = &TrieNode> {
        self.children.iter().map(|(_, node)| node)
    }

    #[cfg(test)]
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.children.iter().map(|(k, _)| k.as_str())
    }

    /// Whether a recorded string ends at this node.
    pub fn is_terminal(&self) -> bool {
        self.stored_value.is_some()
    }

    /// The string stored at this node, if it is terminal.
    pub fn stored_value(&self) -> Option<&str> {
        self.stored_value.as_deref()
    }

    /// Marks the node terminal with `value`, replacing any previous casing.
    ///
    /// Returns `true` if the node was not terminal before.
    pub fn set_value(&mut self, value: String) -> bool {
        self.stored_value.replace(value).is_none()
    }
}

// Very long values produce very deep chains; drop them without recursion.
impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut pending: Vec<TrieNode> = self.children.drain(..).map(|(_, node)| node).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.drain(..).map(|(_, child)| child));
        }
    }
}
