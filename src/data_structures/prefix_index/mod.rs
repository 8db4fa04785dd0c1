// Copyright (c) 2025 Ledger Suggest Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Prefix Index Implementation
//!
//! This module provides the trie that backs description autocomplete. It
//! accumulates every distinct description seen during a session and answers
//! bounded prefix queries on every keystroke.
//!
//! # Case handling
//!
//! Keys are lower-cased when a value is recorded, but the query prefix is
//! matched exactly as given. `record("Rent")` followed by `suggest("rent")`
//! yields `["Rent"]`, while `suggest("Rent")` yields nothing because there is
//! no `'R'` key below the root. Callers that want case-insensitive lookups must
//! lower-case the prefix themselves.
//!
//! # Ordering
//!
//! Results are neither sorted nor ranked. They come out of a depth-first,
//! pre-order walk that visits children in the order their character was first
//! recorded at that level, truncated at the limit.

mod node;

use node::TrieNode;

/// Number of suggestions returned when no explicit limit is given.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;

/// Configuration options for the prefix index.
#[derive(Debug, Clone)]
pub struct PrefixIndexConfig {
    /// Limit applied by [`PrefixIndex::suggest`]
    default_limit: usize,
}

impl PrefixIndexConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - default_limit: 10
    pub fn new() -> Self {
        Self {
            default_limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }

    /// Set the limit used by [`PrefixIndex::suggest`].
    ///
    /// A limit of zero is allowed and makes every default query return nothing.
    pub fn with_default_limit(mut self, default_limit: usize) -> Self {
        self.default_limit = default_limit;
        self
    }

    /// Get the limit used by [`PrefixIndex::suggest`].
    pub fn default_limit(&self) -> usize {
        self.default_limit
    }
}

impl Default for PrefixIndexConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory autocomplete index over previously seen strings.
///
/// Key features:
/// * Case-insensitive storage paths with last-write-wins display casing
/// * Bounded prefix queries in insertion order
/// * Grows monotonically; there is no removal
///
/// The index is a plain owned value. Recording needs `&mut self` and querying
/// needs `&self`, so sharing it across threads requires an external lock.
#[derive(Debug, Default)]
pub struct PrefixIndex {
    /// The root node of the trie
    root: TrieNode,

    /// Number of distinct terminal nodes
    len: usize,

    /// Configuration options
    config: PrefixIndexConfig,
}

impl PrefixIndex {
    /// Creates a new empty `PrefixIndex` with default configuration.
    pub fn new() -> Self {
        Self::with_config(PrefixIndexConfig::default())
    }

    /// Creates a new empty `PrefixIndex` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the index.
    pub fn with_config(config: PrefixIndexConfig) -> Self {
        Self {
            root: TrieNode::new(),
            len: 0,
            config,
        }
    }

    /// Returns the configuration of this index.
    pub fn config(&self) -> &PrefixIndexConfig {
        &self.config
    }

    /// Records a value so that later prefix queries can return it.
    ///
    /// Each character adds one level keyed by its lower-case form, even when
    /// that form spans several chars (`'İ'` becomes the single key
    /// `"i\u{307}"`). The terminal node stores `value` verbatim. Recording a value
    /// that is case-insensitively equal to an earlier one only replaces the
    /// stored casing.
    ///
    /// The empty string is accepted and is stored on the root node.
    ///
    /// # Arguments
    ///
    /// * `value` - The string to record.
    ///
    /// # Returns
    ///
    /// `true` if a new distinct value was added, `false` if an existing one was
    /// overwritten.
    pub fn record<V>(&mut self, value: V) -> bool
    where
        V: Into<String>,
    {
        let value = value.into();

        let mut key = String::new();
        let mut node = &mut self.root;
        for c in value.chars() {
            key.clear();
            key.extend(c.to_lowercase());
            node = node.child_or_insert(&key);
        }

        let is_new = node.set_value(value);
        if is_new {
            self.len += 1;
        }
        is_new
    }

    /// Records every value of an iterator, in iteration order.
    ///
    /// # Returns
    ///
    /// The number of values that were new to the index.
    pub fn record_all<I>(&mut self, values: I) -> usize
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut added = 0;
        let mut seen = 0;
        for value in values {
            seen += 1;
            if self.record(value) {
                added += 1;
            }
        }
        tracing::trace!(seen, added, total = self.len, "Recorded batch into prefix index");
        added
    }

    /// Returns up to the configured default number of values starting with
    /// `prefix`.
    ///
    /// See [`PrefixIndex::suggest_with_limit`].
    pub fn suggest(&self, prefix: &str) -> Vec<String> {
        self.suggest_with_limit(prefix, self.config.default_limit)
    }

    /// Returns up to `limit` recorded values reachable through `prefix`.
    ///
    /// The prefix is matched character by character against the lower-cased
    /// keys without being normalized itself. A key spanning several chars is
    /// never matched by a single prefix char. If any character has no matching
    /// child the result is empty; there is no partial or fuzzy fallback.
    ///
    /// # Arguments
    ///
    /// * `prefix` - The prefix typed so far.
    /// * `limit` - Maximum number of results. Zero yields an empty result.
    ///
    /// # Returns
    ///
    /// Stored values in depth-first pre-order, children visited in insertion
    /// order, stopping as soon as `limit` values were collected.
    pub fn suggest_with_limit(&self, prefix: &str, limit: usize) -> Vec<String> {
        if limit == 0 {
            return Vec::new();
        }

        let start = match self.descend(prefix) {
            Some(node) => node,
            None => return Vec::new(),
        };

        let mut results = Vec::with_capacity(limit.min(self.len));

        // Explicit stack so long values cannot exhaust the call stack.
        // Children are pushed in reverse to pop them in insertion order.
        let mut stack = vec![start];
        while let Some(node) = stack.pop() {
            if let Some(value) = node.stored_value() {
                results.push(value.to_owned());
                if results.len() >= limit {
                    break;
                }
            }
            stack.extend(node.children().rev());
        }

        results
    }

    /// Checks whether `value` reaches a terminal node.
    ///
    /// Uses the same matching rule as [`PrefixIndex::suggest_with_limit`], so
    /// the lookup only succeeds for the lower-cased spelling of a value.
    pub fn contains(&self, value: &str) -> bool {
        self.descend(value).map_or(false, TrieNode::is_terminal)
    }

    /// Returns the number of distinct values recorded.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks if nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Walks the trie along `prefix` without normalizing it.
    fn descend(&self, prefix: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for c in prefix.chars() {
            node = node.child(c)?;
        }
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_basic_operations() {
        let mut index = PrefixIndex::new();

        assert!(index.is_empty());
        assert!(index.suggest("").is_empty());

        assert!(index.record("groceries"));
        assert_eq!(index.len(), 1);
        assert!(!index.is_empty());

        assert_eq!(index.suggest("gro"), vec!["groceries".to_string()]);
        assert!(index.contains("groceries"));
        assert!(!index.contains("grocer"));
        assert!(index.suggest("x").is_empty());
    }

    #[test]
    fn test_index_case_asymmetry() {
        let mut index = PrefixIndex::new();
        index.record("Rent");

        assert_eq!(index.suggest("rent"), vec!["Rent".to_string()]);
        assert_eq!(index.suggest("re"), vec!["Rent".to_string()]);
        assert!(index.suggest("Rent").is_empty());
        assert!(index.suggest("R").is_empty());
        assert_eq!(index.suggest(""), vec!["Rent".to_string()]);
    }

    #[test]
    fn test_index_last_write_wins() {
        let mut index = PrefixIndex::new();

        assert!(index.record("Coffee"));
        assert!(!index.record("coffee"));

        assert_eq!(index.len(), 1);
        assert_eq!(index.suggest(""), vec!["coffee".to_string()]);
    }

    #[test]
    fn test_index_empty_string() {
        let mut index = PrefixIndex::new();
        index.record("");
        index.record("a");

        assert_eq!(index.len(), 2);
        assert_eq!(index.suggest(""), vec!["".to_string(), "a".to_string()]);
        assert_eq!(index.suggest("a"), vec!["a".to_string()]);
    }

    #[test]
    fn test_index_insertion_order() {
        let mut index = PrefixIndex::new();
        index.record_all(["apple", "apricot", "banana"]);

        assert_eq!(
            index.suggest_with_limit("ap", 10),
            vec!["apple".to_string(), "apricot".to_string()]
        );
        assert_eq!(index.suggest_with_limit("ap", 1), vec!["apple".to_string()]);
        assert!(index.suggest_with_limit("ap", 0).is_empty());
    }

    #[test]
    fn test_index_preorder_before_children() {
        let mut index = PrefixIndex::new();
        index.record("bus ticket");
        index.record("bus");
        index.record("bonus");

        assert_eq!(
            index.suggest("b"),
            vec!["bus".to_string(), "bus ticket".to_string(), "bonus".to_string()]
        );
    }

    #[test]
    fn test_index_configured_default_limit() {
        let mut index = PrefixIndex::with_config(PrefixIndexConfig::new().with_default_limit(2));
        index.record_all(["a1", "a2", "a3"]);

        assert_eq!(index.config().default_limit(), 2);
        assert_eq!(index.suggest("a"), vec!["a1".to_string(), "a2".to_string()]);
        assert_eq!(index.suggest_with_limit("a", 5).len(), 3);
    }

    #[test]
    fn test_index_multi_char_lowercase() {
        let mut index = PrefixIndex::new();
        // 'İ' lower-cases to "i\u{307}"
        index.record("İstanbul trip");

        // One level keyed "i\u{307}"; no single query char reaches below it
        assert_eq!(index.len(), 1);
        assert!(index.suggest("i").is_empty());
        assert!(index.suggest("İ").is_empty());
        assert!(!index.contains("i"));
        assert_eq!(index.suggest(""), vec!["İstanbul trip".to_string()]);
    }
}
