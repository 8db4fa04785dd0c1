// Copyright (c) 2025 Ledger Suggest Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Session-scoped description suggester.
//!
//! A `DescriptionSuggester` is created when a user session starts and handed to
//! whichever screen needs suggestions. It owns its index exclusively and is
//! dropped with the session; nothing is persisted.

use super::entry::EntryPage;
use crate::config::SuggestionConfig;
use crate::data_structures::{PrefixIndex, PrefixIndexConfig};

/// Feeds fetched entry pages into a prefix index and answers keystroke queries.
#[derive(Debug, Default)]
pub struct DescriptionSuggester {
    index: PrefixIndex,
}

impl DescriptionSuggester {
    /// Creates an empty suggester using the configured suggestion limit.
    pub fn new(config: &SuggestionConfig) -> Self {
        let index_config = PrefixIndexConfig::new().with_default_limit(config.limit);
        Self {
            index: PrefixIndex::with_config(index_config),
        }
    }

    /// Records the description of every entry on `page`, in page order.
    ///
    /// # Returns
    ///
    /// The number of descriptions recorded, including ones already known.
    pub fn ingest(&mut self, page: &EntryPage) -> usize {
        let recorded = page.entries.len();
        let added = self.index.record_all(page.descriptions());
        tracing::debug!(
            recorded,
            added,
            known = self.index.len(),
            "Ingested entry page descriptions"
        );
        recorded
    }

    /// Records a single description, e.g. one the user just saved.
    pub fn record(&mut self, description: &str) {
        self.index.record(description);
    }

    /// Suggestions for the text currently in the description field.
    pub fn suggestions(&self, input: &str) -> Vec<String> {
        let suggestions = self.index.suggest(input);
        tracing::trace!(input, found = suggestions.len(), "Computed suggestions");
        suggestions
    }

    /// The underlying index.
    pub fn index(&self) -> &PrefixIndex {
        &self.index
    }
}
