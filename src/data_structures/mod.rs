//! Data structures for ledger description autocomplete.
//!
//! This module contains the in-memory structures the suggestion layer is
//! built on. They perform no I/O and never fail.

pub mod prefix_index;

// Re-export common data structures
pub use prefix_index::{PrefixIndex, PrefixIndexConfig, DEFAULT_SUGGESTION_LIMIT};
