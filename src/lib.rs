//! Ledger Suggest Library
//!
//! Autocomplete for the description field of a personal-finance ledger. Every
//! entry description fetched during a session is recorded in an in-memory
//! prefix index, which answers bounded prefix queries on every keystroke.
//!
//! # Architecture
//!
//! - [`data_structures::PrefixIndex`]: the trie; pure, total, no I/O
//! - [`ledger`]: entry pages, the session-owned suggester and dropdown state
//! - [`config`] and [`error`]: layered configuration and error types

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;
pub mod ledger;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for ledger_suggest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
