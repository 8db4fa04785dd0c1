//! Ledger-facing layer around the prefix index.
//!
//! This module holds the entry records returned by the entry-listing API, the
//! session-owned suggester that feeds their descriptions into a
//! [`PrefixIndex`](crate::data_structures::PrefixIndex), and the keyboard
//! state of the description dropdown.

pub mod dropdown;
pub mod entry;
pub mod session;

pub use dropdown::{DropdownKey, KeyOutcome, SuggestionDropdown};
pub use entry::{EntryPage, WalletEntry};
pub use session::DescriptionSuggester;
