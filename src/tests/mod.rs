//! Test modules for ledger_suggest.
//!
//! This module contains crate-internal testing infrastructure:
//! - Property-based tests for the prefix index using proptest
//! - Parameterised tests using test-case
//! - Configuration loading tests against temporary files
//! - Shared fixtures and strategies

pub mod session_tests;
pub mod test_utils;
