//! Test utilities and fixtures for ledger_suggest.
//!
//! This module provides reusable strategies, fixtures, and helpers shared by
//! the property-based and configuration tests.

use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;
use serde_json::json;
use tempfile::TempDir;

/// Maximum description length for generated test data.
const MAX_DESCRIPTION_LENGTH: usize = 24;

/// Maximum number of descriptions in a generated batch.
const MAX_BATCH_LENGTH: usize = 60;

/// Generate a strategy for entry descriptions.
///
/// Mixed-case ASCII letters, digits and spaces, plus a few non-ASCII letters,
/// so that generated batches share prefixes often and exercise case folding.
pub fn description_strategy() -> BoxedStrategy<String> {
    proptest::string::string_regex(&format!(
        "[a-cA-C0-9 éÉ]{{0,{MAX_DESCRIPTION_LENGTH}}}"
    ))
    .expect("valid description regex")
    .boxed()
}

/// Generate a strategy for batches of descriptions.
pub fn descriptions_strategy() -> BoxedStrategy<Vec<String>> {
    proptest::collection::vec(description_strategy(), 0..MAX_BATCH_LENGTH).boxed()
}

/// Builds an entry-listing response body holding one entry per description.
pub fn entry_page_json(descriptions: &[&str]) -> String {
    let entries: Vec<_> = descriptions
        .iter()
        .enumerate()
        .map(|(i, description)| {
            json!({
                "_id": format!("entry-{i}"),
                "amount": -(i as f64) - 1.0,
                "description": description,
                "date": "2024-05-01T00:00:00Z",
                "createTime": "2024-05-01T12:00:00Z",
            })
        })
        .collect();

    json!({
        "count": descriptions.len(),
        "entries": entries,
        "positiveAmount": 0.0,
        "negativeAmount": -(descriptions.len() as f64),
    })
    .to_string()
}

/// Test fixture for tests that need files or environment variables.
pub struct TestFixture {
    /// Temporary directory for test files
    pub temp_dir: TempDir,
    /// Environment variables to clean up after the test
    env_vars: Vec<String>,
}

impl TestFixture {
    /// Create a new test fixture.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            temp_dir: tempfile::tempdir()?,
            env_vars: Vec::new(),
        })
    }

    /// Set an environment variable for this test.
    ///
    /// The variable will be cleaned up when the fixture is dropped.
    pub fn set_env<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key_str = key.into();
        std::env::set_var(&key_str, value.into());
        self.env_vars.push(key_str);
    }

    /// Write a file with the given name into the fixture directory.
    pub fn create_file<C: AsRef<[u8]>>(
        &self,
        name: &str,
        contents: C,
    ) -> std::io::Result<std::path::PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}

impl Drop for TestFixture {
    fn drop(&mut self) {
        for key in &self.env_vars {
            std::env::remove_var(key);
        }
    }
}
