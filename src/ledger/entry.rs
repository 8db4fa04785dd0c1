// Copyright (c) 2025 Ledger Suggest Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Entry records as returned by the entry-listing API.

use crate::error::SuggestResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single dated monetary entry.
///
/// Positive amounts are income, negative amounts are spending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletEntry {
    /// Server-side identifier
    #[serde(rename = "_id", default)]
    pub id: String,

    /// Signed amount
    pub amount: f64,

    /// Free-text description, the value fed to autocomplete
    pub description: String,

    /// Date the entry applies to
    pub date: DateTime<Utc>,

    /// Time the entry was created on the server
    pub create_time: DateTime<Utc>,
}

/// One page of the entry-listing response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryPage {
    /// Number of entries matching the filter on the server, across all pages
    pub count: u64,

    /// Entries of this page, in server order
    #[serde(default)]
    pub entries: Vec<WalletEntry>,

    /// Sum of all positive amounts matching the filter
    #[serde(default)]
    pub positive_amount: f64,

    /// Sum of all negative amounts matching the filter
    #[serde(default)]
    pub negative_amount: f64,
}

impl EntryPage {
    /// Decodes a page from the JSON body of an entry-listing response.
    pub fn from_json(body: &str) -> SuggestResult<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Net total of all matching entries.
    pub fn total(&self) -> f64 {
        self.positive_amount + self.negative_amount
    }

    /// Descriptions of this page's entries, in page order.
    pub fn descriptions(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.description.as_str())
    }
}
