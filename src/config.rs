// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search options.
//!
//! Every knob has a default that matches the deployed site, so an empty JSON
//! object (`{}`) is a valid configuration. Field names are camelCase because the
//! same struct is deserialized from the browser.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// Maximum number of results returned by a search.
pub const DEFAULT_LIMIT: usize = 80;

/// Length of a result snippet, in characters.
pub const DEFAULT_SNIPPET_LENGTH: usize = 160;

/// Quiet period before a search runs, in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 80;

/// How results are ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOrder {
    /// Descending score only.
    #[default]
    Relevance,
    /// Part and chapter first, score within a chapter.
    BookOrder,
}

/// Search options passed from the host (CLI flags, JSON file, or JavaScript).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchOptions {
    /// Result ordering (default: relevance)
    pub order: SortOrder,
    /// Maximum number of results (default: 80)
    pub limit: usize,
    /// Snippet window in characters (default: 160)
    pub snippet_length: usize,
    /// Language roots whose home and table-of-contents pages are never results
    pub languages: Vec<String>,
    /// Debounce delay for keystroke-triggered searches (default: 80)
    pub debounce_ms: u64,
    /// Deployment base path result URLs are resolved against (default: "/")
    pub base_path: String,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            order: SortOrder::Relevance,
            limit: DEFAULT_LIMIT,
            snippet_length: DEFAULT_SNIPPET_LENGTH,
            languages: vec!["it".to_string(), "en".to_string()],
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            base_path: "/".to_string(),
        }
    }
}

impl SearchOptions {
    /// Parse options from a JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(ConfigError::Parse)
    }

    /// Read options from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}
