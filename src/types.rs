// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a search.
//!
//! A [`Document`] is what the index source hands us; a [`ScoredDocument`] is
//! what survives scoring. Neither outlives a single search except the
//! documents themselves, which the session keeps for the page lifetime.
//!
//! # Invariants
//!
//! - **Document**: never mutated after deserialization. The engine borrows it.
//! - **ScoredDocument**: `score > 0`. Zero means "no match" and such candidates
//!   are dropped before they are ever wrapped in this type.

use serde::{Deserialize, Serialize};

use crate::scoring::ranking::BookOrderKey;

/// One page of the book as supplied by the index source.
///
/// `content` still carries templating tags and raw LaTeX; see
/// [`crate::sanitize`] for how it is cleaned before matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub content: String,
}

impl Document {
    pub fn new(url: impl Into<String>, title: Option<&str>, content: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.map(str::to_string),
            content: content.into(),
        }
    }

    /// Title, or empty when the page has none.
    pub fn title_or_empty(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }
}

/// A document that matched the query.
///
/// Borrowed from the index: results are recomputed on every keystroke, so
/// cloning page content per candidate would dominate the search cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredDocument<'a> {
    /// Relevance score, strictly positive.
    pub score: u64,
    pub document: &'a Document,
    /// Position in the book, derived from the URL.
    pub order_key: BookOrderKey,
}
