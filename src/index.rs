// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The loaded document index.
//!
//! The index arrives whole, as a JSON array of `{url, title, content}` records.
//! We never build or update it; we only parse it once per session and pair each
//! document with the two things every search needs from it:
//!
//! - the **haystack**: `normalize(sanitize(content + " " + title))`
//! - the **book-order key**, parsed from the URL
//!
//! Both are pure functions of the document, so computing them at load time is
//! indistinguishable from computing them per keystroke, just cheaper.

use serde_json::Value;

use crate::error::LoadError;
use crate::sanitize::sanitize;
use crate::scoring::ranking::BookOrderKey;
use crate::types::Document;
use crate::util::normalize::normalize;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Documents plus their precomputed haystacks and order keys.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    pub(crate) docs: Vec<Document>,
    pub(crate) haystacks: Vec<String>,
    pub(crate) order_keys: Vec<BookOrderKey>,
}

impl SearchIndex {
    /// Prepare documents for searching.
    pub fn new(docs: Vec<Document>) -> Self {
        #[cfg(feature = "parallel")]
        let haystacks: Vec<String> = docs.par_iter().map(haystack).collect();
        #[cfg(not(feature = "parallel"))]
        let haystacks: Vec<String> = docs.iter().map(haystack).collect();

        let order_keys = docs
            .iter()
            .map(|doc| BookOrderKey::from_url(&doc.url))
            .collect();

        Self {
            docs,
            haystacks,
            order_keys,
        }
    }

    /// Parse and prepare an index payload.
    pub fn from_json(payload: &str) -> Result<Self, LoadError> {
        parse_documents(payload).map(Self::new)
    }

    pub fn docs(&self) -> &[Document] {
        &self.docs
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

impl From<Vec<Document>> for SearchIndex {
    fn from(docs: Vec<Document>) -> Self {
        Self::new(docs)
    }
}

/// The matchable text of one document.
///
/// Title goes after the content so that positional bonuses reward matches in the
/// body text, where the reader will actually find them.
pub fn haystack(doc: &Document) -> String {
    let raw = format!("{} {}", doc.content, doc.title_or_empty());
    normalize(&sanitize(&raw))
}

/// Deserialize an index payload.
///
/// The payload must be a JSON array. Anything else (an object wrapping the
/// array, `null`, an error page) is rejected so the session can report it
/// instead of silently searching nothing.
pub fn parse_documents(payload: &str) -> Result<Vec<Document>, LoadError> {
    let value: Value =
        serde_json::from_str(payload).map_err(|e| LoadError::Parse(e.to_string()))?;

    match value {
        Value::Array(_) => {
            serde_json::from_value(value).map_err(|e| LoadError::Parse(e.to_string()))
        }
        other => Err(LoadError::NotAnArray(json_kind(&other))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
