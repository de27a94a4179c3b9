// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query parsing.
//!
//! A query is interpreted once per search: quote stripping, mode selection and
//! normalization all happen here so the per-document scoring loop only does
//! substring work.

use crate::util::normalize::normalize;

/// How a query is matched against a haystack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMode {
    /// The whole normalized query must appear contiguously.
    Phrase,
    /// Every normalized term must appear somewhere, in any order.
    AllTerms,
}

/// A parsed, normalized user query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    text: String,
    mode: QueryMode,
    normalized_phrase: String,
    tokens: Vec<String>,
}

impl Query {
    /// Parse user input. Returns `None` for blank input.
    ///
    /// `"teorema di Bayes"` (quoted) and `teorema di Bayes` (unquoted, contains
    /// whitespace) are both phrase queries; `Bayes` is an AND query with one
    /// term. An unterminated quote is just a character.
    ///
    /// # Example
    ///
    /// ```
    /// use booksearch::{Query, QueryMode};
    ///
    /// let query = Query::parse("\"Teorema di Bayes\"").unwrap();
    /// assert_eq!(query.mode(), QueryMode::Phrase);
    /// assert_eq!(query.text(), "Teorema di Bayes");
    /// assert_eq!(query.normalized_phrase(), "teorema di bayes");
    /// ```
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        let (text, quoted) = match strip_quotes(trimmed) {
            Some(inner) => (inner.trim(), true),
            None => (trimmed, false),
        };
        if text.is_empty() {
            return None;
        }

        let mode = if quoted || text.contains(char::is_whitespace) {
            QueryMode::Phrase
        } else {
            QueryMode::AllTerms
        };

        Some(Self {
            text: text.to_string(),
            mode,
            normalized_phrase: normalize(text),
            tokens: parse_query(text),
        })
    }

    /// The query as typed, minus surrounding quotes and whitespace.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn mode(&self) -> QueryMode {
        self.mode
    }

    pub fn normalized_phrase(&self) -> &str {
        &self.normalized_phrase
    }

    /// Normalized terms in query order, duplicates kept.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

fn strip_quotes(text: &str) -> Option<&str> {
    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        Some(&text[1..text.len() - 1])
    } else {
        None
    }
}

/// Parse a query string into normalized, whitespace-separated terms.
///
/// # Example
///
/// ```ignore
/// let terms = parse_query("Probabilità Condizionata");
/// assert_eq!(terms, vec!["probabilita", "condizionata"]);
/// ```
pub fn parse_query(query: &str) -> Vec<String> {
    normalize(query)
        .split(' ')
        .filter(|p| !p.is_empty())
        .map(|s| s.to_string())
        .collect()
}
