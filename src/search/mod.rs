// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: where the rubber meets the road.
//!
//! ```text
//! query ──▶ Query::parse ──▶ for each non-structural document:
//!                               score(haystack, query) > 0 ?
//!                            ──▶ sort (relevance | book order) ──▶ truncate(limit)
//! ```
//!
//! The index is small (a few hundred pages), so a linear scan per keystroke is
//! well within budget and keeps matching exact: no tokenizer, no posting lists,
//! just substrings of normalized text.

pub mod filter;
pub mod utils;

use tracing::debug;

use crate::config::{SearchOptions, SortOrder};
use crate::index::SearchIndex;
use crate::scoring::ranking::{compare_by_book_order, compare_by_relevance};
use crate::scoring::score;
use crate::types::ScoredDocument;

use filter::is_structural;
use utils::Query;

/// Run a query against the index.
///
/// Blank queries return no results. Callers that need to tell "nothing typed"
/// apart from "nothing found" should check [`Query::parse`] first (the session
/// layer does).
///
/// # Example
///
/// ```
/// use booksearch::{search, Document, SearchIndex, SearchOptions};
///
/// let index = SearchIndex::new(vec![
///     Document::new("/it/", Some("Home"), "teorema di Bayes"),
///     Document::new("/it/I/2/3.html", Some("Bayes"), "teorema di Bayes"),
/// ]);
/// let results = search(&index, "Bayes", &SearchOptions::default());
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].document.url, "/it/I/2/3.html");
/// ```
pub fn search<'a>(
    index: &'a SearchIndex,
    query: &str,
    options: &SearchOptions,
) -> Vec<ScoredDocument<'a>> {
    match Query::parse(query) {
        Some(query) => search_query(index, &query, options),
        None => Vec::new(),
    }
}

/// Run an already-parsed query against the index.
pub fn search_query<'a>(
    index: &'a SearchIndex,
    query: &Query,
    options: &SearchOptions,
) -> Vec<ScoredDocument<'a>> {
    let mut results: Vec<ScoredDocument<'a>> = index
        .docs
        .iter()
        .zip(&index.haystacks)
        .zip(&index.order_keys)
        .filter(|((doc, _), _)| !is_structural(&doc.url, &options.languages))
        .filter_map(|((document, haystack), order_key)| {
            let score = score(haystack, query);
            (score > 0).then_some(ScoredDocument {
                score,
                document,
                order_key: *order_key,
            })
        })
        .collect();

    let matched = results.len();

    // Stable sorts: equal results keep index order
    match options.order {
        SortOrder::Relevance => results.sort_by(compare_by_relevance),
        SortOrder::BookOrder => results.sort_by(compare_by_book_order),
    }
    results.truncate(options.limit);

    debug!(
        query = query.text(),
        mode = ?query.mode(),
        matched,
        returned = results.len(),
        "search complete"
    );

    results
}
