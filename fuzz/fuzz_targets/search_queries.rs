// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Arbitrary pages and queries: the search must never panic, never return
//! a structural page, and always respect the limit and the ordering.

#![no_main]

use arbitrary::Arbitrary;
use booksearch::{is_structural, search, Document, SearchIndex, SearchOptions, SortOrder};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    pages: Vec<(String, Option<String>, String)>,
    query: String,
    book_order: bool,
    limit: u8,
}

fuzz_target!(|input: Input| {
    let docs: Vec<Document> = input
        .pages
        .into_iter()
        .take(64)
        .map(|(url, title, content)| Document { url, title, content })
        .collect();
    let index = SearchIndex::new(docs);

    let order = if input.book_order {
        SortOrder::BookOrder
    } else {
        SortOrder::Relevance
    };
    let options = SearchOptions::default()
        .with_order(order)
        .with_limit(usize::from(input.limit));

    // Cap query length to avoid timeout
    let query: String = input.query.chars().take(200).collect();
    let results = search(&index, &query, &options);

    // INVARIANT 1: bounded by the limit
    assert!(results.len() <= options.limit);

    // INVARIANT 2: only matches, never structural pages
    for result in &results {
        assert!(result.score > 0);
        assert!(!is_structural(&result.document.url, &options.languages));
    }

    // INVARIANT 3: sorted by the requested order
    for pair in results.windows(2) {
        match order {
            SortOrder::Relevance => assert!(pair[0].score >= pair[1].score),
            SortOrder::BookOrder => {
                let (a, b) = (pair[0].order_key, pair[1].order_key);
                assert!((a.part, a.chapter) <= (b.part, b.chapter));
            }
        }
    }
});
