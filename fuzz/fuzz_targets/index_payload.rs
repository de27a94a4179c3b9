// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index payload parsing under adversarial input.
//!
//! The index is fetched over the network. A truncated download, an HTML
//! error page or a payload of the wrong shape must come back as an error.

#![no_main]

use booksearch::{haystack, parse_documents, LoadError, SearchIndex};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let payload = String::from_utf8_lossy(data);

    match parse_documents(&payload) {
        Ok(docs) => {
            // INVARIANT: a parsed payload always builds an index of the same size
            let index = SearchIndex::new(docs.clone());
            assert_eq!(index.len(), docs.len());

            // INVARIANT: haystacks are normalized (lowercase, single spaces)
            for doc in &docs {
                let hay = haystack(doc);
                assert!(!hay.starts_with(' ') && !hay.ends_with(' '));
                assert!(!hay.contains("  "), "double space in {hay:?}");
            }
        }
        Err(LoadError::NotAnArray(kind)) => assert_ne!(kind, "array"),
        Err(_) => {}
    }
});
