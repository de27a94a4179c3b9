// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Client-side full-text search for math-heavy books.
//!
//! The whole index (a few hundred pages) is loaded up front and every query is
//! a linear scan over precomputed haystacks: exact substring matching, phrase
//! and all-terms modes, ordering by relevance or by the book's reading order.
//! Page content is full of LaTeX, so the text pipeline is careful never to cut
//! a formula in half and never to let one leak out unescaped.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐   ┌─────────────┐   ┌──────────────┐   ┌──────────────┐
//! │ sanitize   │──▶│ normalize   │──▶│ scoring      │──▶│ search       │
//! │ (markup)   │   │ (fold)      │   │ (phrase/AND) │   │ filter, sort │
//! └────────────┘   └─────────────┘   └──────────────┘   └──────┬───────┘
//!                                                              │
//! ┌────────────┐   ┌─────────────┐   ┌──────────────┐          │
//! │ view       │◀──│ render      │◀──│ snippet      │◀─────────┘
//! │ ResultView │   │ (math spans)│   │ (math guard) │
//! └────────────┘   └─────────────┘   └──────────────┘
//!        ▲
//!        │  session: memoized index/renderer loads, debounce, stale guard
//! ```
//!
//! `math::scan` is the single definition of a formula span, shared by the
//! sanitizer, the snippet extractor and the renderer.
//!
//! # Features
//!
//! | Feature    | Default | Adds                                         |
//! |------------|---------|----------------------------------------------|
//! | `parallel` | yes     | rayon haystack preparation                   |
//! | `session`  | yes     | tokio-based [`session::SearchSession`]       |
//! | `cli`      | yes     | the `booksearch` binary                      |
//! | `wasm`     | no      | `BookSearch` JavaScript binding              |
//!
//! # Usage
//!
//! ```
//! use booksearch::{search, Document, ResultView, SearchIndex, SearchOptions};
//!
//! let index = SearchIndex::new(vec![
//!     Document::new("/it/I/2/3.html", Some("Bayes"), "Il teorema di Bayes: $P(A|B)$."),
//! ]);
//! let options = SearchOptions::default();
//! let results = search(&index, "teorema di bayes", &options);
//! let view = ResultView::build(&results[0], "bayes", &options, None);
//! assert_eq!(view.snippet_html, "Il teorema di Bayes: $P(A|B)$.");
//! ```

// Module declarations
pub mod config;
pub mod error;
mod index;
pub mod math;
pub mod render;
pub mod sanitize;
pub mod scoring;
pub mod search;
pub mod snippet;
mod types;
pub mod util;
pub mod view;

#[cfg(feature = "session")]
pub mod session;

#[cfg(feature = "wasm")]
mod wasm;

// Test utilities (always compiled, hidden from docs)
pub mod testing;

// Re-exports for public API
pub use config::{SearchOptions, SortOrder};
pub use error::{ConfigError, LoadError, RenderError, SessionError};
pub use index::{haystack, parse_documents, SearchIndex};
pub use render::{escape_html, render_markup_spans, MathCapability, MathRenderer, RenderOptions};
pub use sanitize::sanitize;
pub use scoring::ranking::BookOrderKey;
pub use scoring::{score, score_all_terms, score_phrase};
pub use search::filter::is_structural;
pub use search::utils::{Query, QueryMode};
pub use search::{search, search_query};
pub use snippet::extract_snippet;
pub use types::{Document, ScoredDocument};
pub use util::normalize::normalize;
pub use view::{build_views, resolve_url, ResultView};

#[cfg(feature = "wasm")]
pub use wasm::BookSearch;
