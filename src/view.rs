// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! What the presentation layer gets for each result.
//!
//! The engine stops here: a resolved link, a label and a rendered snippet.
//! Showing them and navigating to them belongs to the host page.

use serde::Serialize;

use crate::config::SearchOptions;
use crate::render::{render_markup_spans, MathRenderer};
use crate::snippet::extract_snippet;
use crate::types::ScoredDocument;

/// One displayable search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultView {
    /// Target URL, resolved against the deployment base path.
    pub url: String,
    /// Page title, or the URL for untitled pages.
    pub label: String,
    /// Snippet HTML: escaped text with rendered math.
    pub snippet_html: String,
    pub score: u64,
}

impl ResultView {
    /// Build the view of one result: snippet, math and link.
    pub fn build(
        result: &ScoredDocument<'_>,
        query: &str,
        options: &SearchOptions,
        renderer: Option<&dyn MathRenderer>,
    ) -> Self {
        let document = result.document;
        let snippet = extract_snippet(&document.content, query, options.snippet_length);

        Self {
            url: resolve_url(&options.base_path, &document.url),
            label: label(document.title.as_deref(), &document.url),
            snippet_html: render_markup_spans(&snippet, renderer),
            score: result.score,
        }
    }
}

/// Build views for a whole result list, preserving its order.
pub fn build_views(
    results: &[ScoredDocument<'_>],
    query: &str,
    options: &SearchOptions,
    renderer: Option<&dyn MathRenderer>,
) -> Vec<ResultView> {
    results
        .iter()
        .map(|result| ResultView::build(result, query, options, renderer))
        .collect()
}

/// Join a site-relative URL onto the deployment base path.
///
/// Absolute URLs (`https://…`, `//host/…`) are returned unchanged.
///
/// ```
/// use booksearch::resolve_url;
///
/// assert_eq!(resolve_url("/", "/it/I/1/1.html"), "/it/I/1/1.html");
/// assert_eq!(resolve_url("/libro/", "/it/I/1/1.html"), "/libro/it/I/1/1.html");
/// assert_eq!(resolve_url("/libro", "https://esempio.it/"), "https://esempio.it/");
/// ```
pub fn resolve_url(base_path: &str, url: &str) -> String {
    if url.contains("://") || url.starts_with("//") {
        return url.to_string();
    }
    let base = base_path.trim_end_matches('/');
    let path = url.trim_start_matches('/');
    if base.is_empty() {
        format!("/{path}")
    } else if base.starts_with('/') {
        format!("{base}/{path}")
    } else {
        format!("/{base}/{path}")
    }
}

fn label(title: Option<&str>, url: &str) -> String {
    match title.map(str::trim) {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => url.to_string(),
    }
}
