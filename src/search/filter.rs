// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Structural pages: home and table of contents.
//!
//! These pages quote every chapter title in the book, so they would match
//! almost any query. They are navigation, not content, and never show up as
//! results.

/// Is this URL a home page or a table-of-contents page?
///
/// Structural shapes, for each language root `<lang>`:
///
/// - `/` and `/index.html` (site root)
/// - `/<lang>/` and `/<lang>/index.html` (language home)
/// - `/<lang>/toc*.html` (any table-of-contents variant, e.g. `toc-big.html`)
///
/// Segments before the language root (a deployment base path) are ignored.
///
/// # Example
///
/// ```
/// use booksearch::is_structural;
///
/// let languages = vec!["it".to_string(), "en".to_string()];
/// assert!(is_structural("/it/", &languages));
/// assert!(is_structural("/it/toc-big.html", &languages));
/// assert!(!is_structural("/it/I/2/3.html", &languages));
/// ```
pub fn is_structural(url: &str, languages: &[String]) -> bool {
    let path = url.split(['?', '#']).next().unwrap_or("");
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    if is_home(&segments) {
        return true;
    }

    let Some(root) = segments
        .iter()
        .position(|segment| languages.iter().any(|lang| lang == segment))
    else {
        return false;
    };

    match &segments[root + 1..] {
        rest if is_home(rest) => true,
        [page] => page.starts_with("toc") && page.ends_with(".html"),
        _ => false,
    }
}

fn is_home(segments: &[&str]) -> bool {
    matches!(segments, [] | ["index.html"])
}
