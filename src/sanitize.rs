// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Markup cleaning: turn raw page content into text fit for matching and excerpts.
//!
//! Page content comes straight out of the site generator, so it still carries
//! templating tags (`{% … %}`, `{{ … }}`), long LaTeX environments that nobody
//! wants to read in a four-line excerpt, and words glued together where the
//! extractor dropped a newline ("probabilitàTeorema"). This module fixes all of
//! that without ever touching the inside of a `$…$` or `$$…$$` span.
//!
//! # Pipeline
//!
//! ```text
//! raw ──▶ strip templating ──▶ collapse environments ──▶ protect math
//!                                                           │
//! clean ◀── collapse whitespace ◀── restore math ◀── mark glued words
//! ```

use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::math::{scan, Segment};

/// Visible marker left where content was collapsed or a boundary was missing.
pub const ELLIPSIS_MARKER: &str = " … ";

const PLACEHOLDER_OPEN: char = '\u{E000}';
const PLACEHOLDER_CLOSE: char = '\u{E001}';

static TEMPLATE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{%.*?%\}|\{\{.*?\}\}").expect("valid template regex"));

static MATH_ENVIRONMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?s)",
        r"\\[(\[]\s*\\begin\{(?:gathered|aligned)\}.*?\\end\{(?:gathered|aligned)\}\s*\\[)\]]",
        r"|\\begin\{gathered\}.*?\\end\{gathered\}",
        r"|\\begin\{aligned\}.*?\\end\{aligned\}",
    ))
    .expect("valid environment regex")
});

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("\u{E000}(\\d+)\u{E001}").expect("valid placeholder regex"));

/// Clean raw page content for matching and display.
///
/// The result keeps original casing and every math span byte-for-byte (modulo
/// whitespace runs), so it is safe to feed to both [`crate::normalize`] and the
/// snippet extractor.
///
/// # Example
///
/// ```
/// use booksearch::sanitize;
///
/// let raw = "{% include nav.html %}La probabilità $P(A)$ è fondamentale.Vediamo";
/// assert_eq!(sanitize(raw), "La probabilità $P(A)$ è fondamentale. … Vediamo");
/// ```
pub fn sanitize(raw: &str) -> String {
    // before the tag pass, so removing them cannot splice a tag together
    let raw: String = raw
        .chars()
        .filter(|&c| c != PLACEHOLDER_OPEN && c != PLACEHOLDER_CLOSE)
        .collect();
    let without_tags = TEMPLATE_TAG.replace_all(&raw, " ");
    let without_environments = MATH_ENVIRONMENT.replace_all(&without_tags, ELLIPSIS_MARKER);

    let (protected, spans) = protect_math(&without_environments);
    let marked = mark_glued_words(&protected);
    let restored = restore_math(&marked, &spans);

    collapse_whitespace(&restored)
}

/// Swap every math span for an opaque placeholder.
///
/// The placeholder is built from private-use code points, which are neither
/// letters nor punctuation, so the glued-word heuristics never fire on it.
/// The text must already be free of those code points.
fn protect_math(text: &str) -> (String, Vec<String>) {
    let chars: Vec<char> = text.chars().collect();
    let mut spans: Vec<String> = Vec::new();
    let mut protected = String::with_capacity(text.len());

    for segment in scan(&chars) {
        let range = segment.range().clone();
        match segment {
            Segment::Math { .. } => {
                protected.push(PLACEHOLDER_OPEN);
                protected.push_str(&spans.len().to_string());
                protected.push(PLACEHOLDER_CLOSE);
                spans.push(chars[range].iter().collect());
            }
            _ => protected.extend(&chars[range]),
        }
    }
    (protected, spans)
}

fn restore_math(text: &str, spans: &[String]) -> String {
    if spans.is_empty() {
        return text.to_string();
    }
    PLACEHOLDER
        .replace_all(text, |caps: &Captures| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|index| spans.get(index))
                .cloned()
                .unwrap_or_default()
        })
        .into_owned()
}

/// Insert [`ELLIPSIS_MARKER`] where two words were evidently glued together.
fn mark_glued_words(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + 16);

    for (i, &c) in chars.iter().enumerate() {
        out.push(c);
        let Some(&next) = chars.get(i + 1) else {
            continue;
        };
        if is_glued_boundary(c, next, chars.get(i + 2).copied()) {
            out.push_str(ELLIPSIS_MARKER);
        }
    }

    out
}

/// Two shapes count as glued:
/// - "fine.Inizio": sentence punctuation straight into a capital
/// - "fineInizio": lowercase or digit into a single capitalized word
///
/// "fineABC" is left alone: a run of capitals is an acronym, not a new word.
fn is_glued_boundary(current: char, next: char, after: Option<char>) -> bool {
    if !next.is_uppercase() {
        return false;
    }
    if matches!(current, '.' | '!' | '?') {
        return true;
    }
    (current.is_lowercase() || current.is_numeric()) && after.is_some_and(char::is_lowercase)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
