// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Snippet extraction: a short excerpt of a page around the first match.
//!
//! Snippets are cut from sanitized, un-normalized text so the reader sees the
//! original casing and the math renderer gets intact `$…$` spans. The one thing
//! a fixed-width window must never do is cut a formula in half: a dangling `$`
//! would make the renderer pair it with the next formula's opener and turn the
//! prose in between into garbage math.
//!
//! # Window
//!
//! ```text
//!        ◀── max/3 ──▶◀──────── 2·max/3 ────────▶
//! … ─────────────────[match]──────────────────────── …
//! ```
//!
//! # Math guard
//!
//! Spans are found with [`crate::math::scan`], the same scanner the renderer
//! uses, so "inside a formula" means the same thing everywhere.
//!
//! - window starts inside a span → move the start back to its opener; if that
//!   is more than [`MATH_LOOKAHEAD`] away, keep just the formula body when the
//!   window ends inside the span, otherwise skip past the closer
//! - window ends inside a span → extend the end to the closer within
//!   [`MATH_LOOKAHEAD`], otherwise trim it back to the opener
//! - window contains a `$` that never closes → trim the end back to it
//!
//! After the guard the window holds only whole spans, so it always contains
//! an even number of `$`.

use crate::math::{scan, Segment};
use crate::sanitize::sanitize;
use crate::search::utils::Query;
use crate::util::text::find_case_insensitive;

/// How far past the window we look for a closing `$`.
pub const MATH_LOOKAHEAD: usize = 200;

/// Marker for text cut off before or after the window.
pub const ELLIPSIS: &str = "…";

/// Extract a display snippet of about `max_length` characters.
///
/// # Example
///
/// ```
/// use booksearch::extract_snippet;
///
/// let content = "La probabilità è $P(A)$ fondamentale.";
/// assert_eq!(extract_snippet(content, "probabilita", 160), content);
/// ```
pub fn extract_snippet(raw_content: &str, query: &str, max_length: usize) -> String {
    let clean = sanitize(raw_content);
    let chars: Vec<char> = clean.chars().collect();
    if chars.is_empty() || max_length == 0 {
        return String::new();
    }

    let needle = Query::parse(query).map(|q| q.text().to_string());
    let position = needle
        .as_deref()
        .and_then(|needle| find_case_insensitive(&chars, needle));

    let (start, end) = match position {
        Some(position) => window_around(position, chars.len(), max_length),
        None => (0, chars.len().min(max_length)),
    };
    let segments = scan(&chars);
    let (start, end) = align_start(&segments, start, end);
    let end = align_end(&segments, start, end.max(start));

    let mut snippet = String::with_capacity(max_length * 2);
    if start > 0 {
        snippet.push_str(ELLIPSIS);
        snippet.push(' ');
    }
    let body: String = chars[start..end].iter().collect();
    snippet.push_str(body.trim());
    if end < chars.len() {
        snippet.push(' ');
        snippet.push_str(ELLIPSIS);
    }
    snippet
}

/// One third of the window before the match, two thirds after.
fn window_around(position: usize, len: usize, max_length: usize) -> (usize, usize) {
    let start = position.saturating_sub(max_length / 3);
    let end = (start + max_length).min(len);
    (start, end)
}

/// Move the window start out of any math span it lands in.
///
/// Back to the span's opener when that is within [`MATH_LOOKAHEAD`]. A window
/// lying wholly inside a longer formula keeps its `$`-free body text;
/// otherwise the start moves forward past the span.
fn align_start(segments: &[Segment], start: usize, end: usize) -> (usize, usize) {
    let Some(segment) = segments.iter().find(|s| straddles(s, start)) else {
        return (start, end);
    };
    match segment {
        Segment::Math { .. } | Segment::EmptyDelimiters(_) => {
            let range = segment.range();
            let body_end = range.end - segment.delimiter_len();
            if start - range.start <= MATH_LOOKAHEAD {
                (range.start, end)
            } else if start < body_end && end <= range.end {
                (start, end.min(body_end))
            } else {
                (range.end, end.max(range.end))
            }
        }
        _ => (start, end),
    }
}

/// Move the window end out of any math span it lands in.
///
/// Forward to the span's closer when that is within [`MATH_LOOKAHEAD`],
/// otherwise back to its opener. A `$` that never closes is cut off along
/// with everything after it.
fn align_end(segments: &[Segment], start: usize, end: usize) -> usize {
    for segment in segments {
        let range = segment.range();
        match segment {
            Segment::Unterminated(_) if range.start >= start && range.start < end => {
                return range.start;
            }
            Segment::Math { .. } | Segment::EmptyDelimiters(_) if straddles(segment, end) => {
                return if range.start < start {
                    end
                } else if range.end - end <= MATH_LOOKAHEAD {
                    range.end
                } else {
                    range.start.max(start)
                };
            }
            _ => {}
        }
    }
    end
}

fn straddles(segment: &Segment, offset: usize) -> bool {
    let range = segment.range();
    range.start < offset && offset < range.end
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dollars(s: &str) -> usize {
        s.chars().filter(|&c| c == '$').count()
    }

    #[test]
    fn test_short_content_is_returned_whole() {
        assert_eq!(extract_snippet("Breve testo.", "testo", 100), "Breve testo.");
    }

    #[test]
    fn test_window_around_match() {
        let content = format!("{} bayes {}", "a".repeat(100), "b".repeat(100));
        let snippet = extract_snippet(&content, "bayes", 30);
        assert!(snippet.starts_with("… "));
        assert!(snippet.ends_with(" …"));
        assert!(snippet.contains("bayes"));
        // one third before the match
        let before = snippet.trim_start_matches("… ").split("bayes").next().unwrap();
        assert_eq!(before.len(), 10);
    }

    #[test]
    fn test_no_match_returns_prefix() {
        let content = "x".repeat(300);
        let snippet = extract_snippet(&content, "bayes", 50);
        assert_eq!(snippet, format!("{} …", "x".repeat(50)));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let content = format!("{}Teorema di Bayes", "a ".repeat(100));
        let snippet = extract_snippet(&content, "teorema di bayes", 60);
        assert!(snippet.contains("Teorema di Bayes"));
    }

    #[test]
    fn test_quoted_query_is_unquoted() {
        let content = format!("{}Teorema di Bayes", "a ".repeat(100));
        let snippet = extract_snippet(&content, "\"teorema di bayes\"", 60);
        assert!(snippet.contains("Teorema di Bayes"));
    }

    #[test]
    fn test_content_is_sanitized() {
        let snippet = extract_snippet("{% raw %}Il teorema{{ x }} vale", "teorema", 100);
        assert_eq!(snippet, "Il teorema vale");
    }

    #[test]
    fn test_extends_to_close_math_span() {
        // window of 20 from 0 ends inside "$x + y = z$"
        let content = "bayes vale $x + y = z$ sempre e comunque in ogni caso possibile";
        let snippet = extract_snippet(content, "bayes", 20);
        assert!(snippet.contains("$x + y = z$"), "{snippet}");
        assert_eq!(dollars(&snippet) % 2, 0);
    }

    #[test]
    fn test_trims_unclosable_math_span() {
        let content = format!("bayes vale ${} fine", "x".repeat(300));
        let snippet = extract_snippet(&content, "bayes", 20);
        assert_eq!(snippet, "bayes vale …");
    }

    #[test]
    fn test_start_moves_back_to_span_opener() {
        let content = format!("{} $a + b + c + d + e + f + bayes$ dopo", "z".repeat(200));
        let snippet = extract_snippet(&content, "bayes", 30);
        assert_eq!(snippet, "… $a + b + c + d + e + f + bayes$ dopo");
    }

    #[test]
    fn test_start_skips_span_too_far_back() {
        let content = format!("$x{}$ bayes e altro", " + y".repeat(100));
        let snippet = extract_snippet(&content, "bayes", 30);
        assert_eq!(snippet, "… bayes e altro");
    }

    #[test]
    fn test_match_deep_inside_long_formula_keeps_body() {
        let content = format!(
            "Testo iniziale. ${} bayes {}$ dopo la formula.",
            "x + ".repeat(80),
            "y + ".repeat(80)
        );
        let snippet = extract_snippet(&content, "bayes", 60);
        assert!(snippet.starts_with("… "), "{snippet}");
        assert!(snippet.ends_with(" …"), "{snippet}");
        assert!(snippet.contains("x + bayes y +"), "{snippet}");
        assert_eq!(dollars(&snippet), 0);
    }

    #[test]
    fn test_inner_lone_dollar_keeps_snippet_balanced() {
        let snippet = extract_snippet(
            "Sia $$a = 5$ + b$$ e poi la fine del paragrafo.",
            "fine",
            160,
        );
        assert_eq!(dollars(&snippet) % 2, 0, "{snippet}");
        assert_eq!(snippet, "Sia $$a = 5$ + b$ …");

        let snippet = extract_snippet("$$$$$$$=$$", "x", 5);
        assert_eq!(dollars(&snippet) % 2, 0, "{snippet}");
    }

    #[test]
    fn test_display_math_kept_whole() {
        let content = format!("bayes {} $$\\sum_i p_i = 1$$ fine", "w".repeat(20));
        let snippet = extract_snippet(&content, "bayes", 32);
        assert_eq!(dollars(&snippet) % 2, 0);
        assert!(snippet.contains("$$\\sum_i p_i = 1$$"), "{snippet}");
    }

    #[test]
    fn test_stray_dollar_is_cut_off() {
        let snippet = extract_snippet("costa 5$ circa, bayes", "bayes", 100);
        assert_eq!(snippet, "costa 5 …");
    }

    #[test]
    fn test_stray_dollar_before_window_is_harmless() {
        let content = format!("costa 5$ {} bayes", "w".repeat(100));
        let snippet = extract_snippet(&content, "bayes", 30);
        assert_eq!(dollars(&snippet), 0);
        assert!(snippet.ends_with("bayes"));
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(extract_snippet("", "bayes", 100), "");
        assert_eq!(extract_snippet("testo", "", 100), "testo");
        assert_eq!(extract_snippet("testo", "bayes", 0), "");
    }
}
