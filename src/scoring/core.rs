// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! Two mutually exclusive modes, picked by the shape of the query:
//!
//! ```text
//! Phrase:    (5000 - first_index) + occurrences × 300
//! AllTerms:  (5000 - earliest_index) + Σ occurrences(term) × 20
//! ```
//!
//! Indices are character offsets into the normalized haystack. The positional
//! part saturates at zero, so a match deep inside a long chapter still scores
//! on its occurrences alone and every real match stays strictly positive.
//!
//! # Constants
//!
//! | Constant                    | Value | Role                                    |
//! |-----------------------------|-------|-----------------------------------------|
//! | `POSITION_WINDOW`           | 5000  | Matches before this offset earn a bonus |
//! | `PHRASE_OCCURRENCE_WEIGHT`  | 300   | Per phrase occurrence                   |
//! | `TERM_OCCURRENCE_WEIGHT`    | 20    | Per term occurrence                     |

use crate::search::utils::{Query, QueryMode};
use crate::util::text::{char_index_of, count_occurrences};

/// Matches starting before this character offset earn a positional bonus.
pub const POSITION_WINDOW: u64 = 5000;

/// Bonus per occurrence of the whole phrase.
pub const PHRASE_OCCURRENCE_WEIGHT: u64 = 300;

/// Bonus per occurrence of a single term in AND mode.
pub const TERM_OCCURRENCE_WEIGHT: u64 = 20;

/// Score a normalized haystack against a parsed query.
///
/// Returns `0` for "no match"; any positive value is a match.
pub fn score(haystack: &str, query: &Query) -> u64 {
    match query.mode() {
        QueryMode::Phrase => score_phrase(haystack, query.normalized_phrase()),
        QueryMode::AllTerms => score_all_terms(haystack, query.tokens()),
    }
}

/// Phrase mode: the normalized phrase must occur contiguously.
pub fn score_phrase(haystack: &str, phrase: &str) -> u64 {
    let Some(first_index) = char_index_of(haystack, phrase) else {
        return 0;
    };
    let occurrences = count_occurrences(haystack, phrase) as u64;

    position_bonus(first_index) + occurrences * PHRASE_OCCURRENCE_WEIGHT
}

/// AND mode: every non-empty term must occur at least once, in any order.
pub fn score_all_terms<S: AsRef<str>>(haystack: &str, terms: &[S]) -> u64 {
    let mut earliest: Option<usize> = None;
    let mut occurrences = 0u64;
    let mut any_term = false;

    for term in terms.iter().map(AsRef::as_ref).filter(|t| !t.is_empty()) {
        any_term = true;
        let Some(index) = char_index_of(haystack, term) else {
            return 0;
        };
        earliest = Some(earliest.map_or(index, |e| e.min(index)));
        occurrences += count_occurrences(haystack, term) as u64;
    }

    if !any_term {
        return 0;
    }

    let score = earliest.map_or(0, position_bonus) + occurrences * TERM_OCCURRENCE_WEIGHT;
    // Unreachable once every term is present; mirrors the phrase-mode floor.
    if score == 0 {
        return 0;
    }
    score
}

/// Earlier matches score higher; nothing below zero.
#[inline]
pub fn position_bonus(index: usize) -> u64 {
    POSITION_WINDOW.saturating_sub(index as u64)
}
