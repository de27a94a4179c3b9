// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Canonical form for matching.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalize a string for search: lowercase, strip diacritics, fold punctuation.
///
/// This enables matching between ASCII and accented versions, and makes
/// punctuation irrelevant to phrase matching:
/// - "Probabilità" → "probabilita"
/// - "perché" → "perche"
/// - "P(A|B)" → "p a b"
/// - "  teorema   di\nBayes " → "teorema di bayes"
///
/// # Algorithm
///
/// 1. Lowercase
/// 2. NFD normalize (decompose characters into base + combining marks)
/// 3. Filter out combining marks
/// 4. Replace every run of non-alphanumeric characters with one space
/// 5. Trim
///
/// Lowercasing happens first so that characters whose lowercase form carries a
/// combining mark (e.g. "İ") are folded in the same pass. That keeps the
/// function idempotent.
pub fn normalize(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut pending_space = false;

    for c in value
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
    {
        if c.is_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        } else {
            pending_space = true;
        }
    }

    out
}
