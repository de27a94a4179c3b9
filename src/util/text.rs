// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Char-offset substring helpers.
//!
//! `str::find` reports byte offsets. Positional scores are defined over
//! characters, so a title with one accented letter must not shift the score of
//! every later match.

use unicode_normalization::char::decompose_canonical;

/// Character offset of the first occurrence of `needle` in `haystack`.
///
/// Returns `None` for an empty needle: an empty term never "occurs".
pub fn char_index_of(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }
    haystack
        .find(needle)
        .map(|byte_offset| haystack[..byte_offset].chars().count())
}

/// Count non-overlapping, case-sensitive occurrences scanning left to right.
///
/// "aaaa" contains "aa" twice, not three times.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}

/// Case- and accent-insensitive search over a char slice.
///
/// Each character is folded to one char (lowercase, then the base of its
/// canonical decomposition), so the returned offset indexes the original
/// slice and "probabilita" finds "Probabilità".
pub fn find_case_insensitive(haystack: &[char], needle: &str) -> Option<usize> {
    let needle: Vec<char> = needle.chars().map(fold_char).collect();
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }

    (0..=haystack.len() - needle.len()).find(|&start| {
        haystack[start..start + needle.len()]
            .iter()
            .zip(&needle)
            .all(|(h, n)| fold_char(*h) == *n)
    })
}

fn fold_char(c: char) -> char {
    let lower = c.to_lowercase().next().unwrap_or(c);
    let mut base = None;
    decompose_canonical(lower, |d| {
        base.get_or_insert(d);
    });
    base.unwrap_or(lower)
}
