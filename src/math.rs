// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Math span scanning.
//!
//! One definition of "what is a formula", shared by the sanitizer (which hides
//! formulas from its heuristics), the snippet extractor (which must not cut
//! them) and the renderer (which typesets them). If those three disagreed on
//! where a span ends, a snippet could be "balanced" by one count and garbage by
//! another.
//!
//! # Rules
//!
//! Scanning left to right, at each `$`:
//!
//! - `$$` opens display math, closed by the next `$$`
//! - `$$` whose next `$` is a lone one, or that never closes, or `$$$$`, is an
//!   empty span: literal delimiters
//!
//! A span body never contains a `$`, so every complete span holds an even
//! number of them.
//! - `$` opens inline math, closed by the next `$`
//! - `$` with no closing `$` is unterminated: everything after it is plain text
//!
//! Ranges are char offsets into the scanned slice.

use std::ops::Range;

/// A region of scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Plain text. Contains no `$`.
    Text(Range<usize>),
    /// `$$` or `$$$$` with nothing between the delimiters.
    EmptyDelimiters(Range<usize>),
    /// A complete span, delimiters included.
    Math { range: Range<usize>, display: bool },
    /// A `$` that never closes, through to the end of input.
    Unterminated(Range<usize>),
}

impl Segment {
    pub fn range(&self) -> &Range<usize> {
        match self {
            Segment::Text(range)
            | Segment::EmptyDelimiters(range)
            | Segment::Math { range, .. }
            | Segment::Unterminated(range) => range,
        }
    }

    /// Delimiter width: 2 for display math, 1 for inline.
    pub fn delimiter_len(&self) -> usize {
        match self {
            Segment::Math { display: true, .. } => 2,
            _ => 1,
        }
    }
}

/// Split text into plain and math segments. Segments cover the input exactly.
pub fn scan(chars: &[char]) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut text_start = 0;
    let mut i = 0;

    while i < chars.len() {
        if chars[i] != '$' {
            i += 1;
            continue;
        }
        if text_start < i {
            segments.push(Segment::Text(text_start..i));
        }

        if chars.get(i + 1) == Some(&'$') {
            match display_close(chars, i + 2) {
                Some(close) if close == i + 2 => {
                    segments.push(Segment::EmptyDelimiters(i..close + 2));
                    i = close + 2;
                }
                Some(close) => {
                    segments.push(Segment::Math {
                        range: i..close + 2,
                        display: true,
                    });
                    i = close + 2;
                }
                None => {
                    segments.push(Segment::EmptyDelimiters(i..i + 2));
                    i += 2;
                }
            }
        } else {
            match chars[i + 1..].iter().position(|&c| c == '$') {
                Some(offset) => {
                    let close = i + 1 + offset;
                    segments.push(Segment::Math {
                        range: i..close + 1,
                        display: false,
                    });
                    i = close + 1;
                }
                None => {
                    segments.push(Segment::Unterminated(i..chars.len()));
                    i = chars.len();
                }
            }
        }
        text_start = i;
    }

    if text_start < chars.len() {
        segments.push(Segment::Text(text_start..chars.len()));
    }
    segments
}
/// Opener of the closing `$$` for display math starting before `from`.
///
/// `None` when the next `$` is a lone one or there is none.
fn display_close(chars: &[char], from: usize) -> Option<usize> {
    let close = from + chars[from..].iter().position(|&c| c == '$')?;
    (chars.get(close + 1) == Some(&'$')).then_some(close)
}
