// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Math span rendering: snippet text in, HTML out.
//!
//! Runs at display time only, on snippets that already went through the
//! snippet extractor. Typesetting itself is someone else's job (KaTeX in the
//! browser); this module finds the spans, hands each one to a [`MathRenderer`]
//! and makes sure nothing it cannot render leaks out unescaped.
//!
//! | Segment                   | Output                                  |
//! |---------------------------|-----------------------------------------|
//! | plain text                | escaped                                 |
//! | `$…$`, `$$…$$`            | renderer output (inline / display mode) |
//! | span the renderer rejects | delimiters and source, escaped          |
//! | `$$` / `$$$$` (empty)     | literal delimiters, escaped             |
//! | `$` that never closes     | rest of the text, escaped               |
//!
//! With no renderer at all, the whole input is escaped verbatim: search stays
//! usable, formulas just show as source.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::error::RenderError;
use crate::math::{scan, Segment};

/// Options passed to the renderer for each span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// `true` for `$$…$$`, `false` for `$…$`.
    pub display_mode: bool,
}

/// An external math typesetter.
///
/// Implementations are expected to be lenient: malformed input should come
/// back as best-effort markup, not an error. An `Err` is still handled, per
/// span.
pub trait MathRenderer {
    fn render(&self, source: &str, options: RenderOptions) -> Result<String, RenderError>;
}

impl<F> MathRenderer for F
where
    F: Fn(&str, RenderOptions) -> Result<String, RenderError>,
{
    fn render(&self, source: &str, options: RenderOptions) -> Result<String, RenderError> {
        self(source, options)
    }
}

/// A renderer that may or may not be there.
///
/// Call sites must handle both branches; [`MathCapability::render_spans`] does.
#[derive(Clone, Default)]
pub enum MathCapability {
    Available(Arc<dyn MathRenderer + Send + Sync>),
    #[default]
    Unavailable,
}

impl MathCapability {
    pub fn available(renderer: impl MathRenderer + Send + Sync + 'static) -> Self {
        Self::Available(Arc::new(renderer))
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }

    pub fn renderer(&self) -> Option<&dyn MathRenderer> {
        match self {
            Self::Available(renderer) => Some(renderer.as_ref()),
            Self::Unavailable => None,
        }
    }

    /// [`render_markup_spans`] with this capability.
    pub fn render_spans(&self, text: &str) -> String {
        render_markup_spans(text, self.renderer())
    }
}

impl fmt::Debug for MathCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available(_) => f.write_str("MathCapability::Available"),
            Self::Unavailable => f.write_str("MathCapability::Unavailable"),
        }
    }
}

/// Replace every math span in `text` with rendered markup and escape the rest.
///
/// # Example
///
/// ```
/// use booksearch::{render_markup_spans, RenderError, RenderOptions};
///
/// let katex = |src: &str, _: RenderOptions| -> Result<String, RenderError> {
///     Ok(format!("<span class=\"katex\">{src}</span>"))
/// };
/// assert_eq!(
///     render_markup_spans("se $x$ & y", Some(&katex)),
///     "se <span class=\"katex\">x</span> &amp; y"
/// );
/// assert_eq!(render_markup_spans("se $x$ & y", None), "se $x$ &amp; y");
/// ```
pub fn render_markup_spans(text: &str, renderer: Option<&dyn MathRenderer>) -> String {
    let Some(renderer) = renderer else {
        return escape_html(text);
    };

    let chars: Vec<char> = text.chars().collect();
    let mut html = String::with_capacity(text.len() * 2);

    for segment in scan(&chars) {
        let raw: String = chars[segment.range().clone()].iter().collect();
        match segment {
            Segment::Math { ref range, display: display_mode } => {
                let delimiter = segment.delimiter_len();
                let source: String = chars[range.start + delimiter..range.end - delimiter]
                    .iter()
                    .collect();
                match renderer.render(&source, RenderOptions { display_mode }) {
                    Ok(markup) => html.push_str(&markup),
                    Err(e) => {
                        debug!(error = %e, display_mode, "math span left as source");
                        html.push_str(&escape_html(&raw));
                    }
                }
            }
            Segment::Text(_) | Segment::EmptyDelimiters(_) | Segment::Unterminated(_) => {
                html.push_str(&escape_html(&raw));
            }
        }
    }

    html
}

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
