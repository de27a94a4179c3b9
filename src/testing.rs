//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

#[cfg(feature = "session")]
use std::sync::atomic::{AtomicUsize, Ordering};
#[cfg(feature = "session")]
use std::sync::Arc;
#[cfg(feature = "session")]
use std::time::Duration;

#[cfg(feature = "session")]
use crate::error::LoadError;
use crate::error::RenderError;
use crate::index::SearchIndex;
use crate::render::{MathRenderer, RenderOptions};
use crate::types::Document;

/// Create a test document. An empty title means "no title".
///
/// This is the canonical implementation used across all tests.
pub fn make_doc(url: &str, title: &str, content: &str) -> Document {
    Document {
        url: url.to_string(),
        title: (!title.is_empty()).then(|| title.to_string()),
        content: content.to_string(),
    }
}

/// Build a search index from `(url, title, content)` triples.
pub fn make_index(pages: &[(&str, &str, &str)]) -> SearchIndex {
    SearchIndex::new(
        pages
            .iter()
            .map(|(url, title, content)| make_doc(url, title, content))
            .collect(),
    )
}

/// A renderer that wraps source in tags, so tests can see what was rendered.
///
/// `<m>src</m>` for inline math, `<M>src</M>` for display math. Sources
/// containing `\fail` are rejected, to exercise the per-span fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct TagRenderer;

impl MathRenderer for TagRenderer {
    fn render(&self, source: &str, options: RenderOptions) -> Result<String, RenderError> {
        if source.contains("\\fail") {
            return Err(RenderError::new(format!("cannot parse {source}")));
        }
        let tag = if options.display_mode { "M" } else { "m" };
        Ok(format!("<{tag}>{source}</{tag}>"))
    }
}

/// An index source that counts fetches and can be slowed down or made to fail.
#[cfg(feature = "session")]
#[derive(Debug, Clone)]
pub struct CountingSource {
    payload: Result<String, LoadError>,
    delay: Duration,
    fetches: Arc<AtomicUsize>,
}

#[cfg(feature = "session")]
impl CountingSource {
    pub fn ok(payload: &str) -> Self {
        Self::with_payload(Ok(payload.to_string()))
    }

    pub fn failing(error: LoadError) -> Self {
        Self::with_payload(Err(error))
    }

    fn with_payload(payload: Result<String, LoadError>) -> Self {
        Self {
            payload,
            delay: Duration::ZERO,
            fetches: Default::default(),
        }
    }

    /// Take this long to answer each fetch.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Shared counter of fetches, still readable after the source is moved.
    pub fn fetch_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.fetches)
    }
}

#[cfg(feature = "session")]
impl crate::session::IndexSource for CountingSource {
    async fn fetch(&self) -> Result<String, LoadError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.payload.clone()
    }
}
