// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search sessions: the engine plus the async plumbing around it.
//!
//! The engine itself is a set of pure functions. A session adds the parts that
//! depend on time and I/O:
//!
//! ```text
//! keystroke ──▶ Debouncer ──▶ SearchSession::search
//!                               │  take ticket (RequestSequence)
//!                               │  IndexCache::get_or_load ─┐ concurrently
//!                               │  RendererCache::get ──────┘
//!                               │  stale ticket? ──▶ Stale
//!                               ▼
//!                             search_query ──▶ build_views ──▶ Results
//! ```
//!
//! A session lives as long as the page. The index is fetched once; if that
//! fails, every search reports the same error until the user asks to
//! [`SearchSession::reopen`].

pub mod cache;
pub mod debounce;
pub mod sequence;

use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

use crate::config::SearchOptions;
use crate::error::{LoadError, RenderError, SessionError};
use crate::render::MathCapability;
use crate::search::search_query;
use crate::search::utils::Query;
use crate::view::{build_views, ResultView};

pub use cache::{IndexCache, RendererCache};
pub use debounce::Debouncer;
pub use sequence::RequestSequence;

/// Supplies the raw index payload (a JSON array of documents).
pub trait IndexSource {
    fn fetch(&self) -> impl Future<Output = Result<String, LoadError>> + Send;
}

/// Supplies the math renderer, typically by loading a script.
pub trait RendererLoader {
    fn load(&self) -> impl Future<Output = Result<MathCapability, RenderError>> + Send;
}

/// A payload that is already in memory.
#[derive(Debug, Clone)]
pub struct StaticSource(pub String);

impl IndexSource for StaticSource {
    async fn fetch(&self) -> Result<String, LoadError> {
        Ok(self.0.clone())
    }
}

/// A payload on the local filesystem.
#[derive(Debug, Clone)]
pub struct FileSource(pub PathBuf);

impl IndexSource for FileSource {
    async fn fetch(&self) -> Result<String, LoadError> {
        std::fs::read_to_string(&self.0)
            .map_err(|e| LoadError::Fetch(format!("{}: {e}", self.0.display())))
    }
}

/// No renderer: formulas are shown as escaped source.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRenderer;

impl RendererLoader for NoRenderer {
    async fn load(&self) -> Result<MathCapability, RenderError> {
        Ok(MathCapability::Unavailable)
    }
}

/// A renderer that is already loaded.
impl RendererLoader for MathCapability {
    async fn load(&self) -> Result<MathCapability, RenderError> {
        Ok(self.clone())
    }
}

/// What a search produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Nothing to search for: the query was blank.
    Idle,
    /// Results for the most recent query, possibly none.
    Results(Vec<ResultView>),
    /// A newer query was issued while this one waited; discard.
    Stale,
}

/// Collects a session's collaborators.
pub struct SessionBuilder<S, L> {
    source: Option<S>,
    loader: Option<L>,
    options: SearchOptions,
}

impl<S, L> Default for SessionBuilder<S, L> {
    fn default() -> Self {
        Self {
            source: None,
            loader: None,
            options: SearchOptions::default(),
        }
    }
}

impl<S: IndexSource, L: RendererLoader> SessionBuilder<S, L> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index_source(mut self, source: S) -> Self {
        self.source = Some(source);
        self
    }

    pub fn renderer_loader(mut self, loader: L) -> Self {
        self.loader = Some(loader);
        self
    }

    pub fn options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    /// Build the session. Nothing is fetched until the first search.
    pub fn build(self) -> Result<SearchSession<S, L>, SessionError> {
        let source = self
            .source
            .ok_or(SessionError::MissingCollaborator("index source"))?;
        let loader = self
            .loader
            .ok_or(SessionError::MissingCollaborator("renderer loader"))?;

        Ok(SearchSession {
            index: IndexCache::new(source),
            renderer: RendererCache::new(loader),
            sequence: RequestSequence::new(),
            options: self.options,
        })
    }
}

/// One page's worth of search state.
pub struct SearchSession<S, L> {
    index: IndexCache<S>,
    renderer: RendererCache<L>,
    sequence: RequestSequence,
    options: SearchOptions,
}

impl<S: IndexSource, L: RendererLoader> SearchSession<S, L> {
    pub fn builder() -> SessionBuilder<S, L> {
        SessionBuilder::new()
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// A debouncer with the configured delay.
    pub fn debouncer(&self) -> Debouncer {
        Debouncer::from_millis(self.options.debounce_ms)
    }

    /// Run a query end to end: load on first use, match, rank, render.
    ///
    /// Every call supersedes earlier ones, blank queries included: a search
    /// still waiting on the index when a newer one is issued comes back
    /// [`SearchOutcome::Stale`].
    pub async fn search(&self, query: &str) -> Result<SearchOutcome, SessionError> {
        let ticket = self.sequence.issue();
        let Some(parsed) = Query::parse(query) else {
            return Ok(SearchOutcome::Idle);
        };

        let (index, capability) = tokio::join!(self.index.get_or_load(), self.renderer.get());

        // a superseded search reports neither results nor load errors
        if !self.sequence.is_current(ticket) {
            debug!(query, ticket, "discarding stale search");
            return Ok(SearchOutcome::Stale);
        }
        let index = index?;

        let results = search_query(&index, &parsed, &self.options);
        let views = build_views(&results, query, &self.options, capability.renderer());
        Ok(SearchOutcome::Results(views))
    }

    /// Allow another load attempt after the index failed to load.
    ///
    /// A successfully loaded index is kept.
    pub fn reopen(&mut self) {
        if self.index.has_failed() {
            debug!("retrying search index load");
            self.index.reset();
        }
    }
}

impl<S, L> SearchSession<S, L>
where
    S: IndexSource + Send + Sync + 'static,
    L: RendererLoader + Send + Sync + 'static,
{
    /// Search after the debounce delay, handing the outcome to `on_outcome`.
    ///
    /// A later call on the same debouncer replaces this one if it comes
    /// before the delay runs out.
    pub fn search_debounced<F>(
        self: &Arc<Self>,
        debouncer: &mut Debouncer,
        query: impl Into<String>,
        on_outcome: F,
    ) where
        F: FnOnce(Result<SearchOutcome, SessionError>) + Send + 'static,
    {
        let session = Arc::clone(self);
        let query = query.into();
        debouncer.trigger(async move {
            let outcome = session.search(&query).await;
            on_outcome(outcome);
        });
    }
}
