// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One-shot memoized loads: the index and the math renderer.
//!
//! Both caches hold a `tokio::sync::OnceCell`. The first caller runs the load;
//! callers arriving while it is in flight wait on the same load instead of
//! starting another fetch. Whatever comes back, success or failure, is kept
//! for the rest of the session.

use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::{info, warn};

use super::{IndexSource, RendererLoader};
use crate::error::LoadError;
use crate::index::SearchIndex;
use crate::render::MathCapability;

/// The session's document index, fetched and parsed at most once.
pub struct IndexCache<S> {
    source: S,
    cell: OnceCell<Result<Arc<SearchIndex>, LoadError>>,
}

impl<S: IndexSource> IndexCache<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cell: OnceCell::new(),
        }
    }

    /// The loaded index, loading it first if nobody has yet.
    ///
    /// A failed load is remembered: later calls return the same error without
    /// touching the source again until [`IndexCache::reset`].
    pub async fn get_or_load(&self) -> Result<Arc<SearchIndex>, LoadError> {
        self.cell
            .get_or_init(|| async {
                let loaded = self
                    .source
                    .fetch()
                    .await
                    .and_then(|payload| SearchIndex::from_json(&payload));
                match loaded {
                    Ok(index) => {
                        info!(documents = index.len(), "search index loaded");
                        Ok(Arc::new(index))
                    }
                    Err(e) => {
                        warn!(error = %e, "search index failed to load");
                        Err(e)
                    }
                }
            })
            .await
            .clone()
    }

    /// `true` once a load has finished, successfully or not.
    pub fn is_settled(&self) -> bool {
        self.cell.initialized()
    }

    /// `true` if the load finished with an error.
    pub fn has_failed(&self) -> bool {
        matches!(self.cell.get(), Some(Err(_)))
    }

    /// Forget the outcome so the next call fetches again.
    pub fn reset(&mut self) {
        self.cell.take();
    }
}

/// The session's math renderer, loaded at most once.
///
/// Unlike the index, a renderer that fails to load is not an error: the
/// session carries on with [`MathCapability::Unavailable`] and shows formulas
/// as escaped source.
pub struct RendererCache<L> {
    loader: L,
    cell: OnceCell<MathCapability>,
}

impl<L: RendererLoader> RendererCache<L> {
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            cell: OnceCell::new(),
        }
    }

    pub async fn get(&self) -> MathCapability {
        self.cell
            .get_or_init(|| async {
                match self.loader.load().await {
                    Ok(capability) => capability,
                    Err(e) => {
                        warn!(error = %e, "math renderer unavailable, showing source");
                        MathCapability::Unavailable
                    }
                }
            })
            .await
            .clone()
    }
}
