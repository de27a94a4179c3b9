// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Only I/O-bound work can fail: loading the index, loading the renderer,
//! reading a config file. Matching, scoring and snippet extraction are total
//! functions and have no error type at all.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain the document index. Fatal for the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The source could not deliver the payload (network error, bad status).
    #[error("failed to fetch search index: {0}")]
    Fetch(String),

    /// The payload is not valid JSON.
    #[error("search index is not valid JSON: {0}")]
    Parse(String),

    /// The payload is valid JSON but not an array of documents.
    #[error("search index must be a JSON array of documents, found {0}")]
    NotAnArray(&'static str),
}

/// Failure to render a single math span.
///
/// Never escapes the renderer: the span falls back to escaped source text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to render math span: {message}")]
pub struct RenderError {
    pub message: String,
}

impl RenderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Failure to set up or use a search session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// A presentation collaborator the session needs was not provided.
    #[error("search UI is missing a required element: {0}")]
    MissingCollaborator(&'static str),

    /// The index failed to load earlier in this session.
    #[error(transparent)]
    Load(#[from] LoadError),
}

/// Failure to read search options.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid search options: {0}")]
    Parse(#[source] serde_json::Error),
}
