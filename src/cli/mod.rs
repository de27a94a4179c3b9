// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the booksearch command-line interface.
//!
//! Two subcommands: `search` runs a query through the same session pipeline
//! the browser uses (formulas come out as source, there is no renderer in a
//! terminal), and `inspect` summarizes an index file.

pub mod display;
pub mod logging;

use std::path::PathBuf;

use booksearch::{ConfigError, LoadError, SessionError, SortOrder};
use clap::{Parser, Subcommand, ValueEnum};
use thiserror::Error;

#[derive(Parser)]
#[command(
    name = "booksearch",
    about = "Full-text search over a book's search index",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search an index file and display results
    Search {
        /// Path to the index JSON (an array of {url, title, content})
        index: PathBuf,

        /// Search query; wrap in quotes for an exact phrase
        query: String,

        /// Result ordering
        #[arg(long, value_enum)]
        order: Option<OrderArg>,

        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<usize>,

        /// Search options file (JSON, same fields as the browser options)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Summarize an index file
    Inspect {
        /// Path to the index JSON
        index: PathBuf,

        /// Search options file, for the structural-page languages
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    /// Best matches first
    Relevance,
    /// Reading order: part, then chapter
    Book,
}

impl From<OrderArg> for SortOrder {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::Relevance => SortOrder::Relevance,
            OrderArg::Book => SortOrder::BookOrder,
        }
    }
}

/// Anything that can stop a CLI run.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("failed to encode results: {0}")]
    Json(#[from] serde_json::Error),
}
