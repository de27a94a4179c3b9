// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Log output for the CLI.
//!
//! Logs go to stderr so `--json` output on stdout stays machine-readable.
//! `RUST_LOG` wins when set; otherwise `-v` raises the level from `warn`.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Level for a given count of `-v` flags.
pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber. Call once, before any work.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("booksearch={}", level_for(verbosity))));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
