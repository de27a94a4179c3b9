// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic tickets for issued queries.
///
/// Each query takes a ticket before it awaits anything. When its results are
/// ready it checks [`RequestSequence::is_current`]: if a newer query has been
/// issued meanwhile, the results are stale and must not be shown.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: AtomicU64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next ticket. Tickets start at 1.
    pub fn issue(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket
    }

    /// The most recently issued ticket, 0 if none.
    pub fn latest(&self) -> u64 {
        self.latest.load(Ordering::SeqCst)
    }
}
