// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keystroke debouncing.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::trace;

/// Runs only the last task triggered within a quiet period.
///
/// Every [`Debouncer::trigger`] aborts the task still waiting from the
/// previous trigger and restarts the timer, so a burst of keystrokes runs one
/// search, for the last one, `delay` after typing stops.
///
/// Must be used from within a tokio runtime.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `task` after the delay, replacing whatever was scheduled.
    pub fn trigger<F>(&mut self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task.await;
        }));
    }

    /// Drop the scheduled task, if it has not started running yet.
    ///
    /// A task already past its delay is aborted at its next await point.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            if !handle.is_finished() {
                trace!("debounced task superseded");
            }
            handle.abort();
        }
    }

    /// `true` while a triggered task has not finished.
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
