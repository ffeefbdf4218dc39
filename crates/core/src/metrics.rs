// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lightweight in-process counters for rule execution outcomes.
//!
//! No external metrics crate: a handful of atomics is all the pipeline
//! needs for process-local counters.

use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide counters the Pipeline Engine increments as it executes
/// rules. Cheap to share: `Metrics` is `Clone`-free and meant to be held
/// behind an `Arc`.
#[derive(Debug, Default)]
pub struct Metrics {
    executed: AtomicU64,
    blocked: AtomicU64,
    failed: AtomicU64,
}

/// A point-in-time read of [`Metrics`]' counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MetricsSnapshot {
    pub executed: u64,
    pub blocked: u64,
    pub failed: u64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_executed(&self) {
        self.executed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_blocked(&self) {
        self.blocked.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failed(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            executed: self.executed.load(Ordering::Relaxed),
            blocked: self.blocked.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
#[path = "metrics_tests.rs"]
mod tests;
