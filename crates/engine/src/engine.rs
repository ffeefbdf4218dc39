// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The `Engine`: the Host Adapter's single point of contact — owns the
//! validated [`Config`]/[`RuleIndex`], the injected collaborators
//! (`ChannelAdapter`, `LlmAdapter`, `SessionStore`), and the per-event
//! `execute`/`reload` API.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use ag_adapters::{ChannelAdapter, LlmAdapter, Notifier, SessionStore};
use ag_config::index::RuleIndex;
use ag_core::clock::{Clock, SystemClock};
use ag_core::error::ConfigError;
use ag_core::event::HookEvent;
use ag_core::hook_point::HookPoint;
use ag_core::metrics::{Metrics, MetricsSnapshot};
use ag_core::result::HookResult;
use parking_lot::RwLock;

use crate::handlers::HandlerDeps;
use crate::pipeline;

/// Where a [`Config`](ag_core::Config) was loaded from — a file path
/// (reloadable) or an in-memory value (`reload()` is then a no-op).
#[derive(Debug, Clone)]
pub enum ConfigSource {
    Path(PathBuf),
    Inline(ag_core::Config),
}

impl ConfigSource {
    fn load(&self) -> Result<ag_core::Config, ConfigError> {
        match self {
            ConfigSource::Path(path) => ag_config::loader::load_path(path),
            ConfigSource::Inline(config) => Ok(config.clone()),
        }
    }
}

/// The gate engine: config + rule index + injected collaborators.
///
/// `execute` is the only hot path a host runtime calls per event;
/// `reload()` rebuilds the rule index from `source` wholesale — there
/// is no incremental rule diffing. `K` defaults to [`SystemClock`];
/// tests swap in [`ag_core::clock::FakeClock`] via [`Self::with_clock`]
/// for deterministic `durationMs` and summary-heading assertions.
pub struct Engine<C, L, S, K = SystemClock> {
    source: ConfigSource,
    rule_index: RwLock<Arc<RuleIndex>>,
    notifier: Notifier<C, S>,
    llm: L,
    llm_timeout: Duration,
    script_timeout: Duration,
    metrics: Metrics,
    clock: K,
}

impl<C, L, S, K> Engine<C, L, S, K>
where
    C: ChannelAdapter,
    L: LlmAdapter,
    S: SessionStore,
    K: Clock + Default,
{
    /// Loads and validates `source`, building the initial rule index.
    /// Config errors propagate out of here and nowhere else — the
    /// engine refuses to start on an invalid config.
    pub fn load(source: ConfigSource, channel: Arc<C>, llm: L, store: Arc<S>) -> Result<Self, ConfigError> {
        let config = source.load()?;
        let rule_index = RuleIndex::build(&config.hooks);
        Ok(Self {
            source,
            rule_index: RwLock::new(Arc::new(rule_index)),
            notifier: Notifier::new(channel, store),
            llm,
            llm_timeout: ag_adapters::subprocess::LLM_TIMEOUT,
            script_timeout: ag_adapters::subprocess::EXEC_SCRIPT_TIMEOUT,
            metrics: Metrics::new(),
            clock: K::default(),
        })
    }

    /// Overrides the default 30s LLM/subprocess timeouts.
    pub fn with_timeouts(mut self, llm_timeout: Duration, script_timeout: Duration) -> Self {
        self.llm_timeout = llm_timeout;
        self.script_timeout = script_timeout;
        self
    }

    /// Overrides the default [`SystemClock`], e.g. with a
    /// `FakeClock` in tests.
    pub fn with_clock(mut self, clock: K) -> Self {
        self.clock = clock;
        self
    }

    /// Re-reads `source` and swaps in the new rule index atomically.
    /// Fail-safe: a config that fails validation leaves the previous
    /// one live and returns the error, rather than leaving the engine
    /// half-updated.
    pub fn reload(&self) -> Result<(), ConfigError> {
        let config = self.source.load()?;
        let rebuilt = RuleIndex::build(&config.hooks);
        *self.rule_index.write() = Arc::new(rebuilt);
        Ok(())
    }

    /// Runs the rules bound to `point` against `event`, in declaration
    /// order, applying `onFailure` policy and short-circuiting on the
    /// first policy block. Returns `[]` if no rules are bound to
    /// `point`.
    pub async fn execute(&self, point: HookPoint, event: &HookEvent) -> Vec<HookResult> {
        self.notifier.record_main_session(event).await;

        let index = self.rule_index.read().clone();
        let rules = index.rules_for(point).to_vec();
        if rules.is_empty() {
            return Vec::new();
        }

        let deps = HandlerDeps {
            notifier: &self.notifier,
            llm: &self.llm,
            llm_timeout: self.llm_timeout,
            script_timeout: self.script_timeout,
            clock: &self.clock,
        };
        pipeline::execute(&rules, event, &deps, &self.metrics).await
    }

    /// A point-in-time read of the rule-execution counters.
    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
