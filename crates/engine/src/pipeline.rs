// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pipeline Engine: orchestrates rule execution for one event —
//! ordering, `onFailure` resolution, short-circuit on a policy block,
//! and result aggregation.

use std::sync::Arc;

use ag_adapters::{ChannelAdapter, LlmAdapter, SessionStore};
use ag_config::matcher;
use ag_core::clock::Clock;
use ag_core::event::HookEvent;
use ag_core::metrics::Metrics;
use ag_core::result::HookResult;
use ag_core::rule::{Action, HookRule, OnFailureAction};

use crate::handlers::{dispatch, ActionOutcome, HandlerDeps};

/// Evaluates `rules` against `event` in declaration order, applying
/// `onFailure` policy and short-circuiting on the first policy block.
pub async fn execute<C, L, S, K>(
    rules: &[Arc<HookRule>],
    event: &HookEvent,
    deps: &HandlerDeps<'_, C, L, S, K>,
    metrics: &Metrics,
) -> Vec<HookResult>
where
    C: ChannelAdapter,
    L: LlmAdapter,
    S: SessionStore,
    K: Clock,
{
    let mut results = Vec::new();

    for (index, rule) in rules.iter().enumerate() {
        if !rule.enabled {
            continue;
        }
        if !matches_event(rule, event) {
            continue;
        }

        let name = rule.display_name(index);
        let start = deps.clock.now();
        let outcome = run_rule(rule, event, deps, metrics).await;
        let duration_ms = deps.clock.now().saturating_duration_since(start).as_millis() as u64;
        metrics.record_executed();

        let mut result = if outcome.passed {
            HookResult::passed(rule.action, name, duration_ms)
        } else {
            HookResult::blocked(rule.action, name, outcome.message.clone(), duration_ms)
        };
        if outcome.passed && !outcome.message.is_empty() {
            result = result.with_message(outcome.message);
        }
        if let Some(patch) = outcome.context_patch {
            result = result.with_context_patch(patch);
        }

        if !result.passed {
            metrics.record_blocked();
            results.push(result);
            // A blocking result always wins: `continue` coerces every
            // side-effect failure to `passed: true`, so the only way a
            // result reaches here as `passed: false` is a genuine
            // `block` action or an `onFailure.action: block` resolution,
            // and no later rule gets a chance to override it.
            break;
        }

        results.push(result);
    }

    results
}

fn matches_event(rule: &HookRule, event: &HookEvent) -> bool {
    match &rule.r#match {
        Some(m) => matcher::matches(m, event),
        None => true,
    }
}

/// Dispatches `rule`'s action once and resolves `onFailure` if the
/// handler reports a side-effect failure. `block` is a deliberate
/// policy decision, not a side effect: it bypasses `onFailure` entirely.
async fn run_rule<C, L, S, K>(
    rule: &HookRule,
    event: &HookEvent,
    deps: &HandlerDeps<'_, C, L, S, K>,
    metrics: &Metrics,
) -> ActionOutcome
where
    C: ChannelAdapter,
    L: LlmAdapter,
    S: SessionStore,
    K: Clock,
{
    let outcome = dispatch(rule, event, deps).await;

    if rule.action == Action::Block || outcome.passed {
        return outcome;
    }
    metrics.record_failed();

    let on_failure = rule.on_failure.clone().unwrap_or_default();
    match on_failure.action {
        OnFailureAction::Continue => {
            ActionOutcome { passed: true, message: outcome.message, context_patch: outcome.context_patch }
        }
        OnFailureAction::Block => {
            let message = on_failure.message.clone().unwrap_or(outcome.message);
            if on_failure.notify_user {
                deps.notifier.notify_user(event, &message).await;
            }
            ActionOutcome::failed(message)
        }
        OnFailureAction::Retry => {
            let mut last = outcome;
            for _ in 0..on_failure.max_retries {
                if last.passed {
                    break;
                }
                last = dispatch(rule, event, deps).await;
            }
            if last.passed {
                last
            } else {
                // Retries exhausted: fall back to `continue` semantics.
                ActionOutcome { passed: true, message: last.message, context_patch: last.context_patch }
            }
        }
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
