// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Action Dispatcher: maps an [`Action`] to its handler and enforces
//! the per-action result contract (§4.4) — handlers return an
//! [`ActionOutcome`], not a full [`HookResult`]; the Pipeline Engine
//! fills in `action`, `ruleName`, and `durationMs`.

mod allow;
mod block;
mod exec_script;
mod inject_context;
mod log;
mod retry;
mod summarize_and_log;

use std::time::Duration;

use ag_adapters::{ChannelAdapter, LlmAdapter, Notifier, SessionStore};
use ag_core::clock::Clock;
use ag_core::event::HookEvent;
use ag_core::rule::{Action, HookRule};

/// What an action handler decided, before the pipeline wraps it into a
/// full [`ag_core::HookResult`].
#[derive(Debug, Clone, Default)]
pub struct ActionOutcome {
    pub passed: bool,
    pub message: String,
    pub context_patch: Option<String>,
}

impl ActionOutcome {
    pub fn passed(message: impl Into<String>) -> Self {
        Self { passed: true, message: message.into(), context_patch: None }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self { passed: false, message: message.into(), context_patch: None }
    }

    pub fn with_context_patch(mut self, patch: impl Into<String>) -> Self {
        self.context_patch = Some(patch.into());
        self
    }
}

/// The collaborators an action handler may need: the Notifier (for
/// `block`'s `onFailure.notifyUser`), the LLM adapter (for
/// `summarize_and_log`), the per-invocation timeouts, and the injected
/// [`Clock`] (for `summarize_and_log`'s write-time heading).
pub struct HandlerDeps<'a, C, L, S, K> {
    pub notifier: &'a Notifier<C, S>,
    pub llm: &'a L,
    pub llm_timeout: Duration,
    pub script_timeout: Duration,
    pub clock: &'a K,
}

/// Dispatches `rule.action` to its handler.
pub async fn dispatch<C, L, S, K>(rule: &HookRule, event: &HookEvent, deps: &HandlerDeps<'_, C, L, S, K>) -> ActionOutcome
where
    C: ChannelAdapter,
    L: LlmAdapter,
    S: SessionStore,
    K: Clock,
{
    match rule.action {
        Action::Block => block::handle(rule, event, deps).await,
        Action::Allow => allow::handle(),
        Action::Log => log::handle(rule, event).await,
        Action::InjectContext => inject_context::handle(rule, event).await,
        Action::SummarizeAndLog => summarize_and_log::handle(rule, event, deps).await,
        Action::ExecScript => exec_script::handle(rule, event, deps).await,
        Action::Retry => retry::handle(),
    }
}
