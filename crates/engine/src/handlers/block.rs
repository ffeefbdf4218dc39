// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `block`: unconditionally fails with `onFailure.message` (or
//! `"blocked"`), optionally notifying the user. The Pipeline Engine
//! treats a `block` outcome as a policy block, never routes it through
//! `onFailure`, and short-circuits on it.

use ag_adapters::{ChannelAdapter, SessionStore};
use ag_core::event::HookEvent;
use ag_core::rule::HookRule;

use super::{ActionOutcome, HandlerDeps};

pub async fn handle<C, L, S, K>(rule: &HookRule, event: &HookEvent, deps: &HandlerDeps<'_, C, L, S, K>) -> ActionOutcome
where
    C: ChannelAdapter,
    S: SessionStore,
{
    let on_failure = rule.on_failure.as_ref();
    let message = on_failure.and_then(|f| f.message.clone()).unwrap_or_else(|| "blocked".to_string());
    if on_failure.map(|f| f.notify_user).unwrap_or(false) {
        deps.notifier.notify_user(event, &message).await;
    }
    ActionOutcome::failed(message)
}

#[cfg(test)]
#[path = "block_tests.rs"]
mod tests;
