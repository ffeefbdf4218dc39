// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fire-and-forget user notification through the host channel.
//!
//! Remembers the last main-agent session key (in memory, mirrored to
//! disk via a [`SessionStore`]) so sub-agent events can still reach the
//! user: a sub-agent has no Telegram routing information of its own.

use std::sync::Arc;

use ag_core::event::HookEvent;
use parking_lot::Mutex;

use crate::channel::{parse_target, ChannelAdapter};
use crate::session_store::SessionStore;

/// The component responsible for routing a user-facing message through
/// the host channel. Holds its adapters as explicit injected
/// dependencies — never module-level statics — so tests pass fakes.
pub struct Notifier<C, S> {
    channel: Arc<C>,
    store: Arc<S>,
    last_main_session: Mutex<Option<String>>,
}

impl<C, S> Notifier<C, S>
where
    C: ChannelAdapter,
    S: SessionStore,
{
    pub fn new(channel: Arc<C>, store: Arc<S>) -> Self {
        Self { channel, store, last_main_session: Mutex::new(None) }
    }

    /// Records `event.session_key` as the last-seen main-agent session,
    /// both in the in-memory cache and on disk. Call this for every
    /// main-agent event the pipeline processes, never for sub-agent
    /// events (a sub-agent key would poison the routing fallback).
    pub async fn record_main_session(&self, event: &HookEvent) {
        if event.is_subagent() {
            return;
        }
        *self.last_main_session.lock() = Some(event.session_key.clone());
        self.store.write(&event.session_key).await;
    }

    /// The session key to route notifications through for `event`: its
    /// own key, or — for sub-agent events — the last remembered
    /// main-agent key (memory first, then disk).
    async fn routing_session_key(&self, event: &HookEvent) -> Option<String> {
        if !event.is_subagent() {
            return Some(event.session_key.clone());
        }
        if let Some(cached) = self.last_main_session.lock().clone() {
            return Some(cached);
        }
        self.store.read().await
    }

    /// Sends `text` to the user routed from `event`. Fire-and-forget:
    /// any failure (no routable target, channel error) is logged and
    /// swallowed. Never throws into the caller.
    pub async fn notify_user(&self, event: &HookEvent, text: &str) {
        let Some(session_key) = self.routing_session_key(event).await else {
            tracing::warn!(session = %event.session_key, "no main session to route notification through");
            return;
        };
        let Some(target) = parse_target(&session_key) else {
            tracing::warn!(%session_key, "could not parse a channel target from session key");
            return;
        };
        if let Err(e) = self.channel.send_message(&target, text).await {
            tracing::warn!(%session_key, error = %e, "notification send failed");
        }
    }
}

#[cfg(test)]
#[path = "notifier_tests.rs"]
mod tests;
