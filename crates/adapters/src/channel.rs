// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The outbound messaging channel: delivers a user-facing message
//! through the host's Telegram-shaped interface.

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use thiserror::Error;

/// Errors from a channel send. Notifier never lets these escape.
#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("channel send failed: {0}")]
    SendFailed(String),
}

/// A parsed send destination: a chat id and an optional thread id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelTarget {
    pub chat_id: String,
    pub message_thread_id: Option<i64>,
}

/// Adapter for delivering a message through the host's outbound channel.
///
/// Mirrors `runtime.channel.telegram.sendMessageTelegram` from the
/// host runtime contract: `Clone + Send + Sync + 'static`, a single
/// async method, and a fire-and-forget call contract enforced by the
/// [`crate::notifier::Notifier`], not by this trait itself.
#[async_trait]
pub trait ChannelAdapter: Send + Sync + 'static {
    async fn send_message(&self, target: &ChannelTarget, text: &str) -> Result<(), ChannelError>;
}

/// A real Telegram Bot API adapter, POSTing to `sendMessage`.
#[derive(Clone)]
pub struct TelegramChannelAdapter {
    client: reqwest::Client,
    bot_token: String,
}

impl TelegramChannelAdapter {
    pub fn new(bot_token: impl Into<String>) -> Self {
        Self { client: reqwest::Client::new(), bot_token: bot_token.into() }
    }
}

#[async_trait]
impl ChannelAdapter for TelegramChannelAdapter {
    async fn send_message(&self, target: &ChannelTarget, text: &str) -> Result<(), ChannelError> {
        let url = format!("https://api.telegram.org/bot{}/sendMessage", self.bot_token);
        let mut body = serde_json::json!({
            "chat_id": target.chat_id,
            "text": text,
        });
        if let Some(thread_id) = target.message_thread_id {
            body["message_thread_id"] = serde_json::json!(thread_id);
        }

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ChannelError::SendFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ChannelError::SendFailed(format!("telegram returned {status}: {body}")));
        }
        Ok(())
    }
}

/// Matches `telegram:group:<chatId>` with an optional trailing
/// `:topic:<threadId>`.
#[allow(clippy::expect_used)]
static GROUP_TARGET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"telegram:group:([A-Za-z0-9_-]+)(?::topic:(\d+))?$").expect("constant regex pattern is valid"));

/// Matches the bare `telegram:<chatId>` form — end-anchored so it
/// never shadows the `group` form.
#[allow(clippy::expect_used)]
static BARE_TARGET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"telegram:([A-Za-z0-9_-]+)$").expect("constant regex pattern is valid"));

/// Parses a Telegram-style send target out of a session key, trying
/// each grammar form in order: group+topic, group-only, and bare chat id.
pub fn parse_target(session_key: &str) -> Option<ChannelTarget> {
    if let Some(caps) = GROUP_TARGET.captures(session_key) {
        let chat_id = caps[1].to_string();
        let message_thread_id = caps.get(2).and_then(|m| m.as_str().parse().ok());
        return Some(ChannelTarget { chat_id, message_thread_id });
    }
    if let Some(caps) = BARE_TARGET.captures(session_key) {
        return Some(ChannelTarget { chat_id: caps[1].to_string(), message_thread_id: None });
    }
    None
}

#[cfg(any(test, feature = "test-support"))]
mod fake {
    use super::{ChannelAdapter, ChannelError, ChannelTarget};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Debug, Clone)]
    pub struct ChannelCall {
        pub target: ChannelTarget,
        pub text: String,
    }

    #[derive(Clone, Default)]
    pub struct FakeChannelAdapter {
        calls: Arc<Mutex<Vec<ChannelCall>>>,
    }

    impl FakeChannelAdapter {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn calls(&self) -> Vec<ChannelCall> {
            self.calls.lock().clone()
        }
    }

    #[async_trait]
    impl ChannelAdapter for FakeChannelAdapter {
        async fn send_message(&self, target: &ChannelTarget, text: &str) -> Result<(), ChannelError> {
            self.calls.lock().push(ChannelCall { target: target.clone(), text: text.to_string() });
            Ok(())
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{ChannelCall, FakeChannelAdapter};

#[cfg(test)]
#[path = "channel_tests.rs"]
mod tests;
