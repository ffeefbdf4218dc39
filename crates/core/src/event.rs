// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The per-firing payload passed to the pipeline.

use serde::{Deserialize, Serialize};

use crate::hook_point::HookPoint;

/// The payload describing what the agent is about to do, or has done,
/// at a given [`HookPoint`].
///
/// Immutable from a rule's perspective: handlers never mutate an event,
/// they return new [`crate::HookResult`]s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookEvent {
    pub point: HookPoint,
    pub session_key: String,
    #[serde(rename = "timestamp")]
    pub timestamp_ms: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_args: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subagent_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cron_job: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
}

impl HookEvent {
    /// Minimal constructor for the required fields; optional fields
    /// default to `None` and are set with the builder-style setters below.
    pub fn new(point: HookPoint, session_key: impl Into<String>, timestamp_ms: i64) -> Self {
        Self {
            point,
            session_key: session_key.into(),
            timestamp_ms,
            tool_name: None,
            tool_args: None,
            topic_id: None,
            subagent_label: None,
            cron_job: None,
            prompt: None,
            response: None,
        }
    }

    crate::setters! {
        option {
            tool_name: String,
            subagent_label: String,
            cron_job: String,
            prompt: String,
            response: String,
        }
    }

    pub fn with_tool_args(mut self, args: serde_json::Value) -> Self {
        self.tool_args = Some(args);
        self
    }

    pub fn with_topic_id(mut self, topic_id: i64) -> Self {
        self.topic_id = Some(topic_id);
        self
    }

    /// `true` iff `session_key` contains `":subagent:"`.
    ///
    /// The single authoritative classification rule; the Matcher's
    /// `isSubAgent` predicate and the Notifier's routing fallback both
    /// call this instead of re-deriving it.
    pub fn is_subagent(&self) -> bool {
        is_subagent(&self.session_key)
    }

    /// The shell command, if `tool_args` carries one under `command`.
    pub fn command(&self) -> Option<&str> {
        self.tool_args.as_ref()?.get("command")?.as_str()
    }

    /// `:topic:(\d+)` capture from the session key, or `None`.
    pub fn extracted_topic_id(&self) -> Option<&str> {
        extract_topic_id(&self.session_key)
    }
}

/// A session key identifies a sub-agent iff it contains `:subagent:`.
pub fn is_subagent(session_key: &str) -> bool {
    session_key.contains(":subagent:")
}

/// Matches `:topic:(\d+)` in a session key, returning the digit capture.
pub fn extract_topic_id(session_key: &str) -> Option<&str> {
    let idx = session_key.find(":topic:")?;
    let rest = &session_key[idx + ":topic:".len()..];
    let digits_len = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    if digits_len == 0 {
        None
    } else {
        Some(&rest[..digits_len])
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
