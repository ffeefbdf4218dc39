// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Path interpolation: substitutes `{topicId}`, `{sessionKey}`, and
//! `{timestamp}` placeholders in a rule's `target`.

use std::sync::LazyLock;

use ag_core::event::HookEvent;
use chrono::{SecondsFormat, TimeZone, Utc};
use regex::Regex;

/// Matches `{topicId}`, `{sessionKey}`, `{timestamp}`, or any other
/// `{word}` placeholder. Unknown placeholders are left literal — by
/// construction there is no `InterpolationError`.
#[allow(clippy::expect_used)]
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([a-zA-Z_][a-zA-Z0-9_]*)\}").expect("constant regex pattern is valid"));

/// Substitute `{topicId}`, `{sessionKey}`, and `{timestamp}` in `path`
/// using fields from `event`. Pure in `(path, event)`: identical inputs
/// always produce identical output, and unrecognized placeholders are
/// left untouched rather than erroring.
pub fn interpolate(path: &str, event: &HookEvent) -> String {
    PLACEHOLDER
        .replace_all(path, |caps: &regex::Captures| {
            let name = &caps[1];
            match name {
                "topicId" => topic_id(event),
                "sessionKey" => event.session_key.clone(),
                "timestamp" => format_timestamp(event.timestamp_ms),
                _ => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// `event.topicId` if present, else the `:topic:(\d+)` capture from the
/// session key, else the literal string `"unknown"`.
fn topic_id(event: &HookEvent) -> String {
    if let Some(id) = event.topic_id {
        return id.to_string();
    }
    if let Some(extracted) = event.extracted_topic_id() {
        return extracted.to_string();
    }
    "unknown".to_string()
}

/// Renders an epoch-millisecond timestamp as ISO-8601 UTC. Falls back to
/// the raw millisecond value (not wall-clock time) when `timestamp_ms`
/// is out of chrono's representable range, so `interpolate` stays pure.
fn format_timestamp(timestamp_ms: i64) -> String {
    Utc.timestamp_millis_opt(timestamp_ms)
        .single()
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_else(|| timestamp_ms.to_string())
}

#[cfg(test)]
#[path = "interpolate_tests.rs"]
mod tests;
