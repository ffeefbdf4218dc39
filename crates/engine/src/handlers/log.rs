// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `log`: appends one JSON line describing the event to the
//! interpolated `target`, creating parent directories as needed.

use std::path::Path;

use ag_config::interpolate::interpolate;
use ag_core::event::HookEvent;
use ag_core::rule::HookRule;
use chrono::{SecondsFormat, TimeZone, Utc};
use tokio::io::AsyncWriteExt;

use super::ActionOutcome;

pub async fn handle(rule: &HookRule, event: &HookEvent) -> ActionOutcome {
    let Some(target) = &rule.target else {
        return ActionOutcome::failed("log requires a target");
    };
    let path = interpolate(target, event);
    let line = log_line(event);
    match append_line(&path, &line).await {
        Ok(()) => ActionOutcome::passed(String::new()),
        Err(e) => ActionOutcome::failed(format!("failed to write log at {path:?}: {e}")),
    }
}

fn log_line(event: &HookEvent) -> String {
    let mut map = serde_json::Map::new();
    let timestamp = Utc
        .timestamp_millis_opt(event.timestamp_ms)
        .single()
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_else(|| event.timestamp_ms.to_string());
    map.insert("timestamp".to_string(), serde_json::json!(timestamp));
    map.insert("point".to_string(), serde_json::json!(event.point.to_string()));
    map.insert("sessionKey".to_string(), serde_json::json!(event.session_key));
    if let Some(v) = event.topic_id {
        map.insert("topicId".to_string(), serde_json::json!(v));
    }
    if let Some(v) = &event.tool_name {
        map.insert("toolName".to_string(), serde_json::json!(v));
    }
    if let Some(v) = &event.tool_args {
        map.insert("toolArgs".to_string(), v.clone());
    }
    if let Some(v) = &event.prompt {
        map.insert("prompt".to_string(), serde_json::json!(v));
    }
    if let Some(v) = &event.response {
        map.insert("response".to_string(), serde_json::json!(v));
    }
    serde_json::to_string(&serde_json::Value::Object(map)).unwrap_or_default()
}

async fn append_line(path: &str, line: &str) -> std::io::Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    let mut file = tokio::fs::OpenOptions::new().create(true).append(true).open(path).await?;
    file.write_all(format!("{line}\n").as_bytes()).await?;
    Ok(())
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
