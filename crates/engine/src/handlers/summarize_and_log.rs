// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `summarize_and_log`: synthesizes a prompt from the event's salient
//! fields, calls the LLM at `rule.model`, and appends the summary
//! (with an ISO-8601 UTC heading) to the interpolated `target`.

use std::path::Path;

use ag_adapters::LlmAdapter;
use ag_config::interpolate::interpolate;
use ag_core::clock::Clock;
use ag_core::event::HookEvent;
use ag_core::rule::HookRule;
use chrono::{SecondsFormat, TimeZone, Utc};
use tokio::io::AsyncWriteExt;

use super::{ActionOutcome, HandlerDeps};

const SYSTEM_PROMPT: &str = "Produce a one-paragraph human-readable summary of this agent turn";

pub async fn handle<C, L, S, K>(rule: &HookRule, event: &HookEvent, deps: &HandlerDeps<'_, C, L, S, K>) -> ActionOutcome
where
    L: LlmAdapter,
    K: Clock,
{
    let Some(target) = &rule.target else {
        return ActionOutcome::failed("summarize_and_log requires a target");
    };
    let Some(model) = &rule.model else {
        return ActionOutcome::failed("summarize_and_log requires a model");
    };

    let user_prompt = build_user_prompt(event);
    let summary = match deps.llm.complete(model, SYSTEM_PROMPT, &user_prompt, deps.llm_timeout).await {
        Ok(summary) => summary,
        Err(e) => return ActionOutcome::failed(format!("llm error: {e}")),
    };

    let path = interpolate(target, event);
    match append_summary(&path, &summary, deps.clock).await {
        Ok(()) => ActionOutcome::passed(String::new()),
        Err(e) => ActionOutcome::failed(format!("failed to write summary at {path:?}: {e}")),
    }
}

/// Salient fields only — prompt/response/toolName/toolArgs/sessionKey,
/// not the full event payload.
fn build_user_prompt(event: &HookEvent) -> String {
    let mut lines = vec![format!("sessionKey: {}", event.session_key)];
    if let Some(tool_name) = &event.tool_name {
        lines.push(format!("toolName: {tool_name}"));
    }
    if let Some(tool_args) = &event.tool_args {
        lines.push(format!("toolArgs: {tool_args}"));
    }
    if let Some(prompt) = &event.prompt {
        lines.push(format!("prompt: {prompt}"));
    }
    if let Some(response) = &event.response {
        lines.push(format!("response: {response}"));
    }
    lines.join("\n")
}

/// Appends a delimited heading plus the summary text. Plain append, not
/// tmpfile+rename.
async fn append_summary(path: &str, summary: &str, clock: &impl Clock) -> std::io::Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    let heading = epoch_to_rfc3339(clock.epoch_ms());
    let mut file = tokio::fs::OpenOptions::new().create(true).append(true).open(path).await?;
    file.write_all(format!("## {heading}\n{summary}\n\n").as_bytes()).await?;
    Ok(())
}

/// Renders the clock's current epoch milliseconds as ISO-8601 UTC.
fn epoch_to_rfc3339(epoch_ms: u64) -> String {
    Utc.timestamp_millis_opt(epoch_ms as i64)
        .single()
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_else(|| epoch_ms.to_string())
}

#[cfg(test)]
#[path = "summarize_and_log_tests.rs"]
mod tests;
