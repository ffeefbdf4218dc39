// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `exec_script`: validates the interpolated `target` against the
//! denylist and executable-bit check, then spawns it with the event
//! marshalled into `HOOK_*` environment variables, capturing stdout
//! and stderr separately under a per-script timeout.

use ag_adapters::subprocess::{run_with_timeout, validate_script_path, SubprocessError};
use ag_config::interpolate::interpolate;
use ag_core::event::HookEvent;
use ag_core::rule::HookRule;

use super::{ActionOutcome, HandlerDeps};

pub async fn handle<C, L, S, K>(rule: &HookRule, event: &HookEvent, deps: &HandlerDeps<'_, C, L, S, K>) -> ActionOutcome {
    let Some(target) = &rule.target else {
        return ActionOutcome::failed("exec_script requires a target");
    };
    let path = interpolate(target, event);

    if let Err(e) = validate_script_path(&path) {
        return ActionOutcome::failed(e.to_string());
    }

    let mut cmd = tokio::process::Command::new(&path);
    apply_env(&mut cmd, event);
    if let Some(parent) = std::path::Path::new(&path).parent() {
        if !parent.as_os_str().is_empty() {
            cmd.current_dir(parent);
        }
    }

    match run_with_timeout(cmd, deps.script_timeout, "exec_script").await {
        Ok(output) if output.status.success() => {
            ActionOutcome::passed(String::from_utf8_lossy(&output.stdout).trim_end().to_string())
        }
        Ok(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr).trim_end().to_string();
            let message = if stderr.is_empty() {
                format!("script exited with code {}", output.status.code().unwrap_or(-1))
            } else {
                stderr
            };
            ActionOutcome::failed(message)
        }
        Err(SubprocessError::TimedOut(_)) => ActionOutcome::failed("script timed out"),
        Err(e) => ActionOutcome::failed(e.to_string()),
    }
}

/// Marshals the event into the `HOOK_*` environment variables every
/// script invocation receives. `HOOK_SUMMARY` is always empty here — no
/// upstream `summarize_and_log` result is available to an `exec_script`
/// invocation on its own.
fn apply_env(cmd: &mut tokio::process::Command, event: &HookEvent) {
    cmd.env("HOOK_POINT", event.point.to_string());
    cmd.env("HOOK_SESSION", &event.session_key);
    cmd.env("HOOK_TOOL", event.tool_name.as_deref().unwrap_or(""));
    cmd.env("HOOK_ARGS", event.tool_args.as_ref().map(ToString::to_string).unwrap_or_default());
    cmd.env("HOOK_TOPIC", event.topic_id.map(|t| t.to_string()).unwrap_or_default());
    cmd.env("HOOK_TIMESTAMP", event.timestamp_ms.to_string());
    cmd.env("HOOK_SUBAGENT", if event.is_subagent() { "true" } else { "false" });
    cmd.env("HOOK_SUBAGENT_LABEL", event.subagent_label.as_deref().unwrap_or(""));
    cmd.env("HOOK_CRON_JOB", event.cron_job.as_deref().unwrap_or(""));
    cmd.env("HOOK_PROMPT", event.prompt.as_deref().unwrap_or(""));
    cmd.env("HOOK_RESPONSE", event.response.as_deref().unwrap_or(""));
    cmd.env("HOOK_SUMMARY", "");
}

#[cfg(test)]
#[path = "exec_script_tests.rs"]
mod tests;
