// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `inject_context`: reads the interpolated `target` file and returns
//! its contents as the result's `contextPatch`. The pipeline's caller
//! is expected to prepend that patch to the downstream context.

use ag_config::interpolate::interpolate;
use ag_core::event::HookEvent;
use ag_core::rule::HookRule;

use super::ActionOutcome;

pub async fn handle(rule: &HookRule, event: &HookEvent) -> ActionOutcome {
    let Some(target) = &rule.target else {
        return ActionOutcome::failed("inject_context requires a target");
    };
    let path = interpolate(target, event);
    match tokio::fs::read_to_string(&path).await {
        Ok(contents) => ActionOutcome::passed(String::new()).with_context_patch(contents),
        Err(e) => ActionOutcome::failed(format!("missing file {path:?}: {e}")),
    }
}

#[cfg(test)]
#[path = "inject_context_tests.rs"]
mod tests;
