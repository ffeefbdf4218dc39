// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-rule outcomes emitted by the pipeline.

use serde::{Deserialize, Serialize};

use crate::rule::Action;

/// The outcome of evaluating a single matching rule against an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookResult {
    pub passed: bool,
    pub action: Action,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_patch: Option<String>,
    pub duration_ms: u64,
}

impl HookResult {
    pub fn passed(action: Action, rule_name: impl Into<String>, duration_ms: u64) -> Self {
        Self {
            passed: true,
            action,
            message: String::new(),
            rule_name: Some(rule_name.into()),
            context_patch: None,
            duration_ms,
        }
    }

    pub fn blocked(
        action: Action,
        rule_name: impl Into<String>,
        message: impl Into<String>,
        duration_ms: u64,
    ) -> Self {
        Self {
            passed: false,
            action,
            message: message.into(),
            rule_name: Some(rule_name.into()),
            context_patch: None,
            duration_ms,
        }
    }

    pub fn with_context_patch(mut self, patch: impl Into<String>) -> Self {
        self.context_patch = Some(patch.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
