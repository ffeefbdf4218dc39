// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The authored policy entity: a hook point, a match predicate, and an action.

use serde::{Deserialize, Serialize};

use crate::hook_point::HookPoint;

/// The engine-side effect executed when a rule matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Block,
    Allow,
    Log,
    InjectContext,
    SummarizeAndLog,
    ExecScript,
    Retry,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Block => "block",
            Action::Allow => "allow",
            Action::Log => "log",
            Action::InjectContext => "inject_context",
            Action::SummarizeAndLog => "summarize_and_log",
            Action::ExecScript => "exec_script",
            Action::Retry => "retry",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The policy applied when an action fails as a side effect (not a
/// deliberate `block`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnFailureAction {
    Block,
    Continue,
    Retry,
}

impl Default for OnFailureAction {
    fn default() -> Self {
        OnFailureAction::Continue
    }
}

/// What to do when a rule's action handler fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct OnFailure {
    pub action: OnFailureAction,
    pub notify_user: bool,
    pub message: Option<String>,
    pub max_retries: u32,
}

/// Predicate over a [`crate::HookEvent`]. All present keys are ANDed;
/// absent keys contribute nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Match {
    pub tool: Option<String>,
    pub command_pattern: Option<String>,
    pub topic_id: Option<i64>,
    pub is_sub_agent: Option<bool>,
    pub session_pattern: Option<String>,
}

impl Match {
    /// `true` if no predicate is set — matches every event.
    pub fn is_empty(&self) -> bool {
        self.tool.is_none()
            && self.command_pattern.is_none()
            && self.topic_id.is_none()
            && self.is_sub_agent.is_none()
            && self.session_pattern.is_none()
    }
}

/// One authored policy: a hook point (or set of them), an optional
/// match predicate, an action, and failure handling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookRule {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(deserialize_with = "crate::rule::one_or_many")]
    pub point: Vec<HookPoint>,

    #[serde(default)]
    pub r#match: Option<Match>,

    pub action: Action,

    #[serde(default)]
    pub target: Option<String>,

    #[serde(default)]
    pub model: Option<String>,

    #[serde(default)]
    pub on_failure: Option<OnFailure>,

    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl HookRule {
    /// The name used in logs: the authored `name`, or `action (index)`.
    pub fn display_name(&self, index: usize) -> String {
        self.name.clone().unwrap_or_else(|| format!("{} ({index})", self.action))
    }
}

/// Accepts either a single `HookPoint` or a sequence of them, normalizing
/// to a `Vec` — the single-value-to-array canonicalization the Config
/// Loader performs on `point`.
pub fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<HookPoint>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(HookPoint),
        Many(Vec<HookPoint>),
    }

    match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(p) => Ok(vec![p]),
        OneOrMany::Many(ps) => Ok(ps),
    }
}

#[cfg(test)]
#[path = "rule_tests.rs"]
mod tests;
