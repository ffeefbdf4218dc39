// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error kinds surfaced by config loading and action execution.

use thiserror::Error;

/// Errors raised while loading or validating a [`crate::Config`].
///
/// Config errors only ever escape `loadConfig` — the engine refuses to
/// start on any of these.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("config version {found:?} is not supported (expected \"1\")")]
    VersionMismatch { found: String },

    #[error("rule {rule} ({index}): unknown hook point {point:?}")]
    UnknownPoint { rule: String, index: usize, point: String },

    #[error("rule {rule} ({index}): unknown action {action:?}")]
    UnknownAction { rule: String, index: usize, action: String },

    #[error("rule {rule} ({index}): action {action} requires a non-empty target")]
    MissingTarget { rule: String, index: usize, action: String },

    #[error("rule {rule} ({index}): summarize_and_log requires a model")]
    MissingModel { rule: String, index: usize },

    #[error("rule {rule} ({index}): invalid commandPattern regex: {source}")]
    BadRegex { rule: String, index: usize, source: String },

    #[error("rule {rule} ({index}): unknown match key {key:?}")]
    UnknownMatchKey { rule: String, index: usize, key: String },

    #[error("rule {rule} ({index}): onFailure.action retry requires maxRetries > 0")]
    RetryWithoutBudget { rule: String, index: usize },

    #[error("could not read config: {0}")]
    Io(String),

    #[error("could not parse config: {0}")]
    Parse(String),
}

/// Errors raised while an action handler is performing its side effect.
///
/// `ActionError`s never escape the pipeline: they are absorbed and
/// converted into a [`crate::HookResult`] with `passed: false`, subject
/// to the rule's `onFailure` policy.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("filesystem error: {0}")]
    Io(String),

    #[error("llm error: {0}")]
    Llm(String),

    #[error("subprocess error: {0}")]
    Subprocess(String),

    #[error("{0} timed out")]
    Timeout(&'static str),

    #[error("script path {0:?} is denylisted")]
    Denylisted(String),

    #[error("script path {0:?} is not an executable regular file")]
    NotExecutable(String),

    #[error("missing file {0:?}")]
    MissingFile(String),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
