// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The top-level authored policy document.

use serde::{Deserialize, Serialize};

use crate::rule::{HookRule, OnFailure};

/// Partial defaults applied to every rule before validation. Rule
/// fields win on conflict (shallow merge).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Defaults {
    pub model: Option<String>,
    pub on_failure: Option<OnFailure>,
}

/// A policy file: a version tag, shared defaults, and an ordered list
/// of hooks.
///
/// `version` must be `"1"`. Parsed once on `loadConfig()` and rebuilt
/// wholesale on `reload()` — there is no incremental rule diffing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub version: String,
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub hooks: Vec<HookRule>,
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
