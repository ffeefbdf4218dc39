// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Config Loader: parses the YAML policy file, merges `defaults` into
//! each rule, and validates the result before handing it to the Rule
//! Index.
//!
//! Validation runs over the untyped [`serde_yaml::Value`] tree rather
//! than the typed [`Config`] directly, so a bad point/action/match key
//! produces a [`ConfigError`] carrying the offending rule's name and
//! index instead of an opaque serde error.

use std::path::Path;

use ag_core::error::ConfigError;
use ag_core::hook_point::HookPoint;
use ag_core::Config;
use serde_yaml::Value;

const KNOWN_ACTIONS: &[&str] =
    &["block", "allow", "log", "inject_context", "summarize_and_log", "exec_script", "retry"];
const KNOWN_MATCH_KEYS: &[&str] =
    &["tool", "commandPattern", "topicId", "isSubAgent", "sessionPattern"];

/// Load and validate a config from a file on disk.
pub fn load_path(path: &Path) -> Result<Config, ConfigError> {
    let source = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
    load_str(&source)
}

/// Load and validate a config from its YAML source.
pub fn load_str(source: &str) -> Result<Config, ConfigError> {
    let mut raw: Value =
        serde_yaml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))?;
    validate_and_merge_defaults(&mut raw)?;
    serde_yaml::from_value(raw).map_err(|e| ConfigError::Parse(e.to_string()))
}

fn validate_and_merge_defaults(raw: &mut Value) -> Result<(), ConfigError> {
    let version = raw
        .get("version")
        .and_then(Value::as_str)
        .ok_or_else(|| ConfigError::Parse("missing required field `version`".to_string()))?
        .to_string();
    if version != "1" {
        return Err(ConfigError::VersionMismatch { found: version });
    }

    let default_model = raw.get("defaults").and_then(|d| d.get("model")).and_then(Value::as_str).map(String::from);
    let default_on_failure = raw.get("defaults").and_then(|d| d.get("onFailure")).cloned();

    let Some(hooks) = raw.get_mut("hooks").and_then(Value::as_sequence_mut) else {
        return Ok(());
    };

    for (index, hook) in hooks.iter_mut().enumerate() {
        validate_and_merge_rule(hook, index, default_model.as_deref(), default_on_failure.as_ref())?;
    }
    Ok(())
}

fn validate_and_merge_rule(
    hook: &mut Value,
    index: usize,
    default_model: Option<&str>,
    default_on_failure: Option<&Value>,
) -> Result<(), ConfigError> {
    let name = hook.get("name").and_then(Value::as_str).map(String::from);
    let label = name.unwrap_or_else(|| format!("(unnamed at index {index})"));

    validate_points(hook, &label, index)?;
    let action = validate_action(hook, &label, index)?;
    merge_model_default(hook, default_model);
    merge_on_failure_default(hook, default_on_failure, &label, index)?;
    validate_target_requirement(hook, &label, index, &action)?;
    validate_match(hook, &label, index)?;
    Ok(())
}

fn validate_points(hook: &Value, label: &str, index: usize) -> Result<(), ConfigError> {
    let points: Vec<&str> = match hook.get("point") {
        Some(Value::String(s)) => vec![s.as_str()],
        Some(Value::Sequence(seq)) => seq.iter().filter_map(Value::as_str).collect(),
        _ => {
            return Err(ConfigError::Parse(format!("rule {label} ({index}): missing required field `point`")))
        }
    };
    for point in points {
        point
            .parse::<HookPoint>()
            .map_err(|_| ConfigError::UnknownPoint { rule: label.to_string(), index, point: point.to_string() })?;
    }
    Ok(())
}

fn validate_action(hook: &Value, label: &str, index: usize) -> Result<String, ConfigError> {
    let action = hook
        .get("action")
        .and_then(Value::as_str)
        .ok_or_else(|| ConfigError::Parse(format!("rule {label} ({index}): missing required field `action`")))?
        .to_string();
    if !KNOWN_ACTIONS.contains(&action.as_str()) {
        return Err(ConfigError::UnknownAction { rule: label.to_string(), index, action });
    }
    Ok(action)
}

fn merge_model_default(hook: &mut Value, default_model: Option<&str>) {
    if hook.get("model").and_then(Value::as_str).is_some() {
        return;
    }
    let Some(model) = default_model else { return };
    if let Some(map) = hook.as_mapping_mut() {
        map.insert(Value::String("model".to_string()), Value::String(model.to_string()));
    }
}

fn merge_on_failure_default(
    hook: &mut Value,
    default_on_failure: Option<&Value>,
    label: &str,
    index: usize,
) -> Result<(), ConfigError> {
    if hook.get("onFailure").is_none() {
        if let Some(default) = default_on_failure {
            if let Some(map) = hook.as_mapping_mut() {
                map.insert(Value::String("onFailure".to_string()), default.clone());
            }
        }
    }

    let Some(on_failure) = hook.get("onFailure") else { return Ok(()) };
    let of_action = on_failure.get("action").and_then(Value::as_str).unwrap_or("continue");
    let max_retries = on_failure.get("maxRetries").and_then(Value::as_u64).unwrap_or(0);
    if of_action == "retry" && max_retries == 0 {
        return Err(ConfigError::RetryWithoutBudget { rule: label.to_string(), index });
    }
    Ok(())
}

fn validate_target_requirement(hook: &Value, label: &str, index: usize, action: &str) -> Result<(), ConfigError> {
    let needs_target = matches!(action, "log" | "inject_context" | "summarize_and_log" | "exec_script");
    if !needs_target {
        return Ok(());
    }
    let target_is_empty = hook
        .get("target")
        .and_then(Value::as_str)
        .map(|t| t.trim().is_empty())
        .unwrap_or(true);
    if target_is_empty {
        return Err(ConfigError::MissingTarget { rule: label.to_string(), index, action: action.to_string() });
    }
    if action == "summarize_and_log" && hook.get("model").and_then(Value::as_str).is_none() {
        return Err(ConfigError::MissingModel { rule: label.to_string(), index });
    }
    Ok(())
}

fn validate_match(hook: &Value, label: &str, index: usize) -> Result<(), ConfigError> {
    let Some(m) = hook.get("match") else { return Ok(()) };
    let Some(mapping) = m.as_mapping() else { return Ok(()) };
    for (key, _) in mapping {
        let key = key.as_str().unwrap_or_default();
        if !KNOWN_MATCH_KEYS.contains(&key) {
            return Err(ConfigError::UnknownMatchKey { rule: label.to_string(), index, key: key.to_string() });
        }
    }
    if let Some(pattern) = mapping.get("commandPattern").and_then(Value::as_str) {
        regex::Regex::new(pattern)
            .map_err(|e| ConfigError::BadRegex { rule: label.to_string(), index, source: e.to_string() })?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
