// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Evaluates a rule's `match` predicate against a [`HookEvent`].
//!
//! Every present key must hold (AND); an absent key contributes nothing.
//! `commandPattern` is validated at config load (see [`crate::loader`]),
//! so a [`Regex`] compile failure can never surface here.

use ag_core::event::HookEvent;
use ag_core::rule::Match;
use regex::Regex;

/// `true` iff every predicate present on `m` holds against `event`.
pub fn matches(m: &Match, event: &HookEvent) -> bool {
    if let Some(tool) = &m.tool {
        if event.tool_name.as_deref() != Some(tool.as_str()) {
            return false;
        }
    }

    if let Some(pattern) = &m.command_pattern {
        match event.command() {
            Some(command) => match Regex::new(pattern) {
                Ok(re) => {
                    if !re.is_match(command) {
                        return false;
                    }
                }
                Err(_) => return false,
            },
            None => return false,
        }
    }

    if let Some(topic_id) = m.topic_id {
        if event.topic_id != Some(topic_id) {
            return false;
        }
    }

    if let Some(is_sub_agent) = m.is_sub_agent {
        if event.is_subagent() != is_sub_agent {
            return false;
        }
    }

    if let Some(pattern) = &m.session_pattern {
        if !session_matches(pattern, &event.session_key) {
            return false;
        }
    }

    true
}

/// A `sessionPattern` is tried as a regex first — an unanchored regex
/// match on a literal string behaves exactly like a substring test, so
/// a plain string such as `"agent:main"` authored in YAML works either
/// way. Falling back to a literal substring test only kicks in for
/// strings that are not valid regexes at all.
fn session_matches(pattern: &str, session_key: &str) -> bool {
    match Regex::new(pattern) {
        Ok(re) => re.is_match(session_key),
        Err(_) => session_key.contains(pattern),
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
