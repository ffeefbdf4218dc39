// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Indexes validated rules by hook point for O(1) lookup, preserving
//! declaration order.

use std::collections::HashMap;
use std::sync::Arc;

use ag_core::hook_point::HookPoint;
use ag_core::rule::HookRule;

/// `Map<HookPoint, Rule[]>` in declaration order. A rule bound to
/// multiple points is appended to each bucket in its declared order, so
/// within a single point, the order rules are evaluated in always
/// matches the order they were written in the config file.
#[derive(Debug, Default, Clone)]
pub struct RuleIndex {
    by_point: HashMap<HookPoint, Vec<Arc<HookRule>>>,
}

impl RuleIndex {
    /// Build an index from the config's ordered `hooks` list.
    pub fn build(hooks: &[HookRule]) -> Self {
        let mut by_point: HashMap<HookPoint, Vec<Arc<HookRule>>> = HashMap::new();
        for rule in hooks {
            let rule = Arc::new(rule.clone());
            for point in &rule.point {
                by_point.entry(*point).or_default().push(rule.clone());
            }
        }
        Self { by_point }
    }

    /// The ordered rule list bound to `point`, or an empty slice if none.
    pub fn rules_for(&self, point: HookPoint) -> &[Arc<HookRule>] {
        self.by_point.get(&point).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
#[path = "index_tests.rs"]
mod tests;
