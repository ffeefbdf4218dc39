// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `agctl validate` — loads and validates a policy config, surfacing
//! `ConfigError`s with their rule name/index context.

use std::collections::HashSet;
use std::path::Path;

use anyhow::Result;

pub fn run(config_path: &Path) -> Result<()> {
    let config = ag_config::loader::load_path(config_path)?;
    println!(
        "{} hook(s) valid across {} hook point(s)",
        config.hooks.len(),
        distinct_point_count(&config)
    );
    Ok(())
}

fn distinct_point_count(config: &ag_core::Config) -> usize {
    let mut points = HashSet::new();
    for hook in &config.hooks {
        for point in &hook.point {
            points.insert(*point);
        }
    }
    points.len()
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
