// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `agctl fire` — fires a synthetic event at a hook point through a
//! loaded config and prints the resulting `HookResult` list as JSON.
//! For local policy testing without a live host runtime.

use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use ag_core::event::HookEvent;
use ag_core::hook_point::HookPoint;
use anyhow::{Context, Result};

use crate::adapters::build_engine;

pub async fn run(config_path: &Path, point: &str, event_path: &Path) -> Result<()> {
    let point = HookPoint::from_str(point).map_err(|p| anyhow::anyhow!("unknown hook point {p:?}"))?;
    let event_json = read_event_source(event_path)?;
    let event: HookEvent = serde_json::from_str(&event_json).context("parsing event JSON")?;

    let engine = build_engine(config_path)?;
    let results = engine.execute(point, &event).await;
    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}

fn read_event_source(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).context("reading event JSON from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("reading event file {}", path.display()))
    }
}

#[cfg(test)]
#[path = "fire_tests.rs"]
mod tests;
