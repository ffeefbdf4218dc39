// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `agctl watch` — watches a policy config file for changes and
//! reloads a running engine when it does, logging each reload.
//! Fail-safe: a config that fails validation leaves the previous one
//! live (`Engine::reload`'s own contract).

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use notify::{RecursiveMode, Watcher};

use crate::adapters::build_engine;

pub async fn run(config_path: &Path) -> Result<()> {
    let engine = Arc::new(build_engine(config_path)?);
    tracing::info!(path = %config_path.display(), "watching config for changes");

    let reload_engine = engine.clone();
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| match res {
        Ok(_) => match reload_engine.reload() {
            Ok(()) => tracing::info!("config reloaded"),
            Err(e) => tracing::warn!(error = %e, "config reload failed, keeping previous config"),
        },
        Err(e) => tracing::warn!(error = %e, "config watcher error"),
    })
    .context("failed to start config file watcher")?;
    watcher.watch(config_path, RecursiveMode::NonRecursive).context("failed to watch config path")?;

    tokio::signal::ctrl_c().await.context("waiting for ctrl-c")?;
    tracing::info!("shutting down watcher");
    Ok(())
}
