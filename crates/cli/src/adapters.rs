// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wires up the real collaborator adapters from environment variables
//! and builds an `Engine` from a config path. The only place `agctl`
//! touches concrete adapter types — `commands/*` only see `Engine`.

use std::path::Path;
use std::sync::Arc;

use ag_adapters::session_store::DEFAULT_SESSION_FILE;
use ag_adapters::{FileSessionStore, HttpLlmAdapter, TelegramChannelAdapter};
use ag_core::error::ConfigError;
use ag_engine::{ConfigSource, Engine};

const DEFAULT_LLM_BASE_URL: &str = "https://api.openai.com/v1";

pub type CliEngine = Engine<TelegramChannelAdapter, HttpLlmAdapter, FileSessionStore>;

/// Builds an `Engine` wired to real adapters, configured entirely from
/// the environment (`AGCTL_TELEGRAM_BOT_TOKEN`, `AGCTL_LLM_BASE_URL`,
/// `AGCTL_LLM_API_KEY`, `AGCTL_SESSION_FILE`). Missing credentials are
/// not a load-time error: `block`'s `notifyUser` or `summarize_and_log`
/// simply fail at call time, subject to the rule's `onFailure` policy.
pub fn build_engine(config_path: &Path) -> Result<CliEngine, ConfigError> {
    let bot_token = std::env::var("AGCTL_TELEGRAM_BOT_TOKEN").unwrap_or_default();
    let llm_base_url =
        std::env::var("AGCTL_LLM_BASE_URL").unwrap_or_else(|_| DEFAULT_LLM_BASE_URL.to_string());
    let llm_api_key = std::env::var("AGCTL_LLM_API_KEY").unwrap_or_default();
    let session_file =
        std::env::var("AGCTL_SESSION_FILE").unwrap_or_else(|_| DEFAULT_SESSION_FILE.to_string());

    Engine::load(
        ConfigSource::Path(config_path.to_path_buf()),
        Arc::new(TelegramChannelAdapter::new(bot_token)),
        HttpLlmAdapter::new(llm_base_url, llm_api_key),
        Arc::new(FileSessionStore::new(session_file)),
    )
}
