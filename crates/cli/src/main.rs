// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `agctl`: the Host Adapter binary. Loads a policy config, validates
//! it, fires synthetic events through it for local policy testing, and
//! watches the config file for changes, reloading a running `Engine`
//! when it does.

mod adapters;
mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "agctl", version, about = "Lifecycle gate engine control")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load and validate a policy config.
    Validate {
        /// Path to the YAML policy file.
        config: PathBuf,
    },
    /// Fire a synthetic event at a hook point through a loaded config
    /// and print the resulting HookResult list as JSON.
    Fire {
        /// Path to the YAML policy file.
        config: PathBuf,
        /// Hook point to fire at (e.g. `turn:tool:pre`).
        point: String,
        /// Path to a JSON file describing the HookEvent, or `-` for stdin.
        event: PathBuf,
    },
    /// Watch a config file and reload a running engine on changes.
    /// Blocks until interrupted.
    Watch {
        /// Path to the YAML policy file.
        config: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Validate { config } => commands::validate::run(&config),
        Command::Fire { config, point, event } => commands::fire::run(&config, &point, &event).await,
        Command::Watch { config } => commands::watch::run(&config).await,
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
