// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Quire - a pluggable publishing backend.
//!
//! This is the binary entry point.

mod plugins;
mod serve;
mod status;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use quire_config::{ConfigError, QuireConfig};

/// Quire - a pluggable publishing backend.
#[derive(Parser, Debug)]
#[command(name = "quire", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the HTTP gateway.
    Serve,
    /// Query a running gateway's health endpoint.
    Status {
        /// Print machine-readable JSON.
        #[arg(long)]
        json: bool,
    },
    /// List the plugins the configuration enables.
    Plugins,
    /// Validate configuration and resolve the publication without serving.
    CheckConfig,
    /// Print a fresh hex-encoded token signing key.
    Keygen,
}

fn load_config(path: Option<&Path>) -> Result<QuireConfig, Vec<ConfigError>> {
    match path {
        Some(path) => quire_config::load_and_validate_path(path),
        None => quire_config::load_and_validate(),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("quire: use --help for available commands");
        return;
    };

    if let Commands::Keygen = command {
        println!("{}", serve::generate_signing_key());
        return;
    }

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(errors) => {
            quire_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    let result = match command {
        Commands::Serve => serve::run_serve(config).await,
        Commands::Status { json } => status::run_status(&config, json).await,
        Commands::Plugins => plugins::run_plugins(&config),
        Commands::CheckConfig => plugins::run_check_config(&config),
        Commands::Keygen => Ok(()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
