// SPDX-FileCopyrightText: 2026 Stan Grams <sjg@haxx.space>
//
// SPDX-License-Identifier: BSD-2-Clause

mod analytics;
mod api;
mod commands;
mod config;
mod forms;
mod session;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::info;

use crave_app::init_logging;

use commands::{AddArgs, LoginArgs, OpenArgs, PageArgs, RegisterArgs, ViewArgs};
use config::ClientConfig;

const PKG_DESCRIPTION: &str = concat!(env!("CARGO_PKG_NAME"), " - creator food discovery client");

#[derive(Debug, Parser)]
#[command(version = env!("CARGO_PKG_VERSION"), about = PKG_DESCRIPTION)]
struct Cli {
    /// Path to configuration file
    #[arg(long = "config", short = 'C', value_name = "FILE", global = true)]
    config: Option<PathBuf>,
    /// Print example configuration and exit
    #[arg(long = "print-config")]
    print_config: bool,
    /// REST backend base URL (overrides config)
    #[arg(long = "api-url", global = true)]
    api_url: Option<String>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create a creator account and start a session
    Register(RegisterArgs),
    /// Sign in to an existing account
    Login(LoginArgs),
    /// Drop the stored session
    Logout,
    /// Show the signed-in creator and their counters
    Whoami,
    /// Publish a new recommendation
    Add(AddArgs),
    /// List your own recommendations with engagement counters
    List(PageArgs),
    /// Browse a creator's public page, optionally filtered
    View(ViewArgs),
    /// Resolve an outbound link and record the click
    Open(OpenArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.print_config {
        println!("{}", ClientConfig::example_toml());
        return ExitCode::SUCCESS;
    }

    let loaded = match &cli.config {
        Some(path) => ClientConfig::load_from_file(path).map(|cfg| (cfg, Some(path.clone()))),
        None => ClientConfig::load_from_default_paths(),
    };
    let (cfg, config_path) = match loaded {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    init_logging(cfg.general.log_level.as_deref());

    if let Some(path) = &config_path {
        info!("Loaded configuration from {}", path.display());
    }

    if let Err(e) = cfg.validate() {
        eprintln!("Invalid configuration: {e}");
        return ExitCode::FAILURE;
    }

    let Some(command) = cli.command else {
        eprintln!("No command given (try --help)");
        return ExitCode::FAILURE;
    };

    // Resolution order for the backend URL: CLI > config.
    let base_url = cli
        .api_url
        .unwrap_or_else(|| cfg.api.base_url.clone());

    let result = match command {
        Command::Register(args) => commands::register(&base_url, args).await,
        Command::Login(args) => commands::login(&base_url, args).await,
        Command::Logout => commands::logout(),
        Command::Whoami => commands::whoami(),
        Command::Add(args) => commands::add(&base_url, args).await,
        Command::List(args) => commands::list(&base_url, &cfg, args).await,
        Command::View(args) => commands::view(&base_url, &cfg, args).await,
        Command::Open(args) => commands::open(&base_url, &cfg, args).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
