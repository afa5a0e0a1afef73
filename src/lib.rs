//! rPayroll library root.
//! Exposes the CLI parser, the report pipeline and a high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::PathBuf;

/// Configuration file in use: `--config-file` or the standard location.
pub fn config_path(cli: &Cli) -> PathBuf {
    cli.config_file
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::config_file)
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Stats { .. } => cli::commands::stats::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load_from(&config_path(&cli))?;

    // 3️⃣ command-line overrides
    if let Some(n) = cli.records {
        cfg.record_count = n;
    }
    if cli.seed.is_some() {
        cfg.seed = cli.seed;
    }

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
