//! rReserve library root.
//! Exposes the slot calculator, form state, availability checks, backend
//! client and the CLI dispatcher.

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Slots { .. } => cli::commands::slots::handle(&cli.command),
        Commands::Hours { .. } => cli::commands::hours::handle(&cli.command),
        Commands::Compose { .. } => cli::commands::compose::handle(&cli.command),
        Commands::Check { .. } => cli::commands::check::handle(&cli.command, cfg),
        Commands::Reserve { .. } => cli::commands::reserve::handle(&cli.command, cfg),
        Commands::Ping => cli::commands::ping::handle(cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    if let Some(api) = &cli.api {
        cfg.api_base = api.clone();
    }

    dispatch(&cli, &cfg)
}
