//! movielist library root.
//! Exposes the CLI parser, the high-level run() function and the persistence
//! and interaction layers.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(command: Option<&Commands>, cfg: &Config) -> AppResult<()> {
    match command {
        None | Some(Commands::Menu) => cli::commands::menu::handle(cfg),
        Some(Commands::Init) => cli::commands::init::handle(cfg),
        Some(cmd @ Commands::Log { .. }) => cli::commands::log::handle(cmd, cfg),
        Some(cmd @ Commands::Db { .. }) => cli::commands::db::handle(cmd, cfg),
        Some(cmd @ Commands::Export { .. }) => cli::commands::export::handle(cmd, cfg),
        Some(cmd) => cli::commands::movies::handle(cmd, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // `--db` wins; otherwise DATABASE_URL must be set
    let cfg = Config::resolve(cli.db.as_deref())?;

    dispatch(cli.command.as_ref(), &cfg)
}
