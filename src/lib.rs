//! StaySync library root.
//! Exposes the CLI parser, the high-level run() function and the core modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod store;
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
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Status => cli::commands::status::handle(cfg),
        Commands::Mode { .. } => cli::commands::mode::handle(&cli.command, cfg),
        Commands::Setup => cli::commands::setup::handle(cfg),
        Commands::Login { .. } | Commands::Logout => {
            cli::commands::session::handle(&cli.command, cfg)
        }
        Commands::Reset { .. } => cli::commands::reset::handle(&cli.command, cfg),
        Commands::Rooms { .. } => cli::commands::rooms::handle(&cli.command, cfg),
        Commands::Bookings { .. } => cli::commands::bookings::handle(&cli.command, cfg),
        Commands::Guests { .. } => cli::commands::guests::handle(&cli.command, cfg),
        Commands::Dashboard => cli::commands::dashboard::handle(cfg),
        Commands::Ask { .. } => cli::commands::ask::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load();

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
