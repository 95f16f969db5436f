mod cli;
mod config;
mod content;
mod db;
mod insights;
mod models;
mod services;
mod tui;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;
use rusqlite::Connection;

use cli::args::{Cli, Commands};
use cli::handlers;
use config::AppConfig;
use db::migrations::run_migrations;
use db::repository::ProfileRepo;
use db::KvStore;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Loading config")?;

    // Ensure data directory exists and open DB
    AppConfig::ensure_data_dir()?;
    let db_path = AppConfig::db_path()?;
    let conn = Connection::open(&db_path)
        .with_context(|| format!("Opening database at {:?}", db_path))?;

    conn.execute_batch("PRAGMA journal_mode=WAL;")?;

    // Run migrations on every startup
    run_migrations(&conn)?;

    let store = KvStore::new(&conn);

    match cli.command {
        Some(Commands::Setup { reset }) => {
            handlers::handle_setup(&store, reset)?;
        }

        // Network and maintenance commands work without a profile
        Some(Commands::Weather) => handlers::handle_weather(&config)?,
        Some(Commands::Meditate { query }) => handlers::handle_meditate(&config, &query)?,
        Some(Commands::Chat) => handlers::handle_chat(&config)?,
        Some(Commands::Reset { yes }) => handlers::handle_reset(&store, yes)?,

        Some(cmd) => {
            ensure_setup(&store)?;
            match cmd {
                Commands::Mood { action } => handlers::handle_mood(&store, &action)?,
                Commands::Journal { action } => handlers::handle_journal(&store, &action)?,
                Commands::Challenge => handlers::handle_challenge(&store)?,
                Commands::Phrase => handlers::handle_phrase(&store)?,
                Commands::Export { month } => handlers::handle_export(&store, month.as_deref())?,
                Commands::Setup { .. }
                | Commands::Weather
                | Commands::Meditate { .. }
                | Commands::Chat
                | Commands::Reset { .. } => unreachable!(),
            }
        }

        // No subcommand → launch TUI
        None => {
            ensure_setup(&store)?;
            tui::app::run(&store)?;
        }
    }

    Ok(())
}

/// Run the setup wizard when no name has been stored yet.
fn ensure_setup(store: &KvStore) -> Result<()> {
    if ProfileRepo::user_name(store)?.is_none() {
        eprintln!("No profile found. Running setup...");
        eprintln!();
        handlers::handle_setup(store, false)?;
    }
    Ok(())
}
