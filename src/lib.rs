//! LAPKES library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

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
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use crate::core::context::AppContext;
use crate::core::users::require_session;
use errors::AppResult;

/// Commands usable without logging in.
fn is_public(cmd: &Commands) -> bool {
    matches!(
        cmd,
        Commands::Init { .. } | Commands::Config { .. } | Commands::Login { .. } | Commands::Logout
    )
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { demo } => return commands::init::handle(cli, *demo),
        Commands::Config { .. } => return commands::config::handle(&cli.command, cfg),
        _ => {}
    }

    let mut ctx = AppContext::open(cfg, cli.offline)?;
    if !is_public(&cli.command) {
        require_session(&ctx.pool.conn)?;
    }

    match &cli.command {
        Commands::Init { .. } | Commands::Config { .. } => Ok(()),
        Commands::Login { username, password } => {
            commands::session::login(&mut ctx, username, password)
        }
        Commands::Logout => commands::session::logout(&mut ctx),
        Commands::Dashboard => commands::dashboard::handle(&mut ctx),
        Commands::School { action } => commands::school::handle(action, &mut ctx),
        Commands::Teacher { action } => commands::staff::teacher(action, &mut ctx),
        Commands::Subject { action } => commands::staff::subject(action, &mut ctx),
        Commands::Class { action } => commands::staff::class(action, &mut ctx),
        Commands::Assignment { action } => commands::staff::assignment(action, &mut ctx),
        Commands::Student { action } => commands::students::student(action, &mut ctx),
        Commands::Transfer { action } => commands::students::transfer(action, &mut ctx),
        Commands::Achievement { action } => commands::records::achievement(action, &mut ctx),
        Commands::Violation { action } => commands::records::violation(action, &mut ctx),
        Commands::User { action } => commands::users::user(action, &mut ctx),
        Commands::Calendar { action } => commands::users::calendar(action, &mut ctx),
        Commands::Attendance { action } => commands::attendance::handle(action, &mut ctx),
        Commands::Recap { action } => commands::recap::handle(action, &mut ctx),
        Commands::Sync { action } => commands::sync::handle(action, &mut ctx),
        Commands::Log { print } => commands::log::handle(*print, &mut ctx),
        Commands::Backup {
            file,
            compress,
            force,
        } => commands::backup::handle(file, *compress, *force, cfg, &mut ctx),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ apply the command-line DB override
    if let Some(custom_db) = &cli.db {
        cfg.database = Config::resolve_database(custom_db)
            .to_string_lossy()
            .to_string();
    }

    // test mode: no simulated network latency
    if cli.test {
        cfg.sync_delay_ms = 0;
    }

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
