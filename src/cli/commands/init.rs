use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::seed::demo_state;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::date::today;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database and its migrations
///  - the sample school when `--demo` is given
pub fn handle(cli: &Cli, demo: bool) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.as_deref(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    info("Initializing LAPKES…");
    if !cli.test {
        info(format!("Config file : {}", Config::config_file().display()));
    }
    info(format!("Database    : {}", &db_path));

    let pool = DbPool::new(&db_path)?;
    init_db(&pool.conn)?;
    success(format!("Database initialized at {}", &db_path));

    log::ttlog_or_warn(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    );

    if demo {
        let state = demo_state(today());
        state.save_all(&pool.conn)?;
        log::ttlog(&pool.conn, "init", "demo", "Sample school data loaded")?;
        success("Sample school data loaded.");
    }

    success("LAPKES initialization completed!");
    Ok(())
}
