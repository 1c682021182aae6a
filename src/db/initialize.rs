use crate::db::migrate::run_pending_migrations;
use crate::errors::{AppError, AppResult};
use rusqlite::Connection;
use std::time::Duration;

/// Tables every command reads or writes.
const REQUIRED_TABLES: [&str; 3] = ["collections", "sync_queue", "log"];

/// Open-time setup of the store: wait on a locked file instead of failing,
/// run the pending migrations and check that the schema is complete.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.busy_timeout(Duration::from_secs(5))?;
    run_pending_migrations(conn)?;

    for table in REQUIRED_TABLES {
        let found: i64 = conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            [table],
            |row| row.get(0),
        )?;
        if found == 0 {
            return Err(AppError::Migration(format!(
                "table '{table}' is missing after migration"
            )));
        }
    }
    Ok(())
}
