use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

const SCHEMA_VERSION: &str = "20240701_0001_collections_store";
const SYNC_QUEUE_INDEX_VERSION: &str = "20240915_0002_sync_queue_created_index";

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Key/value store: one JSON document per named collection.
fn create_collections_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS collections (
            key         TEXT PRIMARY KEY,
            value       TEXT NOT NULL,
            updated_at  TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Changes recorded while offline, waiting for `sync now`.
fn create_sync_queue_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS sync_queue (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            collection  TEXT NOT NULL,
            operation   TEXT NOT NULL CHECK(operation IN ('add','edit','del','import')),
            record_id   INTEGER NOT NULL DEFAULT 0,
            created_at  TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn migrate_add_sync_queue_index(conn: &Connection) -> Result<()> {
    if migration_applied(conn, SYNC_QUEUE_INDEX_VERSION)? {
        return Ok(());
    }

    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_sync_queue_created ON sync_queue(created_at, id);",
    )?;
    mark_applied(conn, SYNC_QUEUE_INDEX_VERSION, "Indexed sync_queue by creation time")?;

    success(format!("Migration applied: {}", SYNC_QUEUE_INDEX_VERSION));
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db() and by every command that opens the store.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table (migration markers live there)
    ensure_log_table(conn)?;

    // 2) Base schema
    let fresh = !table_exists(conn, "collections")?;
    create_collections_table(conn)?;
    create_sync_queue_table(conn)?;

    if fresh && !migration_applied(conn, SCHEMA_VERSION)? {
        mark_applied(conn, SCHEMA_VERSION, "Created collections and sync_queue tables")?;
        success("Created collections store (modern schema).");
    }

    // 3) Incremental migrations
    migrate_add_sync_queue_index(conn)?;

    Ok(())
}
