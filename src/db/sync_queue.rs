//! Durable FIFO of local changes waiting to be synchronized.

use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, Row, params};

#[derive(Debug, Clone, PartialEq)]
pub struct PendingItem {
    pub id: i64,
    pub collection: String,
    pub operation: String,
    pub record_id: i64,
    pub created_at: String,
}

fn map_row(row: &Row<'_>) -> rusqlite::Result<PendingItem> {
    Ok(PendingItem {
        id: row.get(0)?,
        collection: row.get(1)?,
        operation: row.get(2)?,
        record_id: row.get(3)?,
        created_at: row.get(4)?,
    })
}

pub fn enqueue(conn: &Connection, collection: &str, operation: &str, record_id: i64) -> AppResult<i64> {
    let now = Local::now().to_rfc3339();
    conn.execute(
        "INSERT INTO sync_queue (collection, operation, record_id, created_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![collection, operation, record_id, now],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Pending items, oldest first.
pub fn pending(conn: &Connection) -> AppResult<Vec<PendingItem>> {
    let mut stmt = conn.prepare(
        "SELECT id, collection, operation, record_id, created_at
         FROM sync_queue
         ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], map_row)?;

    let mut items = Vec::new();
    for r in rows {
        items.push(r?);
    }
    Ok(items)
}

pub fn count(conn: &Connection) -> AppResult<usize> {
    let n: i64 = conn.query_row("SELECT COUNT(*) FROM sync_queue", [], |row| row.get(0))?;
    Ok(n as usize)
}

pub fn remove(conn: &Connection, id: i64) -> AppResult<()> {
    conn.execute("DELETE FROM sync_queue WHERE id = ?1", [id])?;
    Ok(())
}
