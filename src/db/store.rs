//! Key/value persistence: one JSON document per named collection.

use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Raw JSON stored under `key`, if any.
pub fn load_raw(conn: &Connection, key: &str) -> AppResult<Option<String>> {
    let raw = conn
        .query_row(
            "SELECT value FROM collections WHERE key = ?1",
            [key],
            |row| row.get::<_, String>(0),
        )
        .optional()?;
    Ok(raw)
}

/// Load and deserialize the value stored under `key`.
///
/// `Ok(None)` when the key was never written.
pub fn load_value<T: DeserializeOwned>(conn: &Connection, key: &str) -> AppResult<Option<T>> {
    match load_raw(conn, key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Serialize `value` and write it under `key` (last write wins).
pub fn save_value<T: Serialize + ?Sized>(conn: &Connection, key: &str, value: &T) -> AppResult<()> {
    let json = serde_json::to_string(value)?;
    let now = Local::now().to_rfc3339();

    conn.execute(
        "INSERT INTO collections (key, value, updated_at)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        params![key, json, now],
    )?;
    Ok(())
}

pub fn delete_value(conn: &Connection, key: &str) -> AppResult<bool> {
    let n = conn.execute("DELETE FROM collections WHERE key = ?1", [key])?;
    Ok(n > 0)
}

