//! Connectivity indicator and the offline change queue.
//!
//! Every committed change is queued locally. `sync_now` pushes the queue in
//! FIFO order through a [`SyncTransport`]; delivered items leave the queue,
//! the first failure stops the flush and leaves the rest queued.

use crate::db::log::ttlog;
use crate::db::store;
use crate::db::sync_queue::{self, PendingItem};
use crate::errors::{AppError, AppResult};
use chrono::Local;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::thread;
use std::time::Duration;

const SYNC_STATE_KEY: &str = "syncState";

/// Outcome of the last flush, persisted between invocations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncState {
    #[serde(default)]
    pub failed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_synced_at: Option<String>,
}

impl SyncState {
    pub fn load(conn: &Connection) -> AppResult<Self> {
        Ok(store::load_value(conn, SYNC_STATE_KEY)?.unwrap_or_default())
    }

    pub fn save(&self, conn: &Connection) -> AppResult<()> {
        store::save_value(conn, SYNC_STATE_KEY, self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStatus {
    Idle,
    Pending,
    Syncing,
    Failed,
}

impl fmt::Display for SyncStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SyncStatus::Idle => "idle",
            SyncStatus::Pending => "pending",
            SyncStatus::Syncing => "syncing",
            SyncStatus::Failed => "failed",
        })
    }
}

/// Snapshot shown by `sync status` and the dashboard.
#[derive(Debug, Clone)]
pub struct SyncOverview {
    pub online: bool,
    pub status: SyncStatus,
    pub pending: usize,
    pub state: SyncState,
}

pub fn overview(conn: &Connection, online: bool) -> AppResult<SyncOverview> {
    let pending = sync_queue::count(conn)?;
    let state = SyncState::load(conn)?;

    let status = if state.failed {
        SyncStatus::Failed
    } else if pending > 0 {
        SyncStatus::Pending
    } else {
        SyncStatus::Idle
    };

    Ok(SyncOverview {
        online,
        status,
        pending,
        state,
    })
}

/// Remote end of the synchronization.
pub trait SyncTransport {
    fn push(&mut self, item: &PendingItem) -> Result<(), String>;
}

/// Stand-in for a real backend: waits `delay` per item, always succeeds.
pub struct SimulatedTransport {
    pub delay: Duration,
}

impl SimulatedTransport {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
        }
    }
}

impl SyncTransport for SimulatedTransport {
    fn push(&mut self, _item: &PendingItem) -> Result<(), String> {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        Ok(())
    }
}

/// Progress of a running flush.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncProgress {
    pub current: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncReport {
    pub synced: usize,
}

/// Push every queued item through `transport`.
///
/// Refused when offline. On failure the state is marked failed, the
/// undelivered items stay queued and the error is returned.
pub fn sync_now<T, F>(
    conn: &Connection,
    online: bool,
    transport: &mut T,
    mut on_progress: F,
) -> AppResult<SyncReport>
where
    T: SyncTransport + ?Sized,
    F: FnMut(SyncStatus, SyncProgress),
{
    if !online {
        return Err(AppError::Offline(
            "synchronization needs a connection".to_string(),
        ));
    }

    let items = sync_queue::pending(conn)?;
    let total = items.len();
    let mut state = SyncState::load(conn)?;

    for (i, item) in items.iter().enumerate() {
        on_progress(
            SyncStatus::Syncing,
            SyncProgress {
                current: i + 1,
                total,
            },
        );

        if let Err(msg) = transport.push(item) {
            on_progress(
                SyncStatus::Failed,
                SyncProgress {
                    current: i,
                    total,
                },
            );
            state.failed = true;
            state.last_error = Some(msg.clone());
            state.save(conn)?;
            ttlog(
                conn,
                "sync",
                &item.collection,
                &format!("Sync failed at item {} of {}: {}", i + 1, total, msg),
            )?;
            return Err(AppError::Sync(msg));
        }
        sync_queue::remove(conn, item.id)?;
    }

    state.failed = false;
    state.last_error = None;
    state.last_synced_at = Some(Local::now().to_rfc3339());
    state.save(conn)?;

    if total > 0 {
        ttlog(conn, "sync", "queue", &format!("Synchronized {total} change(s)"))?;
    }

    on_progress(SyncStatus::Idle, SyncProgress { current: total, total });
    Ok(SyncReport { synced: total })
}
