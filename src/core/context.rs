//! Per-invocation application context: the open store, the loaded state and
//! the connectivity flags.

use crate::config::Config;
use crate::core::crud::Change;
use crate::core::state::{AppState, Collection};
use crate::core::sync::{self, SimulatedTransport, SyncProgress, SyncStatus};
use crate::db::initialize::init_db;
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::db::sync_queue;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, warning};
use std::collections::BTreeSet;

pub struct AppContext {
    pub pool: DbPool,
    pub state: AppState,
    pub online: bool,
    pub auto_sync: bool,
    pub sync_delay_ms: u64,
    pub items_per_page: usize,
}

impl AppContext {
    /// Open the configured database, apply pending migrations and load
    /// every collection.
    pub fn open(cfg: &Config, offline: bool) -> AppResult<Self> {
        let pool = DbPool::new(&cfg.database)?;
        Self::from_pool(pool, cfg, offline)
    }

    pub fn from_pool(pool: DbPool, cfg: &Config, offline: bool) -> AppResult<Self> {
        init_db(&pool.conn)?;
        let state = AppState::load(&pool.conn);

        Ok(Self {
            pool,
            state,
            online: cfg.online && !offline,
            auto_sync: cfg.auto_sync,
            sync_delay_ms: cfg.sync_delay_ms,
            items_per_page: cfg.items_per_page.max(1),
        })
    }

    /// Persist what `changes` touched, record them in the audit log and
    /// queue them for synchronization.
    ///
    /// Write failures are reported and swallowed: the in-memory state stays
    /// authoritative for the rest of the invocation.
    pub fn commit(&mut self, changes: &[Change]) {
        if changes.is_empty() {
            return;
        }

        let touched: BTreeSet<usize> = changes
            .iter()
            .filter_map(|c| Collection::ALL.iter().position(|k| *k == c.collection))
            .collect();

        let conn = &self.pool.conn;
        for idx in touched {
            let collection = Collection::ALL[idx];
            if let Err(e) = self.state.save(conn, collection) {
                error(format!(
                    "Error saving collection \"{}\": {}",
                    collection.key(),
                    e
                ));
            }
        }

        for c in changes {
            let op = c.operation.as_str();
            let key = c.collection.key();

            ttlog_or_warn(conn, op, key, &format!("{op} {key} #{}", c.record_id));
            if let Err(e) = sync_queue::enqueue(conn, key, op, c.record_id) {
                error(format!("Failed to queue change for sync: {e}"));
            }
        }

        if self.online && self.auto_sync {
            self.flush_quietly();
        }
    }

    /// Automatic flush after a change; a failure only leaves the queue
    /// pending.
    fn flush_quietly(&mut self) {
        let mut transport = SimulatedTransport::new(self.sync_delay_ms);
        let result = sync::sync_now(
            &self.pool.conn,
            self.online,
            &mut transport,
            |_: SyncStatus, _: SyncProgress| {},
        );

        match result {
            Ok(report) if report.synced > 0 => {
                info(format!("Synchronized {} change(s)", report.synced));
            }
            Ok(_) => {}
            Err(e) => warning(format!("Automatic sync failed: {e}")),
        }
    }
}
