use crate::cli::parser::SyncAction;
use crate::core::context::AppContext;
use crate::core::sync::{self, SimulatedTransport, SyncProgress, SyncStatus};
use crate::errors::AppResult;
use crate::ui::messages::{header, info, progress, progress_done, success};
use crate::utils::colors::{RESET, color_for_sync};

pub fn handle(action: &SyncAction, ctx: &mut AppContext) -> AppResult<()> {
    match action {
        SyncAction::Status => {
            let o = sync::overview(&ctx.pool.conn, ctx.online)?;
            header("Synchronization");
            println!(
                "{:<14}{}",
                "Connection",
                if o.online { "online" } else { "offline" }
            );
            println!(
                "{:<14}{}{}{}",
                "Status",
                color_for_sync(o.status),
                o.status,
                RESET
            );
            println!("{:<14}{}", "Pending", o.pending);
            if let Some(e) = &o.state.last_error {
                println!("{:<14}{}", "Last error", e);
            }
            if let Some(t) = &o.state.last_synced_at {
                println!("{:<14}{}", "Last sync", t);
            }
        }

        SyncAction::Now => {
            let mut transport = SimulatedTransport::new(ctx.sync_delay_ms);
            let report = sync::sync_now(
                &ctx.pool.conn,
                ctx.online,
                &mut transport,
                |status: SyncStatus, p: SyncProgress| match status {
                    SyncStatus::Syncing => progress("Syncing", p.current, p.total),
                    SyncStatus::Failed => progress_done(),
                    _ => {}
                },
            )?;

            if report.synced == 0 {
                info("Nothing to synchronize.");
            } else {
                progress_done();
                success(format!("Synchronized {} change(s).", report.synced));
            }
        }
    }
    Ok(())
}
