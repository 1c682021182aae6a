use crate::core::context::AppContext;
use crate::core::dashboard;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{RESET, color_for_sync};
use crate::utils::date::today;
use crate::utils::formatting::bold;

pub fn handle(ctx: &mut AppContext) -> AppResult<()> {
    let stats = dashboard::collect(&ctx.state, &ctx.pool.conn, ctx.online, today())?;

    let name = if stats.school_name.is_empty() {
        "(school not configured)".to_string()
    } else {
        stats.school_name.clone()
    };
    header(format!("Dashboard · {name}"));

    println!("{:<18}{}", "Active students", bold(&stats.active_students.to_string()));
    println!("{:<18}{}", "Teachers", stats.teachers);
    println!("{:<18}{}", "Classes", stats.classes);
    println!("{:<18}{}", "Subjects", stats.subjects);
    println!("{:<18}{}", "Achievements", stats.achievements);
    println!("{:<18}{}", "Violations", stats.violations);

    let sync = &stats.sync;
    println!();
    println!(
        "{:<18}{}",
        "Connection",
        if sync.online { "online" } else { "offline" }
    );
    println!(
        "{:<18}{}{}{} ({} pending)",
        "Sync",
        color_for_sync(sync.status),
        sync.status,
        RESET,
        sync.pending
    );

    if !stats.upcoming.is_empty() {
        println!("\nUpcoming events:");
        for e in &stats.upcoming {
            println!("  {}  {} [{}]", e.date, e.title, e.status);
        }
    }

    Ok(())
}
