use crate::core::context::AppContext;
use crate::core::users;
use crate::db::log::ttlog;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::io::{self, Write};

fn prompt(label: &str) -> AppResult<String> {
    print!("{label}: ");
    io::stdout().flush().ok();
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(answer.trim().to_string())
}

pub fn login(ctx: &mut AppContext, username: &Option<String>, password: &Option<String>) -> AppResult<()> {
    let username = match username {
        Some(u) => u.clone(),
        None => prompt("Username")?,
    };
    let password = match password {
        Some(p) => p.clone(),
        None => prompt("Password")?,
    };

    let session = users::login(&ctx.pool.conn, &username, &password)?;
    ttlog(&ctx.pool.conn, "login", &session.username, "Session opened")?;
    success(format!("Logged in as {}", session.username));
    Ok(())
}

pub fn logout(ctx: &mut AppContext) -> AppResult<()> {
    if users::logout(&ctx.pool.conn)? {
        ttlog(&ctx.pool.conn, "logout", "", "Session closed")?;
        success("Logged out.");
    } else {
        info("No active session.");
    }
    Ok(())
}
