//! user / calendar subcommands.

use crate::cli::commands::{confirm_delete, print_page, set_if};
use crate::cli::parser::{CalendarAction, UserAction};
use crate::core::calendar;
use crate::core::context::AppContext;
use crate::core::crud;
use crate::core::users;
use crate::errors::AppResult;
use crate::models::enums::CalendarStatus;
use crate::models::{CalendarEvent, User};
use crate::ui::messages::success;
use crate::utils::date::require_date;
use crate::utils::formatting::or_dash;

pub fn user(action: &UserAction, ctx: &mut AppContext) -> AppResult<()> {
    match action {
        UserAction::List(p) => {
            print_page(
                "Users",
                &ctx.state.users,
                p.page,
                ctx.items_per_page,
                &["ID", "Name", "Username"],
                |u: &User| vec![u.id.to_string(), u.name.clone(), u.username.clone()],
            );
        }

        UserAction::Add {
            name,
            username,
            password,
        } => {
            let change = users::add_user(&mut ctx.state, name, username, password)?;
            ctx.commit(&[change]);
            success(format!("User added (id {}).", change.record_id));
        }

        UserAction::Edit {
            id,
            name,
            username,
            password,
        } => {
            let mut u = crud::find(&ctx.state.users, *id)?.clone();
            set_if(&mut u.name, name);
            set_if(&mut u.username, username);
            let change = users::update_user(&mut ctx.state, u, password.as_deref())?;
            ctx.commit(&[change]);
            success(format!("User {id} updated."));
        }

        UserAction::Del(d) => {
            let username = crud::find(&ctx.state.users, d.id)?.username.clone();
            if confirm_delete(&format!("user '{username}'"), d.yes)? {
                let change = users::delete_user(&mut ctx.state, d.id)?;
                ctx.commit(&[change]);
                success(format!("User {} deleted.", d.id));
            }
        }
    }
    Ok(())
}

pub fn calendar(action: &CalendarAction, ctx: &mut AppContext) -> AppResult<()> {
    match action {
        CalendarAction::List(p) => {
            let events: Vec<CalendarEvent> =
                calendar::agenda(&ctx.state).into_iter().cloned().collect();
            print_page(
                "Academic calendar",
                &events,
                p.page,
                ctx.items_per_page,
                &["ID", "Date", "Title", "Status", "Description"],
                |e: &CalendarEvent| {
                    vec![
                        e.id.to_string(),
                        e.date.to_string(),
                        e.title.clone(),
                        e.status.to_string(),
                        or_dash(e.description.as_deref()),
                    ]
                },
            );
        }

        CalendarAction::Add {
            date,
            title,
            status,
            description,
        } => {
            let e = CalendarEvent {
                id: 0,
                date: require_date(date)?,
                title: title.clone(),
                status: CalendarStatus::parse(status)?,
                description: description.clone(),
            };
            let change = calendar::add_event(&mut ctx.state, e)?;
            ctx.commit(&[change]);
            success(format!("Event added (id {}).", change.record_id));
        }

        CalendarAction::Edit {
            id,
            date,
            title,
            status,
            description,
        } => {
            let mut e = crud::find(&ctx.state.calendar_events, *id)?.clone();
            set_if(&mut e.title, title);
            if let Some(d) = date {
                e.date = require_date(d)?;
            }
            if let Some(s) = status {
                e.status = CalendarStatus::parse(s)?;
            }
            if description.is_some() {
                e.description = description.clone();
            }
            let change = calendar::update_event(&mut ctx.state, e)?;
            ctx.commit(&[change]);
            success(format!("Event {id} updated."));
        }

        CalendarAction::Del(d) => {
            let title = crud::find(&ctx.state.calendar_events, d.id)?.title.clone();
            if confirm_delete(&format!("event '{title}'"), d.yes)? {
                let change = calendar::delete_event(&mut ctx.state, d.id)?;
                ctx.commit(&[change]);
                success(format!("Event {} deleted.", d.id));
            }
        }
    }
    Ok(())
}
