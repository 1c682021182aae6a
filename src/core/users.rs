//! User management and the administrator login.

use crate::core::crud::{self, Change, Operation, required};
use crate::core::state::{AppState, Collection};
use crate::db::store;
use crate::errors::{AppError, AppResult};
use crate::models::User;
use chrono::Local;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

const ADMIN_USERNAME: &str = "admin";
const ADMIN_PASSWORD: &str = "password123";
const SESSION_KEY: &str = "session";

pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

// ---------------------------
// Users
// ---------------------------

fn check_user(state: &AppState, u: &mut User) -> AppResult<()> {
    u.name = u.name.trim().to_string();
    u.username = u.username.trim().to_string();
    required("name", &u.name)?;
    required("username", &u.username)?;

    let taken = state
        .users
        .iter()
        .any(|o| o.id != u.id && o.username.eq_ignore_ascii_case(&u.username));
    if taken {
        return Err(AppError::Duplicate(format!(
            "username '{}' is already in use",
            u.username
        )));
    }
    Ok(())
}

/// A password is mandatory when creating a user.
pub fn add_user(state: &mut AppState, name: &str, username: &str, password: &str) -> AppResult<Change> {
    required("password", password)?;

    let mut user = User {
        id: 0,
        name: name.to_string(),
        username: username.to_string(),
        password_hash: Some(hash_password(password)),
    };
    check_user(state, &mut user)?;

    let id = crud::insert(&mut state.users, user);
    Ok(Change::new(Collection::Users, Operation::Add, id))
}

/// Update a user; the stored password is kept unless a new one is given.
pub fn update_user(state: &mut AppState, mut user: User, new_password: Option<&str>) -> AppResult<Change> {
    if let Some(p) = new_password {
        required("password", p)?;
        user.password_hash = Some(hash_password(p));
    }
    check_user(state, &mut user)?;

    let id = user.id;
    crud::replace(&mut state.users, user)?;
    Ok(Change::new(Collection::Users, Operation::Edit, id))
}

pub fn delete_user(state: &mut AppState, id: i64) -> AppResult<Change> {
    crud::remove(&mut state.users, id)?;
    Ok(Change::new(Collection::Users, Operation::Delete, id))
}

// ---------------------------
// Session
// ---------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub username: String,
    pub logged_in_at: String,
}

/// Check the administrator credentials and open a session.
pub fn login(conn: &Connection, username: &str, password: &str) -> AppResult<Session> {
    if username != ADMIN_USERNAME || password != ADMIN_PASSWORD {
        return Err(AppError::InvalidCredentials);
    }

    let session = Session {
        username: username.to_string(),
        logged_in_at: Local::now().to_rfc3339(),
    };
    store::save_value(conn, SESSION_KEY, &session)?;
    Ok(session)
}

/// Close the session; `false` when nobody was logged in.
pub fn logout(conn: &Connection) -> AppResult<bool> {
    store::delete_value(conn, SESSION_KEY)
}

pub fn current_session(conn: &Connection) -> AppResult<Option<Session>> {
    store::load_value(conn, SESSION_KEY)
}

pub fn require_session(conn: &Connection) -> AppResult<Session> {
    current_session(conn)?.ok_or(AppError::Unauthorized)
}
