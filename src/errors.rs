//! Unified application error type.
//! All modules (db, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid value for {field}: '{value}' (allowed: {allowed})")]
    InvalidValue {
        field: &'static str,
        value: String,
        allowed: String,
    },

    // ---------------------------
    // Domain errors
    // ---------------------------
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Duplicate entry: {0}")]
    Duplicate(String),

    #[error("Import aborted: {0}")]
    Import(String),

    // ---------------------------
    // Session / connectivity
    // ---------------------------
    #[error("Not logged in: run `lapkes login` first")]
    Unauthorized,

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Application is offline: {0}")]
    Offline(String),

    #[error("Synchronization failed: {0}")]
    Sync(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
