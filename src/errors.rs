//! Unified application error type.
//! Every layer (store, core, cli) returns AppError so that the binary has a
//! single place where failures are printed.

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

    // ---------------------------
    // Authentication
    // ---------------------------
    /// Deliberately generic: never reveals whether the email or the secret was wrong.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Not signed in: run `staysync login` first")]
    NotSignedIn,

    #[error("Live mode is not configured yet: run `staysync setup` first")]
    SetupRequired,

    // ---------------------------
    // Input / domain errors
    // ---------------------------
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid room status: {0}")]
    InvalidRoomStatus(String),

    // ---------------------------
    // Collaborators
    // ---------------------------
    #[error("Service unavailable: {0}")]
    CollaboratorUnavailable(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
