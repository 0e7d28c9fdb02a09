//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

/// Raised when `calculate` is requested while an input is still unset.
/// The variant tells which input the user still has to provide.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingInputError {
    #[error("Please provide both completed time and last break time (completed time is missing).")]
    Completed,

    #[error("Please provide both completed time and last break time (last break time is missing).")]
    LastBreak,

    #[error("Please provide both completed time and last break time.")]
    Both,
}

impl MissingInputError {
    /// Build the error from the presence flags of the two inputs.
    /// Returns `None` when both inputs are present.
    pub fn from_presence(has_completed: bool, has_last_break: bool) -> Option<Self> {
        match (has_completed, has_last_break) {
            (true, true) => None,
            (false, true) => Some(MissingInputError::Completed),
            (true, false) => Some(MissingInputError::LastBreak),
            (false, false) => Some(MissingInputError::Both),
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid time format: {0} (expected HH:MM)")]
    InvalidTime(String),

    #[error("Invalid work duration: {0} (expected e.g. 8h30m, 8h, 45m or 08:30)")]
    InvalidDuration(String),

    #[error("Unknown session command: {0} (type 'help')")]
    UnknownCommand(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error(transparent)]
    MissingInput(#[from] MissingInputError),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
