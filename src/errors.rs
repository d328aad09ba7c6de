//! Unified application error type.
//! All modules (core, store, cli, report) return AppError to keep the error
//! handling consistent and easy to manage. Every variant maps to a single
//! user-facing reply; none of them terminate the process from a handler.

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
    // Permission / identity
    // ---------------------------
    #[error("Permission denied: {0}")]
    Permission(String),

    #[error("'{0}' is not in the student roster")]
    NotRegistered(String),

    #[error("'{0}' is registered, but not as a student")]
    NotAStudent(String),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Invalid role '{0}'. Use 'student' or 'leader'")]
    InvalidRole(String),

    #[error("Unknown mark '{0}'. Send '+' for present or '-' for absent")]
    UnknownMarkToken(String),

    #[error("Invalid identity '{0}'. Expected 3-32 letters, digits or underscores")]
    InvalidIdentity(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No attendance recorded for {0}")]
    NoDataForDate(String),

    // ---------------------------
    // Store errors
    // ---------------------------
    #[error("Store error: {0}")]
    Store(String),

    // ---------------------------
    // Report errors
    // ---------------------------
    #[error("Report error: {0}")]
    Report(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
