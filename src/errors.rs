//! Unified application error type.
//! Every module (db, core, cli, report, export) returns AppError so that
//! the interactive menu and the one-shot subcommands report failures the
//! same way.

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
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("Invalid timestamp '{0}': expected YYYY-MM-DD HH:MM")]
    InvalidTimestamp(String),

    #[error("Invalid month '{0}': expected YYYY-MM")]
    InvalidMonth(String),

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Invalid break duration: {0} minutes (must be zero or positive)")]
    InvalidBreak(i64),

    #[error("Employee name cannot be empty")]
    EmptyName,

    // ---------------------------
    // Domain errors
    // ---------------------------
    #[error("Worked time ({worked} min) must be greater than the break ({break_minutes} min)")]
    InvalidInterval { worked: i64, break_minutes: i64 },

    #[error("Employee {0} not found")]
    EmployeeNotFound(i64),

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
    // Report / export errors
    // ---------------------------
    #[error("Asset error: {0}")]
    Asset(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Interactive prompts
    // ---------------------------
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type AppResult<T> = Result<T, AppError>;
