//! Unified application error type.
//! The habit core never fails; AppError covers the CLI, the shell session
//! and the settings file, so every front-end path reports errors the same way.

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
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid time format: {0} (expected HH:MM)")]
    InvalidTime(String),

    #[error("Invalid day of week: {0} (use mon, tue, wed, thu, fri, sat, sun)")]
    InvalidDay(String),

    #[error("Invalid interval: {0} (use daily, weekly or monthly)")]
    InvalidInterval(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Unknown command: {0} (type 'help' for the list of commands)")]
    InvalidCommand(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No habit matches id '{0}'")]
    HabitNotFound(String),

    #[error("Id prefix '{0}' matches more than one habit")]
    AmbiguousId(String),

    #[error("No draft is open (start one with 'new')")]
    NoDraft,

    #[error("A draft is already open (use 'commit' or 'cancel' first)")]
    DraftAlreadyOpen,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Output errors
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
