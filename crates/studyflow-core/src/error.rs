//! Core error types for studyflow-core.
//!
//! Engine rejections and storage failures are kept in separate enums; the
//! library-level `CoreError` wraps both for callers that mix concerns.

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// Core error type for studyflow-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Engine rejected a scheduling request
    #[error("Schedule error: {0}")]
    Schedule(#[from] ScheduleError),

    /// Storage-related errors
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Rejections produced by the scheduling engine or its policy gate.
///
/// All rejections are total: when any of these is returned, no task has been
/// modified. An empty gap-finder result is a valid negative outcome, not an
/// error, and has no variant here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// A day cannot physically hold the requested load, even unconstrained.
    #[error("day capacity exceeded: {required_minutes} minutes required, at most {max_minutes} available")]
    CapacityExceeded {
        required_minutes: i64,
        max_minutes: i64,
    },

    /// A batch referenced a task id not present in the snapshot. This is a
    /// caller bug (stale snapshot); propagate, do not silently drop.
    #[error("unknown task id: {0}")]
    UnknownTaskId(i64),

    /// Reflow or relocation requested on or after a goal's deadline day.
    #[error("rescheduling is not allowed on or after the goal deadline ({deadline})")]
    ForbiddenOnDeadline { deadline: NaiveDate },
}

/// Storage-specific errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Query or connection failure
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Batch update referenced a task id with no row; the transaction was
    /// rolled back.
    #[error("no stored task with id {0}; batch rolled back")]
    MissingTask(i64),

    /// Referenced goal id has no row
    #[error("no stored goal with id {0}")]
    MissingGoal(i64),

    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    ConfigLoad { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    ConfigSave { path: PathBuf, message: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
