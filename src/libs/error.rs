use thiserror::Error;

/// Failures surfaced by the task store and its persistence layer.
///
/// The store never retries and never swallows: every variant travels up
/// to the command layer, which owns user-facing reporting.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("task not found: {0}")]
    NotFound(i64),

    #[error("unrecognized field: {0}")]
    InvalidField(String),

    #[error("invalid value: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
