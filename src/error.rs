//! Recoverable errors of the demo program.
//!
//! Contract violations never appear here: they abort before any error
//! value could be built.

use thiserror::Error;

/// Upper bound on `--actions`, keeps a typo from spinning for hours.
pub const MAX_ACTIONS: u64 = 1_000_000_000;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("action count {requested} exceeds the limit of {limit}")]
    InvalidCount { requested: u64, limit: u64 },

    #[error("failed to serialize summary: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

pub type DemoResult<T> = Result<T, DemoError>;
