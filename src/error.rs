//! Errors for the fallible edges (config and score files)
//!
//! The simulation itself never fails: degenerate input is clamped and
//! unusable events are dropped.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HopError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    InvalidTuning { field: &'static str, reason: String },
}
