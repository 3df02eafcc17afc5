//! Environment error types
//!
//! Every rejection happens before the simulation state is touched, so an
//! error never leaves a half-applied tick behind.

use std::fmt;

use thiserror::Error;

/// Why a `step` call found no live episode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotResetCause {
    /// `reset` has never been called on this environment
    NeverReset,
    /// The previous tick ended the episode
    EpisodeTerminated,
}

impl fmt::Display for NotResetCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotResetCause::NeverReset => f.write_str("the environment was never reset"),
            NotResetCause::EpisodeTerminated => f.write_str("the episode has terminated"),
        }
    }
}

/// Errors returned by the environment and its configuration
#[derive(Debug, Error)]
pub enum EnvError {
    /// Action outside {0 = no-op, 1 = jump, 2 = duck}
    #[error("invalid action {0}: expected 0 (no-op), 1 (jump) or 2 (duck)")]
    InvalidAction(i64),

    /// `step` without a live episode
    #[error("step called but {0}; call reset first")]
    NotReset(NotResetCause),

    /// Tuning values that cannot describe a playable game
    #[error("invalid tuning: {0}")]
    InvalidTuning(String),

    #[error("failed to parse tuning: {0}")]
    TuningParse(#[from] serde_json::Error),

    #[error("failed to read tuning: {0}")]
    Io(#[from] std::io::Error),
}
