//! Fire-control error types.
//!
//! Every variant is an operator-level guard failure: the operation is
//! aborted, a log line is written, and nothing else changes.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FcsError {
    /// Solve, lock or fire attempted without a bound target.
    #[error("No target selected")]
    NoTargetSelected,

    /// Fire attempted without a lock.
    #[error("No locked target")]
    NotLocked,

    #[error("Reload in progress")]
    ReloadInProgress,

    #[error("Out of ammunition")]
    OutOfAmmunition,

    /// Acquire attempted with an empty contact picture.
    #[error("No targets available")]
    NoTargetsAvailable,

    /// Non-finite or out-of-domain operator input.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for fire-control operations.
pub type Result<T> = std::result::Result<T, FcsError>;
