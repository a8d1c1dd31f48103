//! Simulation error type.
//!
//! Sub-crates either reuse `ChaseError` directly or wrap it as one variant
//! of their own error enum via `#[from]`.

use thiserror::Error;

/// The top-level error type shared by all `chase-*` crates.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChaseError {
    /// A construction-time input was out of range.  The simulation never
    /// starts when this is returned.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// An engine invariant was violated (double capture, a round requested
    /// after termination, pursuit with no live prey).  Not reachable through
    /// the public `run` contract; seeing one indicates an engine bug.
    #[error("logic error: {0}")]
    Logic(String),
}

/// Shorthand result type for all `chase-*` crates.
pub type ChaseResult<T> = Result<T, ChaseError>;

/// Reject anything that is not a finite, strictly positive distance.
pub fn require_positive(what: &str, value: f64) -> ChaseResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ChaseError::InvalidConfiguration(format!(
            "{what} must be a positive finite number, got {value}"
        )))
    }
}
