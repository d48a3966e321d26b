//! Error types for duffing_core.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DuffingError {
    /// Structural misconfiguration of the time grid. Returned before any work is done.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A computed sample holds a non-finite value.
    /// Only produced by the opt-in finiteness checks.
    #[error(
        "numerical instability: non-finite state at sample {index} (t = {t}, epsilon = {epsilon})"
    )]
    NumericalInstability { epsilon: f64, index: usize, t: f64 },
}

pub type Result<T> = std::result::Result<T, DuffingError>;
