use numkit_core::LinalgError;
use thiserror::Error;

/// Errors that can occur when building an interpolant.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("at least 2 samples are required, got {found}")]
    TooFewSamples { found: usize },

    #[error("samples contain non-finite values")]
    NonFinite,

    /// Knots must be strictly increasing; `index` is the first offending row.
    #[error("x values must be strictly increasing (violated at index {index})")]
    NotStrictlyIncreasing { index: usize },

    #[error("spline system is singular: {0}")]
    SingularSystem(#[from] LinalgError),
}
