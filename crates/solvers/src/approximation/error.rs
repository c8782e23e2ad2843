use numkit_core::LinalgError;
use thiserror::Error;

/// Errors that can occur when fitting an approximation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("no samples to fit")]
    NoSamples,

    /// The requested degree leaves no room for its `degree + 1` coefficients.
    #[error("polynomial degree {degree} is too large")]
    DegreeTooLarge { degree: usize },

    /// The normal equations have no unique solution, typically because there
    /// are fewer distinct x values than coefficients.
    #[error("normal equations are singular: {0}")]
    SingularSystem(#[from] LinalgError),
}
