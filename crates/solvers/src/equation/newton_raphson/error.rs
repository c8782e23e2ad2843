use thiserror::Error;

/// Errors that can occur during a Newton-Raphson step.
///
/// Both variants are raised before `x` is updated, so the solver state and
/// history are left as they were.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("slope estimate is zero at x = {x}")]
    ZeroSlope { x: f64 },

    #[error("slope estimate is not finite at x = {x}: {slope}")]
    NonFiniteSlope { x: f64, slope: f64 },
}
