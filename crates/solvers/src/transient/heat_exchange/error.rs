use thiserror::Error;

/// Errors that can occur while stepping the simulation.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("time step must be finite and positive, got {dt}")]
    InvalidStep { dt: f64 },
}
