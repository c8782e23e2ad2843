use thiserror::Error;

/// Errors that can occur when integrating over a range.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    /// The range does not satisfy `a < b` (or a bound is not finite).
    #[error("invalid range [{a}, {b}]")]
    InvalidRange { a: f64, b: f64 },

    /// The sub-interval count is not a positive even integer.
    #[error("sub-interval count must be a positive even integer, got {m}")]
    InvalidParameter { m: usize },
}
