//! Interpolants built from discrete `(x, y)` samples.
//!
//! - [`LinearSpline`]: piecewise-linear, undefined (`NaN`) outside the knots
//! - [`CubicSpline`]: natural cubic spline from one dense `4n × 4n` system
//!
//! Both require at least two samples with finite values and strictly
//! increasing x, checked at construction.

mod cubic;
mod error;
mod linear;

pub use cubic::{CubicPiece, CubicSpline};
pub use error::Error;
pub use linear::LinearSpline;

use numkit_core::Samples;

/// Checks the sample table shared preconditions.
fn validate(samples: &Samples) -> Result<(), Error> {
    if samples.len() < 2 {
        return Err(Error::TooFewSamples {
            found: samples.len(),
        });
    }
    if samples.has_non_finite() {
        return Err(Error::NonFinite);
    }
    if let Some(index) = samples.first_non_increasing() {
        return Err(Error::NotStrictlyIncreasing { index });
    }
    Ok(())
}
