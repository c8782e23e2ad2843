//! Least-squares approximation of sampled data.
//!
//! - [`PolynomialApproximation`]: degree-`d` polynomial from the normal equations
//! - [`approximation_error`]: root-mean-square residual of any model on samples

mod error;
mod polynomial;

pub use error::Error;
pub use polynomial::PolynomialApproximation;

use numkit_core::Samples;

/// Returns the root-mean-square residual of `f` on `samples`.
///
/// Computes `sqrt(Σ (y_j - f(x_j))² / N)`. An empty table yields `NaN`.
pub fn approximation_error<F>(f: F, samples: &Samples) -> f64
where
    F: Fn(f64) -> f64,
{
    let sum_sq: f64 = samples
        .iter()
        .map(|(x, y)| {
            let r = y - f(x);
            r * r
        })
        .sum();

    #[allow(clippy::cast_precision_loss)]
    let n = samples.len() as f64;

    (sum_sq / n).sqrt()
}
