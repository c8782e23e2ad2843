use numkit_core::Samples;

use super::{Error, validate};

/// A piecewise-linear interpolant.
///
/// Evaluation outside `[x_min, x_max]` returns `NaN`; there is no
/// extrapolation.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl LinearSpline {
    /// Creates a linear spline through the given samples.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if there are fewer than two samples, any value is
    /// non-finite, or x is not strictly increasing.
    pub fn new(samples: &Samples) -> Result<Self, Error> {
        validate(samples)?;
        Ok(Self {
            xs: samples.xs().to_vec(),
            ys: samples.ys().to_vec(),
        })
    }

    /// Evaluates the interpolant at `x`.
    ///
    /// The bracketing interval is found by binary search for the smallest `i`
    /// with `x <= x_i`; the first knot belongs to the first interval.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        let last = self.xs.len() - 1;
        if !(self.xs[0] <= x && x <= self.xs[last]) {
            return f64::NAN;
        }

        let i = self.xs.partition_point(|&knot| knot < x).max(1);
        let (x0, x1) = (self.xs[i - 1], self.xs[i]);
        let (y0, y1) = (self.ys[i - 1], self.ys[i]);

        y0 + (y1 - y0) / (x1 - x0) * (x - x0)
    }

    /// Returns the knots.
    #[must_use]
    pub fn knots(&self) -> &[f64] {
        &self.xs
    }
}
