use ndarray::Array2;
use numkit_core::{Samples, linalg};

use super::Error;

/// A least-squares polynomial fit.
///
/// For samples `(x_j, y_j)` and degree `d`, solves the normal equations
/// `c = (MᵀM)⁻¹ MᵀY` of the design matrix `M[j, i] = t_jⁱ` (`i = 0..=d`).
/// The fit variable `t = (x - x̄) / s` centres the samples on their mean
/// and scales them into `[-1, 1]`, and the result is expanded back so that
/// coefficient `i` multiplies `xⁱ`.
#[derive(Debug, Clone, PartialEq)]
pub struct PolynomialApproximation {
    coefficients: Vec<f64>,
}

impl PolynomialApproximation {
    /// Fits a polynomial of the given degree to the samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSamples`] for an empty table,
    /// [`Error::DegreeTooLarge`] when `degree + 1` overflows, and
    /// [`Error::SingularSystem`] when `MᵀM` is not invertible (fewer distinct
    /// x values than `degree + 1`).
    pub fn new(samples: &Samples, degree: usize) -> Result<Self, Error> {
        if samples.is_empty() {
            return Err(Error::NoSamples);
        }
        let columns = degree
            .checked_add(1)
            .ok_or(Error::DegreeTooLarge { degree })?;

        let (center, scale) = normalization(samples);
        let design = design_matrix(samples, columns, center, scale);
        let design_t = design.t();

        let normal = design_t.dot(&design);
        let rhs = design_t.dot(&samples.ys());

        let shifted = linalg::invert(&normal)?.dot(&rhs).to_vec();
        let coefficients = expand(&shifted, center, scale);

        Ok(Self { coefficients })
    }

    /// Evaluates the polynomial at `x`.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, &c| acc * x + c)
    }

    /// Returns the coefficients, lowest power first.
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Returns the polynomial degree.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }
}

/// Returns the mean of the sample x values and their largest distance from it.
fn normalization(samples: &Samples) -> (f64, f64) {
    let xs = samples.xs();

    #[allow(clippy::cast_precision_loss)]
    let center = xs.sum() / xs.len() as f64;
    let spread = xs.iter().fold(0.0_f64, |acc, &x| acc.max((x - center).abs()));

    let scale = if spread > 0.0 && spread.is_finite() { spread } else { 1.0 };
    (center, scale)
}

/// Builds the Vandermonde-style matrix `M[j, i] = t_jⁱ`.
fn design_matrix(samples: &Samples, columns: usize, center: f64, scale: f64) -> Array2<f64> {
    let mut design = Array2::ones((samples.len(), columns));
    for (j, &x) in samples.xs().iter().enumerate() {
        let t = (x - center) / scale;
        for i in 1..columns {
            design[[j, i]] = design[[j, i - 1]] * t;
        }
    }
    design
}

/// Rewrites `Σ aₖ·tᵏ`, `t = (x - center) / scale`, as coefficients of `xⁱ`.
fn expand(shifted: &[f64], center: f64, scale: f64) -> Vec<f64> {
    let mut coefficients = vec![0.0; shifted.len()];

    // Coefficients of tᵏ in powers of x.
    let mut power = vec![1.0];
    for &a in shifted {
        for (c, p) in coefficients.iter_mut().zip(&power) {
            *c += a * p;
        }

        let mut next = vec![0.0; power.len() + 1];
        for (i, p) in power.iter().enumerate() {
            next[i + 1] += p / scale;
            next[i] -= p * center / scale;
        }
        power = next;
    }

    coefficients
}
