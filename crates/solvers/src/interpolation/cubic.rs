//! Natural cubic spline interpolation.
//!
//! # Algorithm
//!
//! For `n + 1` samples the spline has `n` pieces, each a cubic
//! `a·x³ + b·x² + c·x + d` in global x. The `4n` coefficients are solved
//! from one dense square system whose rows are stacked in four blocks:
//!
//! 1. Interpolation (`2n` rows): piece `k` equals `y_k` at `x_k` and
//!    `y_{k+1}` at `x_{k+1}`.
//! 2. Slope continuity (`n - 1` rows): at each interior knot the first
//!    derivatives of the adjacent pieces agree.
//! 3. Curvature continuity (`n - 1` rows): likewise for second derivatives.
//! 4. Natural ends (2 rows): the second derivative is zero at the first and
//!    last knot.
//!
//! Each row touches at most 8 unknowns, but the system is solved densely.
//!
//! # Evaluation
//!
//! `x` is evaluated on the piece whose right knot is the first one `>= x`.
//! Points left of the first knot use the first piece and points right of the
//! last knot reuse the last piece.

use ndarray::{Array1, Array2};
use numkit_core::{Samples, linalg};

use super::{Error, validate};

/// One cubic piece `a·x³ + b·x² + c·x + d`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicPiece {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl CubicPiece {
    /// Returns the value at `x`.
    #[must_use]
    pub fn value(&self, x: f64) -> f64 {
        ((self.a * x + self.b) * x + self.c) * x + self.d
    }

    /// Returns the first derivative at `x`.
    #[must_use]
    pub fn derivative(&self, x: f64) -> f64 {
        (3.0 * self.a * x + 2.0 * self.b) * x + self.c
    }

    /// Returns the second derivative at `x`.
    #[must_use]
    pub fn second_derivative(&self, x: f64) -> f64 {
        6.0 * self.a * x + 2.0 * self.b
    }
}

/// A natural cubic spline.
///
/// Coefficients are solved once, when the spline is created.
#[derive(Debug, Clone, PartialEq)]
pub struct CubicSpline {
    knots: Vec<f64>,
    pieces: Vec<CubicPiece>,
}

impl CubicSpline {
    /// Fits a natural cubic spline through the given samples.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if there are fewer than two samples, any value is
    /// non-finite, x is not strictly increasing, or the assembled system is
    /// singular.
    pub fn new(samples: &Samples) -> Result<Self, Error> {
        validate(samples)?;

        let knots = samples.xs().to_vec();
        let values = samples.ys().to_vec();

        let (system, rhs) = assemble(&knots, &values);
        let coefficients = linalg::solve(system, rhs)?;

        let pieces = (0..knots.len() - 1)
            .map(|k| CubicPiece {
                a: coefficients[4 * k],
                b: coefficients[4 * k + 1],
                c: coefficients[4 * k + 2],
                d: coefficients[4 * k + 3],
            })
            .collect();

        Ok(Self { knots, pieces })
    }

    /// Evaluates the spline at `x`.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        let k = self.knots[1..]
            .partition_point(|&knot| knot < x)
            .min(self.pieces.len() - 1);
        self.pieces[k].value(x)
    }

    /// Returns the knots.
    #[must_use]
    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    /// Returns the fitted pieces, ordered by knot index.
    #[must_use]
    pub fn pieces(&self) -> &[CubicPiece] {
        &self.pieces
    }
}

/// Builds the `4n × 4n` system and its right-hand side.
fn assemble(xs: &[f64], ys: &[f64]) -> (Array2<f64>, Array1<f64>) {
    let n = xs.len() - 1;
    let size = 4 * n;

    let mut a = Array2::zeros((size, size));
    let mut b = Array1::zeros(size);
    let mut row = 0;

    // Interpolation.
    for k in 0..n {
        for (x, y) in [(xs[k], ys[k]), (xs[k + 1], ys[k + 1])] {
            put(&mut a, row, 4 * k, &[x.powi(3), x * x, x, 1.0]);
            b[row] = y;
            row += 1;
        }
    }

    // Slope continuity.
    for k in 0..n - 1 {
        let x = xs[k + 1];
        let slope = [3.0 * x * x, 2.0 * x, 1.0];
        put(&mut a, row, 4 * k, &slope);
        put(&mut a, row, 4 * (k + 1), &slope.map(|v| -v));
        row += 1;
    }

    // Curvature continuity.
    for k in 0..n - 1 {
        let x = xs[k + 1];
        let curvature = [6.0 * x, 2.0];
        put(&mut a, row, 4 * k, &curvature);
        put(&mut a, row, 4 * (k + 1), &curvature.map(|v| -v));
        row += 1;
    }

    // Natural ends.
    put(&mut a, row, 0, &[6.0 * xs[0], 2.0]);
    put(&mut a, row + 1, 4 * (n - 1), &[6.0 * xs[n], 2.0]);

    debug_assert_eq!(row + 2, size);

    (a, b)
}

/// Writes `values` into `a` starting at `(row, col)`.
fn put(a: &mut Array2<f64>, row: usize, col: usize, values: &[f64]) {
    for (j, &value) in values.iter().enumerate() {
        a[[row, col + j]] = value;
    }
}
