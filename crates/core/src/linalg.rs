//! Dense linear algebra for the small systems the numerical methods assemble.
//!
//! Both routines use partial pivoting. A system is reported as singular only
//! when the best available pivot is exactly zero or non-finite. Entries of
//! very different magnitude (monomial bases far from the origin) are fine.

use ndarray::{Array1, Array2};
use thiserror::Error;

/// Errors that can occur when solving or inverting a dense system.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LinalgError {
    /// The matrix is not square.
    #[error("matrix is not square ({rows}x{cols})")]
    NotSquare { rows: usize, cols: usize },

    /// The right-hand side length does not match the matrix size.
    #[error("right-hand side has length {found}, expected {expected}")]
    DimensionMismatch { expected: usize, found: usize },

    /// No usable pivot was found while eliminating `column`.
    #[error("matrix is singular (no pivot in column {column})")]
    Singular { column: usize },
}

/// Solves `a · x = b` by Gaussian elimination with partial pivoting.
///
/// # Errors
///
/// Returns a [`LinalgError`] if `a` is not square, `b` has the wrong length,
/// or `a` is singular.
pub fn solve(mut a: Array2<f64>, mut b: Array1<f64>) -> Result<Array1<f64>, LinalgError> {
    let n = square_size(&a)?;
    if b.len() != n {
        return Err(LinalgError::DimensionMismatch {
            expected: n,
            found: b.len(),
        });
    }

    // Forward elimination.
    for col in 0..n {
        let pivot_row = find_pivot(&a, col)?;
        if pivot_row != col {
            swap_rows(&mut a, col, pivot_row);
            b.swap(col, pivot_row);
        }

        let pivot = a[[col, col]];
        for row in col + 1..n {
            let factor = a[[row, col]] / pivot;
            if factor == 0.0 {
                continue;
            }
            for k in col..n {
                a[[row, k]] -= factor * a[[col, k]];
            }
            b[row] -= factor * b[col];
        }
    }

    // Back substitution.
    let mut x = Array1::zeros(n);
    for row in (0..n).rev() {
        let tail: f64 = (row + 1..n).map(|k| a[[row, k]] * x[k]).sum();
        x[row] = (b[row] - tail) / a[[row, row]];
    }

    Ok(x)
}

/// Inverts `a` by Gauss-Jordan elimination with partial pivoting.
///
/// # Errors
///
/// Returns a [`LinalgError`] if `a` is not square or is singular.
pub fn invert(a: &Array2<f64>) -> Result<Array2<f64>, LinalgError> {
    let n = square_size(a)?;

    let mut work = a.clone();
    let mut inv = Array2::eye(n);

    for col in 0..n {
        let pivot_row = find_pivot(&work, col)?;
        if pivot_row != col {
            swap_rows(&mut work, col, pivot_row);
            swap_rows(&mut inv, col, pivot_row);
        }

        let pivot = work[[col, col]];
        work.row_mut(col).mapv_inplace(|v| v / pivot);
        inv.row_mut(col).mapv_inplace(|v| v / pivot);

        for row in 0..n {
            if row == col {
                continue;
            }
            let factor = work[[row, col]];
            if factor == 0.0 {
                continue;
            }
            for k in 0..n {
                work[[row, k]] -= factor * work[[col, k]];
                inv[[row, k]] -= factor * inv[[col, k]];
            }
        }
    }

    Ok(inv)
}

fn square_size(a: &Array2<f64>) -> Result<usize, LinalgError> {
    let (rows, cols) = a.dim();
    if rows == cols {
        Ok(rows)
    } else {
        Err(LinalgError::NotSquare { rows, cols })
    }
}

/// Returns the row at or below `col` with the largest magnitude in `col`.
fn find_pivot(a: &Array2<f64>, col: usize) -> Result<usize, LinalgError> {
    let column = a.column(col);
    let (row, value) = column
        .iter()
        .enumerate()
        .skip(col)
        .fold((col, 0.0_f64), |best, (row, v)| {
            if v.abs() > best.1 { (row, v.abs()) } else { best }
        });

    if !value.is_finite() || value == 0.0 {
        return Err(LinalgError::Singular { column: col });
    }
    Ok(row)
}

fn swap_rows(a: &mut Array2<f64>, i: usize, j: usize) {
    for k in 0..a.ncols() {
        a.swap([i, k], [j, k]);
    }
}
