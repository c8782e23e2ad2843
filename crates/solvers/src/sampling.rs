//! Sampling functions onto tables.

use ndarray::Array1;
use numkit_core::Samples;

/// Evaluates `f` at `n` evenly spaced points in `[start, stop]`.
///
/// Both ends are included and the last x is exactly `stop`. One point
/// yields `start` alone and zero points yield an empty table.
pub fn tabularize<F>(f: F, start: f64, stop: f64, n: usize) -> Samples
where
    F: Fn(f64) -> f64,
{
    let mut xs = Array1::linspace(start, stop, n);
    if n > 1 {
        xs[n - 1] = stop;
    }

    xs.iter().map(|&x| (x, f(x))).collect()
}
