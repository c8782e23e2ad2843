//! Definite integrals by the composite Simpson's rule.
//!
//! # Algorithm
//!
//! The range `[a, b]` is split into `m` equal sub-intervals (`m` even) with
//! nodes `x_i = a + i·h`, `h = (b - a) / m`. The integrand is evaluated once
//! per node and weighted
//!
//! ```text
//! 1, 4, 2, 4, 2, ..., 2, 4, 1
//! ```
//!
//! giving `h / 3 · Σ wᵢ·f(xᵢ)`. The rule is exact for polynomials of degree
//! three or less, and its error is `O(h⁴)` for smooth integrands.

mod error;

pub use error::Error;

/// Approximates `∫ₐᵇ f(x) dx` using `m` Simpson sub-intervals.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] unless `m` is a positive even integer,
/// then [`Error::InvalidRange`] unless `a < b` with both bounds finite.
/// Validation happens before `f` is called.
pub fn simpson_integral<F>(f: F, a: f64, b: f64, m: usize) -> Result<f64, Error>
where
    F: Fn(f64) -> f64,
{
    validate(a, b, m)?;

    #[allow(clippy::cast_precision_loss)]
    let h = (b - a) / m as f64;

    let interior: f64 = (1..m)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let x = a + i as f64 * h;
            let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
            weight * f(x)
        })
        .sum();

    Ok(h / 3.0 * (f(a) + interior + f(b)))
}

/// Returns the mean absolute difference between `f` and `g` over `[a, b]`.
///
/// Computes `1 / (b - a) · ∫ₐᵇ |f(x) - g(x)| dx` with [`simpson_integral`].
///
/// # Errors
///
/// Returns the same errors as [`simpson_integral`].
pub fn functions_difference<F, G>(f: F, g: G, a: f64, b: f64, m: usize) -> Result<f64, Error>
where
    F: Fn(f64) -> f64,
    G: Fn(f64) -> f64,
{
    let integral = simpson_integral(|x| (f(x) - g(x)).abs(), a, b, m)?;
    Ok(integral / (b - a))
}

fn validate(a: f64, b: f64, m: usize) -> Result<(), Error> {
    if m == 0 || m % 2 != 0 {
        return Err(Error::InvalidParameter { m });
    }
    if !a.is_finite() || !b.is_finite() || a >= b {
        return Err(Error::InvalidRange { a, b });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::RefCell;

    use approx::assert_relative_eq;

    #[test]
    fn integrates_square() {
        let integral = simpson_integral(|x| x * x, 0.0, 1.0, 10).expect("valid input");
        assert_relative_eq!(integral, 1.0 / 3.0, epsilon = 1e-14);
    }

    #[test]
    fn exact_for_cubics() {
        // ∫ (2x³ - x² + 3x - 5) dx = x⁴/2 - x³/3 + 3x²/2 - 5x
        let f = |x: f64| 2.0 * x.powi(3) - x * x + 3.0 * x - 5.0;
        let antiderivative = |x: f64| x.powi(4) / 2.0 - x.powi(3) / 3.0 + 1.5 * x * x - 5.0 * x;
        let (a, b) = (-1.5, 2.25);
        let expected = antiderivative(b) - antiderivative(a);

        for m in [2, 4, 6, 20, 100] {
            let integral = simpson_integral(f, a, b, m).expect("valid input");
            assert_relative_eq!(integral, expected, epsilon = 1e-12, max_relative = 1e-12);
        }
    }

    #[test]
    fn converges_for_smooth_functions() {
        let coarse = simpson_integral(f64::sin, 0.0, std::f64::consts::PI, 4).expect("valid");
        let fine = simpson_integral(f64::sin, 0.0, std::f64::consts::PI, 64).expect("valid");

        assert!((fine - 2.0).abs() < (coarse - 2.0).abs());
        assert_relative_eq!(fine, 2.0, epsilon = 1e-6);
    }

    #[test]
    fn evaluates_each_node_once() {
        let calls = RefCell::new(Vec::new());
        simpson_integral(
            |x| {
                calls.borrow_mut().push(x);
                x
            },
            0.0,
            1.0,
            8,
        )
        .expect("valid input");

        let mut xs = calls.into_inner();
        xs.sort_by(f64::total_cmp);
        assert_eq!(xs.len(), 9);
        assert_relative_eq!(xs[0], 0.0);
        assert_relative_eq!(xs[8], 1.0);
        xs.dedup();
        assert_eq!(xs.len(), 9);
    }

    #[test]
    fn rejects_invalid_range() {
        assert_eq!(
            simpson_integral(|x| x, 1.0, 1.0, 2),
            Err(Error::InvalidRange { a: 1.0, b: 1.0 })
        );
        assert_eq!(
            simpson_integral(|x| x, 2.0, 1.0, 2),
            Err(Error::InvalidRange { a: 2.0, b: 1.0 })
        );
        assert!(matches!(
            simpson_integral(|x| x, f64::NAN, 1.0, 2),
            Err(Error::InvalidRange { .. })
        ));
    }

    #[test]
    fn rejects_odd_or_zero_subintervals() {
        assert_eq!(
            simpson_integral(|x| x, 0.0, 1.0, 3),
            Err(Error::InvalidParameter { m: 3 })
        );
        assert_eq!(
            simpson_integral(|x| x, 0.0, 1.0, 0),
            Err(Error::InvalidParameter { m: 0 })
        );
    }

    #[test]
    fn subinterval_count_is_checked_before_range() {
        assert_eq!(
            simpson_integral(|x| x, 2.0, 1.0, 3),
            Err(Error::InvalidParameter { m: 3 })
        );
    }

    #[test]
    fn identical_functions_have_zero_difference() {
        let f = |x: f64| x.exp() * x.cos();
        let diff = functions_difference(f, f, -2.0, 3.0, 50).expect("valid input");
        assert_eq!(diff, 0.0);
    }

    #[test]
    fn difference_of_offset_functions_is_the_offset() {
        let diff = functions_difference(|x| x * x, |x| x * x - 0.5, 0.0, 4.0, 10)
            .expect("valid input");
        assert_relative_eq!(diff, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn difference_rejects_invalid_range() {
        assert_eq!(
            functions_difference(|x| x, |x| -x, 3.0, 1.0, 4),
            Err(Error::InvalidRange { a: 3.0, b: 1.0 })
        );
    }
}
