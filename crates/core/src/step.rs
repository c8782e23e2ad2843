/// A trait for types that can be stepped using their derivative.
///
/// Implementing this trait lets explicit integrators (forward Euler, improved
/// Euler) advance the type via `derivative * delta`, where the derivative is
/// with respect to `Delta`. While typically used for time integration, `Delta`
/// can represent any independent variable.
pub trait StepIntegrable<Delta> {
    /// The derivative of the type with respect to `Delta`.
    type Derivative;

    /// Returns the value after stepping with a derivative and step size.
    #[must_use]
    fn step(&self, derivative: &Self::Derivative, delta: Delta) -> Self;
}

/// Type alias for the derivative of a `StepIntegrable` type.
pub type DerivativeOf<T, Delta> = <T as StepIntegrable<Delta>>::Derivative;

impl StepIntegrable<f64> for f64 {
    type Derivative = f64;

    fn step(&self, derivative: &f64, delta: f64) -> Self {
        self + derivative * delta
    }
}

impl<const N: usize> StepIntegrable<f64> for [f64; N] {
    type Derivative = [f64; N];

    fn step(&self, derivative: &[f64; N], delta: f64) -> Self {
        std::array::from_fn(|i| self[i] + derivative[i] * delta)
    }
}
