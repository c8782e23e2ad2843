/// A heat transfer coefficient that may depend on the temperature difference.
///
/// Implemented for [`Constant`] and for any `Fn(f64) -> f64`, which receives
/// `ΔT = T_bar - T_water`.
pub trait Conductivity {
    /// Returns the coefficient at the given temperature difference.
    fn at(&self, delta_t: f64) -> f64;
}

/// A coefficient that ignores the temperature difference.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Constant(pub f64);

impl Conductivity for Constant {
    fn at(&self, _delta_t: f64) -> f64 {
        self.0
    }
}

impl<F> Conductivity for F
where
    F: Fn(f64) -> f64,
{
    fn at(&self, delta_t: f64) -> f64 {
        self(delta_t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_ignores_delta() {
        let h = Constant(2.5);
        assert_eq!(h.at(-10.0), 2.5);
        assert_eq!(h.at(100.0), 2.5);
    }

    #[test]
    fn closure_receives_delta() {
        let h = |delta_t: f64| 1.0 + 0.1 * delta_t.abs();
        assert_eq!(h.at(-10.0), 2.0);
        assert_eq!(h.at(0.0), 1.0);
    }
}
