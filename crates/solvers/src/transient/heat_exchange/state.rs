use numkit_core::StepIntegrable;

/// The pair of body temperatures that the simulation integrates.
///
/// The same type carries the temperatures and their time derivatives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Temperatures {
    pub bar: f64,
    pub water: f64,
}

impl Temperatures {
    /// Returns `T_bar - T_water`.
    #[must_use]
    pub fn delta(&self) -> f64 {
        self.bar - self.water
    }
}

impl StepIntegrable<f64> for Temperatures {
    type Derivative = Temperatures;

    fn step(&self, derivative: &Temperatures, dt: f64) -> Self {
        Self {
            bar: self.bar.step(&derivative.bar, dt),
            water: self.water.step(&derivative.water, dt),
        }
    }
}
