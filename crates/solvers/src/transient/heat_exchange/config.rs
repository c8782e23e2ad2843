use std::fmt;

use thiserror::Error;
use uom::si::{
    f64::{Mass, SpecificHeatCapacity, ThermodynamicTemperature},
    mass::kilogram,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
};

/// A lumped body with a uniform temperature.
///
/// Plain `f64` fields are in whatever consistent unit system the caller
/// chooses. [`Body::from_quantities`] converts typed quantities to SI.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Body {
    pub temperature: f64,
    pub mass: f64,
    pub specific_heat: f64,
}

impl Body {
    #[must_use]
    pub const fn new(temperature: f64, mass: f64, specific_heat: f64) -> Self {
        Self {
            temperature,
            mass,
            specific_heat,
        }
    }

    /// Creates a body from typed quantities, stored in K, kg and J/(kg·K).
    #[must_use]
    pub fn from_quantities(
        temperature: ThermodynamicTemperature,
        mass: Mass,
        specific_heat: SpecificHeatCapacity,
    ) -> Self {
        Self {
            temperature: temperature.get::<kelvin>(),
            mass: mass.get::<kilogram>(),
            specific_heat: specific_heat.get::<joule_per_kilogram_kelvin>(),
        }
    }

    /// Returns `m·c`.
    #[must_use]
    pub fn heat_capacity(&self) -> f64 {
        self.mass * self.specific_heat
    }

    fn validate(&self, side: Side) -> Result<(), ConfigError> {
        if !self.temperature.is_finite() {
            return Err(ConfigError::Temperature {
                side,
                value: self.temperature,
            });
        }
        if !is_positive(self.mass) {
            return Err(ConfigError::Mass {
                side,
                value: self.mass,
            });
        }
        if !is_positive(self.specific_heat) {
            return Err(ConfigError::SpecificHeat {
                side,
                value: self.specific_heat,
            });
        }
        Ok(())
    }
}

/// The integration scheme used for each step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    /// Forward Euler: `T ← T + dt·f(T)`.
    Euler,

    /// Midpoint predictor-corrector:
    /// `T_p = T + dt/2·f(T)`, then `T ← T + dt·f(T_p)`.
    #[default]
    ImprovedEuler,
}

impl Method {
    /// Maps an "improved" flag to a method.
    #[must_use]
    pub fn from_improved(improved: bool) -> Self {
        if improved {
            Self::ImprovedEuler
        } else {
            Self::Euler
        }
    }
}

/// Configuration for a [`HeatExchangeSimulation`](super::HeatExchangeSimulation).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// The hot body, initially.
    pub bar: Body,

    /// The cold body, initially.
    pub water: Body,

    /// Contact area between the bodies.
    pub area: f64,

    /// Default time step.
    pub dt: f64,

    pub method: Method,
}

/// Which body a [`ConfigError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Bar,
    Water,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bar => f.write_str("bar"),
            Self::Water => f.write_str("water"),
        }
    }
}

/// Errors that can occur when validating a simulation config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("{side} temperature must be finite, got {value}")]
    Temperature { side: Side, value: f64 },

    #[error("{side} mass must be finite and positive, got {value}")]
    Mass { side: Side, value: f64 },

    #[error("{side} specific heat must be finite and positive, got {value}")]
    SpecificHeat { side: Side, value: f64 },

    #[error("contact area must be finite and positive, got {0}")]
    Area(f64),

    #[error("time step must be finite and positive, got {0}")]
    TimeStep(f64),
}

impl Config {
    /// Creates a validated config using the default [`Method`].
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is out of range.
    pub fn new(bar: Body, water: Body, area: f64, dt: f64) -> Result<Self, ConfigError> {
        let config = Self {
            bar,
            water,
            area,
            dt,
            method: Method::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Returns the config with a different integration method.
    #[must_use]
    pub fn with_method(self, method: Method) -> Self {
        Self { method, ..self }
    }

    /// Checks that temperatures are finite and that masses, specific heats,
    /// area and time step are finite and positive.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bar.validate(Side::Bar)?;
        self.water.validate(Side::Water)?;

        if !is_positive(self.area) {
            return Err(ConfigError::Area(self.area));
        }
        if !is_positive(self.dt) {
            return Err(ConfigError::TimeStep(self.dt));
        }
        Ok(())
    }
}

pub(super) fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
