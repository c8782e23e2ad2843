use thiserror::Error;

/// Configuration for the Newton-Raphson solver.
///
/// `dx` is the forward-difference step used to estimate the slope. `scale`
/// multiplies `f` in both the slope and the update, so it cancels
/// mathematically and only affects the conditioning of the difference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    dx: f64,
    scale: f64,
}

/// Errors that can occur when validating a Newton-Raphson config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("dx must be finite and non-zero, got {0}")]
    Dx(f64),

    #[error("scale must be finite and non-zero, got {0}")]
    Scale(f64),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dx: 1e-6,
            scale: 1.0,
        }
    }
}

impl Config {
    /// Creates a new config with a validated step and scale.
    ///
    /// # Errors
    ///
    /// Returns an error if `dx` or `scale` is zero or non-finite.
    pub fn new(dx: f64, scale: f64) -> Result<Self, ConfigError> {
        if !dx.is_finite() || dx == 0.0 {
            return Err(ConfigError::Dx(dx));
        }
        if !scale.is_finite() || scale == 0.0 {
            return Err(ConfigError::Scale(scale));
        }

        Ok(Self { dx, scale })
    }

    /// Creates a config with the given step and a unit scale.
    ///
    /// # Errors
    ///
    /// Returns an error if `dx` is zero or non-finite.
    pub fn with_dx(dx: f64) -> Result<Self, ConfigError> {
        Self::new(dx, 1.0)
    }

    /// Returns the finite-difference step.
    #[must_use]
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Returns the output scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }
}
