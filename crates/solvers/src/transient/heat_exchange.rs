//! Heat exchange between a bar and a body of water.
//!
//! Both bodies are lumped: each has one temperature, a mass and a specific
//! heat. Heat flows through a contact area `a` with a coefficient `h` that
//! may depend on the temperature difference `ΔT = T_bar - T_water`:
//!
//! ```text
//! dT_bar/dt   = -h(ΔT)·a/(m_bar·c_bar)·ΔT
//! dT_water/dt = +h(ΔT)·a/(m_water·c_water)·ΔT
//! ```
//!
//! The simulation steps these equations with forward Euler or improved
//! Euler (see [`Method`]) and appends a [`Record`] per step. History index 0
//! holds the initial state.
//!
//! # Example
//!
//! ```
//! use numkit_solvers::transient::heat_exchange::{
//!     Body, Config, Constant, HeatExchangeSimulation,
//! };
//!
//! let config = Config::new(Body::new(100.0, 1.0, 1.0), Body::new(0.0, 1.0, 1.0), 1.0, 0.1)?;
//! let mut sim = HeatExchangeSimulation::new(config, Constant(1.0))?;
//!
//! sim.simulate(200, None)?;
//! assert!((sim.bar_temperature() - 50.0).abs() < 1e-6);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod action;
mod conductivity;
mod config;
mod error;
mod event;
mod record;
mod state;
mod status;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use conductivity::{Conductivity, Constant};
pub use config::{Body, Config, ConfigError, Method, Side};
pub use error::Error;
pub use event::Event;
pub use record::Record;
pub use state::Temperatures;
pub use status::Status;

use numkit_core::{Observer, StepIntegrable};

/// A two-body heat exchange simulation.
#[derive(Debug, Clone)]
pub struct HeatExchangeSimulation<H> {
    config: Config,
    conductivity: H,
    t: f64,
    state: Temperatures,
    history: Vec<Record>,
}

impl<H> HeatExchangeSimulation<H>
where
    H: Conductivity,
{
    /// Creates a simulation at `t = 0` from the initial body temperatures.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the config fails validation.
    pub fn new(config: Config, conductivity: H) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut sim = Self {
            config,
            conductivity,
            t: 0.0,
            state: Temperatures {
                bar: config.bar.temperature,
                water: config.water.temperature,
            },
            history: Vec::new(),
        };
        sim.history.push(sim.record());

        Ok(sim)
    }

    /// Returns the time derivatives of both temperatures at `state`.
    #[must_use]
    pub fn derivative(&self, state: &Temperatures) -> Temperatures {
        let delta_t = state.delta();
        let flow = self.conductivity.at(delta_t) * self.config.area * delta_t;

        Temperatures {
            bar: -flow / self.config.bar.heat_capacity(),
            water: flow / self.config.water.heat_capacity(),
        }
    }

    /// Advances the simulation by one step and returns the appended record.
    ///
    /// `dt` defaults to the configured time step.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStep`] if an explicit `dt` is not finite and
    /// positive. Nothing is changed in that case.
    pub fn step(&mut self, dt: Option<f64>) -> Result<Record, Error> {
        let dt = self.resolve_dt(dt)?;
        Ok(self.advance(dt))
    }

    /// Runs exactly `n` steps.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStep`] for an invalid explicit `dt`, before
    /// any step is taken.
    pub fn simulate(&mut self, n: usize, dt: Option<f64>) -> Result<(), Error> {
        self.simulate_observed(n, dt, ())?;
        Ok(())
    }

    /// Runs up to `n` steps, emitting an [`Event`] after each one.
    ///
    /// The observer may return [`Action::StopEarly`] to end the run.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStep`] for an invalid explicit `dt`, before
    /// any step is taken.
    pub fn simulate_observed<Obs>(
        &mut self,
        n: usize,
        dt: Option<f64>,
        mut observer: Obs,
    ) -> Result<Status, Error>
    where
        Obs: Observer<Event, Action>,
    {
        let dt = self.resolve_dt(dt)?;

        for step in 1..=n {
            let record = self.advance(dt);

            if let Some(Action::StopEarly) = observer.observe(&Event { step, record }) {
                return Ok(Status::StoppedByObserver);
            }
        }

        Ok(Status::Complete)
    }

    /// Steps while `t < stop_time` and returns the number of steps taken.
    ///
    /// The final step is not shortened, so `t` may pass `stop_time` by less
    /// than one step.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStep`] for an invalid explicit `dt`, before
    /// any step is taken.
    pub fn simulate_until(&mut self, stop_time: f64, dt: Option<f64>) -> Result<usize, Error> {
        let dt = self.resolve_dt(dt)?;

        let mut steps = 0;
        while self.t < stop_time {
            self.advance(dt);
            steps += 1;
        }

        Ok(steps)
    }

    /// Returns the current time.
    #[must_use]
    pub fn t(&self) -> f64 {
        self.t
    }

    /// Returns the current bar temperature.
    #[must_use]
    pub fn bar_temperature(&self) -> f64 {
        self.state.bar
    }

    /// Returns the current water temperature.
    #[must_use]
    pub fn water_temperature(&self) -> f64 {
        self.state.water
    }

    /// Returns both current temperatures.
    #[must_use]
    pub fn temperatures(&self) -> Temperatures {
        self.state
    }

    /// Returns the heat transfer coefficient at the current `ΔT`.
    #[must_use]
    pub fn h(&self) -> f64 {
        self.conductivity.at(self.state.delta())
    }

    /// Returns the config.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns every record, starting with the initial state.
    #[must_use]
    pub fn history(&self) -> &[Record] {
        &self.history
    }

    /// Returns the time column of the history.
    #[must_use]
    pub fn t_history(&self) -> Vec<f64> {
        self.column(|r| r.t)
    }

    /// Returns the bar temperature column of the history.
    #[must_use]
    pub fn bar_history(&self) -> Vec<f64> {
        self.column(|r| r.bar)
    }

    /// Returns the water temperature column of the history.
    #[must_use]
    pub fn water_history(&self) -> Vec<f64> {
        self.column(|r| r.water)
    }

    /// Returns the heat transfer coefficient column of the history.
    #[must_use]
    pub fn h_history(&self) -> Vec<f64> {
        self.column(|r| r.h)
    }

    fn resolve_dt(&self, dt: Option<f64>) -> Result<f64, Error> {
        match dt {
            None => Ok(self.config.dt),
            Some(dt) if config::is_positive(dt) => Ok(dt),
            Some(dt) => Err(Error::InvalidStep { dt }),
        }
    }

    fn advance(&mut self, dt: f64) -> Record {
        let rate = self.derivative(&self.state);

        self.state = match self.config.method {
            Method::Euler => self.state.step(&rate, dt),
            Method::ImprovedEuler => {
                let predictor = self.state.step(&rate, 0.5 * dt);
                self.state.step(&self.derivative(&predictor), dt)
            }
        };
        self.t += dt;

        let record = self.record();
        self.history.push(record);
        record
    }

    fn record(&self) -> Record {
        Record {
            t: self.t,
            bar: self.state.bar,
            water: self.state.water,
            h: self.h(),
        }
    }

    fn column(&self, field: impl Fn(&Record) -> f64) -> Vec<f64> {
        self.history.iter().map(field).collect()
    }
}
