//! Newton-Raphson root finding with a forward-difference slope.
//!
//! Each step estimates the slope of `f` at the current iterate and moves to
//! the root of the tangent line:
//!
//! ```text
//! slope   = (f(x + dx) - f(x)) · scale / dx
//! x_{n+1} = x_n - f(x_n) · scale / slope
//! ```
//!
//! The solver keeps every iterate. Index 0 of the history is the initial
//! guess and each successful [`NewtonRaphson::step`] appends exactly one entry.
//!
//! # Example
//!
//! ```
//! use numkit_solvers::equation::newton_raphson::{Config, NewtonRaphson, Status};
//!
//! let config = Config::with_dx(1e-6).unwrap();
//! let mut solver = NewtonRaphson::new(|x: f64| x * x - 2.0, 1.0, config);
//!
//! let solution = solver.run(1e-6, Some(50)).unwrap();
//! assert_eq!(solution.status, Status::Converged);
//! assert!((solution.x - 2.0_f64.sqrt()).abs() < 1e-6);
//! ```

mod action;
mod config;
mod error;
mod event;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use numkit_core::Observer;

/// A point `(x, f(x))` visited by the solver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Iterate {
    pub x: f64,
    pub y: f64,
}

/// A stateful Newton-Raphson solver for `f(x) = 0`.
#[derive(Debug, Clone)]
pub struct NewtonRaphson<F> {
    f: F,
    config: Config,
    current: Iterate,
    history: Vec<Iterate>,
}

impl<F> NewtonRaphson<F>
where
    F: Fn(f64) -> f64,
{
    /// Creates a solver starting at `x0`.
    ///
    /// `f` is evaluated once here to record the initial iterate.
    pub fn new(f: F, x0: f64, config: Config) -> Self {
        let current = Iterate { x: x0, y: f(x0) };
        Self {
            f,
            config,
            current,
            history: vec![current],
        }
    }

    /// Performs one Newton step and returns the new iterate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroSlope`] or [`Error::NonFiniteSlope`] when the
    /// slope estimate cannot be divided by. The solver is left unchanged.
    pub fn step(&mut self) -> Result<Iterate, Error> {
        let Iterate { x, y } = self.current;
        let dx = self.config.dx();
        let scale = self.config.scale();

        let slope = ((self.f)(x + dx) - y) * scale / dx;
        if slope == 0.0 {
            return Err(Error::ZeroSlope { x });
        }
        if !slope.is_finite() {
            return Err(Error::NonFiniteSlope { x, slope });
        }

        let x = x - y * scale / slope;
        let next = Iterate { x, y: (self.f)(x) };

        self.current = next;
        self.history.push(next);

        Ok(next)
    }

    /// Steps until `|y| <= epsilon` or `max_steps` steps have been taken.
    ///
    /// Running out of steps is not an error; check [`Solution::status`].
    ///
    /// # Errors
    ///
    /// Returns an error if any step fails.
    pub fn run(&mut self, epsilon: f64, max_steps: Option<usize>) -> Result<Solution, Error> {
        self.run_observed(epsilon, max_steps, ())
    }

    /// Like [`run`](Self::run), emitting an [`Event`] after each step.
    ///
    /// The observer may return [`Action::StopEarly`] to end the run.
    /// A `NaN` residual never counts as converged.
    ///
    /// # Errors
    ///
    /// Returns an error if any step fails.
    pub fn run_observed<Obs>(
        &mut self,
        epsilon: f64,
        max_steps: Option<usize>,
        mut observer: Obs,
    ) -> Result<Solution, Error>
    where
        Obs: Observer<Event, Action>,
    {
        let limit = max_steps.unwrap_or(usize::MAX);
        let mut steps = 0;

        while !self.has_converged(epsilon) {
            if steps >= limit {
                return Ok(self.solution(Status::MaxSteps, steps));
            }

            let iterate = self.step()?;
            steps += 1;

            let event = Event {
                step: steps,
                iterate,
            };
            if let Some(Action::StopEarly) = observer.observe(&event) {
                return Ok(self.solution(Status::StoppedByObserver, steps));
            }
        }

        Ok(self.solution(Status::Converged, steps))
    }

    /// Returns the current estimate of the root.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.current.x
    }

    /// Returns `f` at the current estimate.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.current.y
    }

    /// Returns the config.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns every iterate, starting with the initial guess.
    #[must_use]
    pub fn history(&self) -> &[Iterate] {
        &self.history
    }

    /// Returns the x column of the history.
    #[must_use]
    pub fn x_history(&self) -> Vec<f64> {
        self.history.iter().map(|it| it.x).collect()
    }

    /// Returns the y column of the history.
    #[must_use]
    pub fn y_history(&self) -> Vec<f64> {
        self.history.iter().map(|it| it.y).collect()
    }

    /// Returns the total number of successful steps.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.history.len() - 1
    }

    fn has_converged(&self, epsilon: f64) -> bool {
        self.current.y.abs() <= epsilon
    }

    fn solution(&self, status: Status, steps: usize) -> Solution {
        Solution {
            status,
            x: self.current.x,
            y: self.current.y,
            steps,
        }
    }
}
