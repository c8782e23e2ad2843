//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, so one
//! observer can serve the root finder and the heat exchange simulation.
//!
//! # Event traits
//!
//! - [`HasResidual`]: events that carry a residual value
//! - [`HasTime`]: events that carry a simulation time
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use numkit_core::Observer;
//! use numkit_observers::traits::{CanStopEarly, HasResidual};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//!     min_steps: usize,
//!     seen: usize,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         self.seen += 1;
//!         if self.seen >= self.min_steps && event.residual().abs() < self.tolerance {
//!             return Some(A::stop_early());
//!         }
//!         None
//!     }
//! }
//! ```

use numkit_solvers::{equation::newton_raphson, transient::heat_exchange};

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the residual for this event.
    fn residual(&self) -> f64;
}

/// An event that carries a simulation time.
pub trait HasTime {
    /// Returns the simulation time after this event's step.
    fn time(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasResidual for newton_raphson::Event {
    fn residual(&self) -> f64 {
        self.iterate.y
    }
}

impl HasTime for heat_exchange::Event {
    fn time(&self) -> f64 {
        self.record.t
    }
}

impl CanStopEarly for newton_raphson::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for heat_exchange::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
