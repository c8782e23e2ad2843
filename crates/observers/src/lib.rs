//! Reusable observers for the numkit solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the iterative methods in `numkit-solvers`.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for cross-solver observers
//!   ([`HasResidual`], [`HasTime`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`TraceRecorder`]: an in-memory log of named traces
//! - [`StopWhen`]: stops a solver once a predicate over its events holds
//!
//! [`Observer`]: numkit_core::Observer
//! [`HasResidual`]: traits::HasResidual
//! [`HasTime`]: traits::HasTime
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod recorder;
mod stop;

pub use recorder::{TraceRecorder, Traceable};
pub use stop::{StopWhen, residual_below, time_reaches};
