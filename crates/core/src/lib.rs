//! Core traits and types for the numkit toolkit.
//!
//! This crate defines the shared abstractions the numerical methods and
//! observers build on:
//!
//! - [`Samples`]: an ordered two-column `(x, y)` table
//! - [`linalg`]: dense solve and inversion with partial pivoting
//! - [`Observer`]: receives method events and optionally returns control actions
//! - [`StepIntegrable`]: a state that explicit integrators can advance

pub mod linalg;

mod observer;
mod samples;
mod step;

pub use linalg::LinalgError;
pub use observer::Observer;
pub use samples::{Samples, SamplesError};
pub use step::{DerivativeOf, StepIntegrable};
