//! Numerical methods built on `numkit-core`.
//!
//! - [`quadrature`]: composite Simpson integration and [`functions_difference`]
//! - [`interpolation`]: linear and natural cubic splines through samples
//! - [`approximation`]: least-squares polynomial fits and their error
//! - [`equation`]: Newton-Raphson root finding
//! - [`transient`]: time-stepped heat exchange simulation
//! - [`tabularize`]: sample a function onto a table
//!
//! Iterative methods expose `*_observed` entry points that emit events to a
//! [`numkit_core::Observer`], which may stop them early.

pub mod approximation;
pub mod equation;
pub mod interpolation;
pub mod quadrature;
pub mod transient;

mod sampling;

pub use approximation::{PolynomialApproximation, approximation_error};
pub use equation::newton_raphson::NewtonRaphson;
pub use interpolation::{CubicSpline, LinearSpline};
pub use quadrature::{functions_difference, simpson_integral};
pub use sampling::tabularize;
pub use transient::heat_exchange::HeatExchangeSimulation;
