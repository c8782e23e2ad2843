//! Root finding for scalar equations `f(x) = 0`.
//!
//! # Solvers
//!
//! - [`newton_raphson`]: Newton iteration with a forward-difference slope

pub mod newton_raphson;
