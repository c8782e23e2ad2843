//! Transient simulations advanced by explicit time stepping.
//!
//! # Simulations
//!
//! - [`heat_exchange`]: two lumped bodies exchanging heat through a contact area

pub mod heat_exchange;
