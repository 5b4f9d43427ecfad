//! Simulated Annealing (SA) engine for the 8-puzzle.
//!
//! A single-board random walk over blank-tile moves, scored by
//! [`manhattan_distance`](crate::puzzle::manhattan_distance). Worsening
//! moves are accepted with the Metropolis probability under a geometric
//! cooling schedule; the best board ever seen is returned.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"

mod config;
mod runner;

pub use config::SaConfig;
pub use runner::{acceptance_probability, SaResult, SaRunner};
