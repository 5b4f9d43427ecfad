//! Genetic Algorithm engine for the 8-puzzle.
//!
//! Evolves a fixed-size population of boards scored by
//! [`misplaced_tiles`](crate::puzzle::misplaced_tiles), recording the best
//! board of every generation.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, elitism, rates)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Generation trace and final statistics
//! - [`Candidate`]: A board paired with its fitness
//!
//! # Submodules
//!
//! - [`operators`]: Single-point crossover, duplicate repair, swap mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use operators::Crossover;
pub use runner::{GaResult, GaRunner};
pub use selection::tournament;
pub use types::Candidate;
