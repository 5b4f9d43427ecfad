//! Heuristic search for the 8-puzzle.
//!
//! Two independent engines try to turn a start board into
//! [`Board::GOAL`](puzzle::Board::GOAL):
//!
//! - **Genetic Algorithm (GA)**: a population of boards scored by misplaced
//!   tiles, evolved with elitism, tournament selection, single-point
//!   crossover and swap mutation. Produces the best board of every
//!   generation.
//! - **Simulated Annealing (SA)**: a random walk over legal blank moves,
//!   scored by Manhattan distance, with Metropolis acceptance and geometric
//!   cooling. Produces the best board seen.
//!
//! Both are heuristics. Neither guarantees reaching the goal within its
//! budget; callers compare the returned board with the goal.
//!
//! # Example
//!
//! ```
//! use eight_puzzle_search::{annealing_solve, genetic_solve};
//!
//! let trace = genetic_solve([1, 2, 3, 0, 5, 6, 4, 7, 8], 100, 0.2, 500).unwrap();
//! let ga_solved = trace.last().is_some_and(|board| board.is_goal());
//!
//! let best = annealing_solve([[1, 2, 3], [4, 5, 6], [0, 7, 8]], 1000.0, 0.995, 50_000).unwrap();
//! let sa_solved = best.is_goal();
//! # let _ = (ga_solved, sa_solved);
//! ```

pub mod error;
pub mod ga;
pub mod puzzle;
pub mod random;
pub mod sa;

pub use error::{ConfigError, PuzzleError, SolveError};
pub use puzzle::Board;

use ga::{GaConfig, GaRunner};
use sa::{SaConfig, SaRunner};

/// Runs the genetic engine from a flat start board with a random seed.
///
/// Returns the best board of every generation; the last one is the goal
/// exactly when the run succeeded.
///
/// # Errors
/// [`SolveError::Board`] if `start` is not a permutation of `0..=8`,
/// [`SolveError::Config`] if the parameters are rejected (for example a
/// population smaller than the 20 elites).
pub fn genetic_solve(
    start: [u8; puzzle::CELLS],
    population_size: usize,
    mutation_rate: f64,
    max_generations: usize,
) -> Result<Vec<Board>, SolveError> {
    let start = Board::new(start)?;
    let config = GaConfig::default()
        .with_population_size(population_size)
        .with_mutation_rate(mutation_rate)
        .with_max_generations(max_generations);
    Ok(GaRunner::run(&start, &config)?.trace)
}

/// Runs the annealing engine from a 3×3 start grid with a random seed.
///
/// Returns the best board seen.
///
/// # Errors
/// [`SolveError::Board`] if `start` is not a permutation of `0..=8`,
/// [`SolveError::Config`] if the parameters are rejected.
pub fn annealing_solve(
    start: [[u8; puzzle::SIDE]; puzzle::SIDE],
    initial_temperature: f64,
    cooling_rate: f64,
    max_iterations: usize,
) -> Result<Board, SolveError> {
    let start = Board::from_rows(start)?;
    let config = SaConfig::default()
        .with_initial_temperature(initial_temperature)
        .with_cooling_rate(cooling_rate)
        .with_max_iterations(max_iterations);
    Ok(SaRunner::run(&start, &config)?.best)
}
