//! SA execution loop.

use super::config::SaConfig;
use crate::error::ConfigError;
use crate::puzzle::{manhattan_distance, neighbors, Board};
use crate::random::create_rng;
use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::{debug, info, warn};

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone, PartialEq)]
pub struct SaResult {
    /// The best board seen during the run.
    pub best: Board,

    /// Manhattan distance of the best board.
    pub best_cost: u32,

    /// Number of iterations (neighbor evaluations) performed.
    pub iterations: usize,

    /// Temperature when the run stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,

    /// Whether `best` is the goal.
    pub solved: bool,

    /// Best cost sampled at regular intervals, starting with the start
    /// board's cost and ending with the final best cost.
    pub cost_history: Vec<u32>,
}

/// Executes the Simulated Annealing algorithm.
///
/// # Usage
///
/// ```
/// use eight_puzzle_search::puzzle::{manhattan_distance, Board};
/// use eight_puzzle_search::sa::{SaConfig, SaRunner};
///
/// let start = Board::from_rows([[1, 2, 3], [4, 5, 6], [0, 7, 8]]).unwrap();
/// let result = SaRunner::run(&start, &SaConfig::default().with_seed(42)).unwrap();
/// assert!(result.best_cost <= manhattan_distance(&start));
/// ```
pub struct SaRunner;

impl SaRunner {
    /// Anneals from `start`, returning the best board seen.
    ///
    /// Stops when the best board is the goal, when the iteration budget is
    /// spent, or when the current board has no legal move. None of these
    /// is an error.
    ///
    /// # Errors
    /// Returns the [`ConfigError`] from [`SaConfig::validate`] before doing
    /// any work.
    pub fn run(start: &Board, config: &SaConfig) -> Result<SaResult, ConfigError> {
        config.validate()?;

        let mut rng = create_rng(config.seed);

        let mut current = *start;
        let mut current_cost = manhattan_distance(&current);
        let mut best = current;
        let mut best_cost = current_cost;

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        let mut cost_history = vec![best_cost];

        while iterations < config.max_iterations && best_cost > 0 {
            let candidates = neighbors(&current);
            let Some(&next) = candidates.choose(&mut rng) else {
                warn!(iterations, "current board has no legal move, stopping early");
                break;
            };
            let next_cost = manhattan_distance(&next);
            let delta = i64::from(next_cost) - i64::from(current_cost);

            // Metropolis acceptance criterion
            let accept = if delta < 0 {
                improving_moves += 1;
                true
            } else {
                let probability =
                    acceptance_probability(delta as f64, temperature, config.min_temperature);
                rng.random_range(0.0..1.0) < probability
            };

            if accept {
                current = next;
                current_cost = next_cost;
                accepted_moves += 1;

                if current_cost < best_cost {
                    best = current;
                    best_cost = current_cost;
                }
            }

            // Cool down
            temperature *= config.cooling_rate;
            iterations += 1;

            if config.history_interval > 0 && iterations % config.history_interval == 0 {
                cost_history.push(best_cost);
            }
            if config.log_interval > 0 && iterations % config.log_interval == 0 {
                debug!(iterations, temperature, current_cost, best_cost, "sa progress");
            }
        }

        // Final history entry
        if cost_history.last() != Some(&best_cost) {
            cost_history.push(best_cost);
        }

        let solved = best.is_goal();
        info!(iterations, best_cost, solved, "sa finished");

        Ok(SaResult {
            best,
            best_cost,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            solved,
            cost_history,
        })
    }
}

/// Probability of moving to a neighbor whose cost differs by `delta`.
///
/// Non-worsening moves (`delta <= 0`) always pass. Worsening moves pass with
/// `exp(-delta / temperature)`, or never once `temperature` has fallen to
/// `min_temperature`.
///
/// ```
/// use eight_puzzle_search::sa::acceptance_probability;
///
/// assert_eq!(acceptance_probability(-2.0, 1.0, 1e-12), 1.0);
/// assert!((acceptance_probability(1.0, 1.0, 1e-12) - (-1.0f64).exp()).abs() < 1e-12);
/// assert_eq!(acceptance_probability(1.0, 1e-300, 1e-12), 0.0);
/// ```
pub fn acceptance_probability(delta: f64, temperature: f64, min_temperature: f64) -> f64 {
    if delta <= 0.0 {
        1.0
    } else if temperature <= min_temperature {
        0.0
    } else {
        (-delta / temperature).exp()
    }
}
