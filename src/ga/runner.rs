//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → sort → trace → elitism → selection → crossover →
//! mutation → repeat.

use super::config::GaConfig;
use super::operators::swap_mutation;
use super::selection::tournament;
use super::types::Candidate;
use crate::error::ConfigError;
use crate::puzzle::Board;
use crate::random::create_rng;
use rand::Rng;
use tracing::{debug, info};

/// Result of a GA run.
#[derive(Debug, Clone, PartialEq)]
pub struct GaResult {
    /// Best board of every generation, in order. Never empty.
    pub trace: Vec<Board>,

    /// Last element of `trace`.
    pub best: Board,

    /// Fitness of `best`.
    pub best_fitness: u32,

    /// Number of generations traced (same as `trace.len()`).
    pub generations: usize,

    /// Whether `best` is the goal.
    pub solved: bool,

    /// Best fitness of every generation. Non-increasing whenever
    /// `elite_count >= 1`.
    pub fitness_history: Vec<u32>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use eight_puzzle_search::ga::{GaConfig, GaRunner};
/// use eight_puzzle_search::puzzle::Board;
///
/// let start = Board::new([1, 2, 3, 0, 5, 6, 4, 7, 8]).unwrap();
/// let config = GaConfig::default().with_max_generations(200).with_seed(42);
/// let result = GaRunner::run(&start, &config).unwrap();
/// // Four cells of the start board are out of place.
/// assert!(result.fitness_history[0] <= 4);
/// assert_eq!(result.solved, result.best.is_goal());
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Evolves a population seeded with `start` until a generation's best
    /// candidate is the goal or `max_generations` generations are traced.
    ///
    /// Running out of generations is not an error; check
    /// [`GaResult::solved`].
    ///
    /// # Errors
    /// Returns the [`ConfigError`] from [`GaConfig::validate`] before doing
    /// any work.
    pub fn run(start: &Board, config: &GaConfig) -> Result<GaResult, ConfigError> {
        config.validate()?;

        let mut rng = create_rng(config.seed);

        // 1. Initialize population: the start board plus random boards
        let mut population: Vec<Candidate> = Vec::with_capacity(config.population_size);
        population.push(Candidate::new(*start));
        let randoms: Vec<Board> = (1..config.population_size)
            .map(|_| Board::random(&mut rng))
            .collect();
        population.extend(score_all(randoms, config.parallel));

        let mut trace = Vec::new();
        let mut fitness_history = Vec::new();
        let mut leader = population[0];

        // 2. Evolutionary loop
        for generation in 0..config.max_generations {
            // Stable sort: equal fitness keeps insertion order
            population.sort_by_key(|candidate| candidate.fitness);

            leader = population[0];
            trace.push(leader.board);
            fitness_history.push(leader.fitness);

            if config.log_interval > 0 && generation % config.log_interval == 0 {
                debug!(generation, best_fitness = leader.fitness, "ga generation");
            }

            if leader.is_goal() {
                info!(generation, "ga reached the goal");
                break;
            }

            // Elite preservation
            let mut next_gen: Vec<Candidate> = population[..config.elite_count].to_vec();

            // Generate offspring
            let mut offspring = Vec::with_capacity(config.population_size - config.elite_count);
            while next_gen.len() + offspring.len() < config.population_size {
                let parent_a = tournament(&population, config.tournament_size, &mut rng).board;
                let parent_b = tournament(&population, config.tournament_size, &mut rng).board;

                let mut child = config.crossover.apply(&parent_a, &parent_b, &mut rng);
                if rng.random_range(0.0..1.0) < config.mutation_rate {
                    child = swap_mutation(&child, &mut rng);
                }
                offspring.push(child);
            }

            next_gen.extend(score_all(offspring, config.parallel));
            population = next_gen;
        }

        let generations = trace.len();
        if !leader.is_goal() {
            info!(
                generations,
                best_fitness = leader.fitness,
                "ga stopped without reaching the goal"
            );
        }

        Ok(GaResult {
            best: leader.board,
            best_fitness: leader.fitness,
            generations,
            solved: leader.board.is_goal(),
            trace,
            fitness_history,
        })
    }
}

/// Scores boards, in parallel when asked and available.
///
/// Boards are generated before scoring, so the RNG stream and therefore the
/// result do not depend on the scoring mode.
#[cfg(feature = "parallel")]
fn score_all(boards: Vec<Board>, parallel: bool) -> Vec<Candidate> {
    use rayon::prelude::*;

    if parallel {
        boards.into_par_iter().map(Candidate::new).collect()
    } else {
        boards.into_iter().map(Candidate::new).collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn score_all(boards: Vec<Board>, _parallel: bool) -> Vec<Candidate> {
    boards.into_iter().map(Candidate::new).collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::Crossover;

    fn start() -> Board {
        Board::new([1, 2, 3, 0, 5, 6, 4, 7, 8]).unwrap()
    }

    #[test]
    fn test_start_on_goal_stops_at_generation_zero() {
        let config = GaConfig::default().with_seed(42);
        let result = GaRunner::run(&Board::GOAL, &config).unwrap();

        assert_eq!(result.trace, vec![Board::GOAL]);
        assert_eq!(result.generations, 1);
        assert_eq!(result.best_fitness, 0);
        assert!(result.solved);
    }

    #[test]
    fn test_elite_preservation() {
        let config = GaConfig::default()
            .with_max_generations(300)
            .with_seed(42);
        let result = GaRunner::run(&start(), &config).unwrap();

        // Fitness should never get worse across generations
        for window in result.fitness_history.windows(2) {
            assert!(
                window[1] <= window[0],
                "fitness should be monotonically non-increasing with elitism: {} > {}",
                window[1],
                window[0]
            );
        }
    }

    #[test]
    fn test_result_consistency() {
        let config = GaConfig::default()
            .with_max_generations(50)
            .with_seed(7);
        let result = GaRunner::run(&start(), &config).unwrap();

        assert!(!result.trace.is_empty());
        assert!(result.trace.len() <= 50);
        assert_eq!(result.generations, result.trace.len());
        assert_eq!(result.fitness_history.len(), result.trace.len());
        assert_eq!(result.trace.last(), Some(&result.best));
        assert_eq!(result.solved, result.best.is_goal());
        assert_eq!(result.solved, result.best_fitness == 0);
        // The start board has fitness 4; the first generation's best can only be as good or better.
        assert!(result.fitness_history[0] <= 4);
        if !result.solved {
            assert_eq!(result.generations, 50);
        }
    }

    #[test]
    fn test_same_seed_same_trace() {
        let config = GaConfig::default()
            .with_max_generations(100)
            .with_seed(1234);
        let a = GaRunner::run(&start(), &config).unwrap();
        let b = GaRunner::run(&start(), &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_elites_fill_population_freezes_search() {
        // With no room for offspring, the population never changes.
        let config = GaConfig::default()
            .with_population_size(20)
            .with_elite_count(20)
            .with_max_generations(10)
            .with_seed(3);
        let result = GaRunner::run(&start(), &config).unwrap();

        if !result.solved {
            assert_eq!(result.generations, 10);
            assert!(result.trace.windows(2).all(|w| w[0] == w[1]));
        }
    }

    #[test]
    fn test_single_candidate_population() {
        let config = GaConfig::default()
            .with_population_size(1)
            .with_elite_count(0)
            .with_max_generations(20)
            .with_seed(5);
        let result = GaRunner::run(&start(), &config).unwrap();
        assert!(result.generations >= 1);
        assert_eq!(result.trace[0], start());
    }

    #[test]
    fn test_repaired_crossover_keeps_boards_legal() {
        let config = GaConfig::default()
            .with_crossover(Crossover::SinglePointRepaired)
            .with_max_generations(200)
            .with_seed(11);
        let result = GaRunner::run(&start(), &config).unwrap();
        assert!(result.trace.iter().all(Board::is_permutation));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GaConfig::default().with_population_size(10);
        assert_eq!(
            GaRunner::run(&start(), &config),
            Err(ConfigError::EliteCountTooLarge {
                elite_count: 20,
                population_size: 10
            })
        );

        let config = GaConfig::default().with_max_generations(0);
        assert_eq!(
            GaRunner::run(&start(), &config),
            Err(ConfigError::ZeroGenerations)
        );
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let config = GaConfig::default()
            .with_max_generations(100)
            .with_seed(42);
        let sequential = GaRunner::run(&start(), &config.clone().with_parallel(false)).unwrap();
        let parallel = GaRunner::run(&start(), &config.with_parallel(true)).unwrap();
        assert_eq!(sequential, parallel);
    }
}
