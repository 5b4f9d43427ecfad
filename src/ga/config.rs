//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::operators::Crossover;
use crate::error::ConfigError;

/// Configuration for the genetic engine.
///
/// # Defaults
///
/// ```
/// use eight_puzzle_search::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.elite_count, 20);
/// assert_eq!(config.max_generations, 50_000);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use eight_puzzle_search::ga::{Crossover, GaConfig};
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_mutation_rate(0.1)
///     .with_crossover(Crossover::SinglePointRepaired)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of candidates per generation. The start board counts as one.
    pub population_size: usize,

    /// Maximum number of generations traced before giving up.
    pub max_generations: usize,

    /// Number of top candidates copied unchanged into the next generation.
    ///
    /// A fixed count, not a fraction. Must not exceed `population_size`.
    pub elite_count: usize,

    /// Number of candidates sampled per tournament.
    pub tournament_size: usize,

    /// Probability of applying one swap mutation to an offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Recombination operator.
    pub crossover: Crossover,

    /// Score offspring in parallel with rayon.
    ///
    /// Has no effect unless the `parallel` feature is enabled. Results are
    /// identical either way.
    pub parallel: bool,

    /// Emit a progress event every this many generations. 0 disables.
    pub log_interval: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 50_000,
            elite_count: 20,
            tournament_size: 3,
            mutation_rate: 0.2,
            crossover: Crossover::default(),
            parallel: false,
            log_interval: 1_000,
            seed: None,
        }
    }
}

impl GaConfig {
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    pub fn with_elite_count(mut self, n: usize) -> Self {
        self.elite_count = n;
        self
    }

    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the mutation rate. Out-of-range values are rejected by
    /// [`validate`](Self::validate) rather than clamped.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    pub fn with_crossover(mut self, crossover: Crossover) -> Self {
        self.crossover = crossover;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_log_interval(mut self, n: usize) -> Self {
        self.log_interval = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 1 {
            return Err(ConfigError::PopulationTooSmall);
        }
        if self.elite_count > self.population_size {
            return Err(ConfigError::EliteCountTooLarge {
                elite_count: self.elite_count,
                population_size: self.population_size,
            });
        }
        if self.tournament_size == 0 {
            return Err(ConfigError::TournamentSizeZero);
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::MutationRateOutOfRange(self.mutation_rate));
        }
        if self.max_generations == 0 {
            return Err(ConfigError::ZeroGenerations);
        }
        Ok(())
    }
}
