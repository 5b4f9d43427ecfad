//! SA configuration.

use crate::error::ConfigError;

/// Configuration for the simulated annealing engine.
///
/// Temperature follows a geometric schedule, `T_{k+1} = cooling_rate * T_k`,
/// applied once per iteration and never reset.
///
/// # Examples
///
/// ```
/// use eight_puzzle_search::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(100.0)
///     .with_cooling_rate(0.99)
///     .with_max_iterations(10_000)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Starting temperature. Higher values accept more uphill moves early on.
    pub initial_temperature: f64,

    /// Geometric cooling factor in (0, 1]. Higher = slower cooling.
    pub cooling_rate: f64,

    /// Iteration budget (one neighbor evaluation per iteration).
    pub max_iterations: usize,

    /// Temperature at or below which uphill moves are always rejected.
    ///
    /// Keeps `exp(-delta / T)` away from a division by a vanishing `T`.
    /// The schedule itself keeps cooling past this point.
    pub min_temperature: f64,

    /// Sample the best cost every this many iterations. 0 disables sampling.
    pub history_interval: usize,

    /// Emit a progress event every this many iterations. 0 disables.
    pub log_interval: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            cooling_rate: 0.995,
            max_iterations: 50_000,
            min_temperature: 1e-12,
            history_interval: 100,
            log_interval: 5_000,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_history_interval(mut self, n: usize) -> Self {
        self.history_interval = n;
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
        if !(self.initial_temperature > 0.0 && self.initial_temperature.is_finite()) {
            return Err(ConfigError::NonPositiveTemperature(self.initial_temperature));
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate <= 1.0) {
            return Err(ConfigError::CoolingRateOutOfRange(self.cooling_rate));
        }
        if self.min_temperature.is_nan() || self.min_temperature < 0.0 {
            return Err(ConfigError::NegativeMinTemperature(self.min_temperature));
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        Ok(())
    }
}
