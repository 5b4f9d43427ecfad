//! Error types.
//!
//! Three layers: [`PuzzleError`] for malformed boards, [`ConfigError`] for
//! rejected engine parameters, and [`SolveError`] which wraps both and is
//! what the runners return.

use thiserror::Error;

/// A board that is not a legal 8-puzzle arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PuzzleError {
    /// The input did not hold exactly nine labels.
    #[error("a board needs exactly 9 tiles, got {0}")]
    WrongLength(usize),

    /// A label outside `0..=8`.
    #[error("tile label {0} is out of range 0..=8")]
    LabelOutOfRange(u8),

    /// A label that occurs more than once.
    #[error("tile label {0} appears more than once")]
    DuplicateLabel(u8),
}

/// Engine parameters that would make a run meaningless or index out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("population_size must be at least 1")]
    PopulationTooSmall,

    #[error("elite_count {elite_count} exceeds population_size {population_size}")]
    EliteCountTooLarge {
        elite_count: usize,
        population_size: usize,
    },

    #[error("tournament_size must be at least 1")]
    TournamentSizeZero,

    #[error("mutation_rate must be in [0, 1], got {0}")]
    MutationRateOutOfRange(f64),

    #[error("max_generations must be at least 1")]
    ZeroGenerations,

    #[error("max_iterations must be at least 1")]
    ZeroIterations,

    #[error("initial_temperature must be positive and finite, got {0}")]
    NonPositiveTemperature(f64),

    #[error("cooling_rate must be in (0, 1], got {0}")]
    CoolingRateOutOfRange(f64),

    #[error("min_temperature must be non-negative, got {0}")]
    NegativeMinTemperature(f64),
}

/// Error returned by the search runners.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SolveError {
    #[error("invalid start board: {0}")]
    Board(#[from] PuzzleError),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            PuzzleError::DuplicateLabel(4).to_string(),
            "tile label 4 appears more than once"
        );
        let err = ConfigError::EliteCountTooLarge {
            elite_count: 20,
            population_size: 10,
        };
        assert_eq!(
            err.to_string(),
            "elite_count 20 exceeds population_size 10"
        );
    }

    #[test]
    fn test_solve_error_from() {
        let err: SolveError = ConfigError::ZeroGenerations.into();
        assert_eq!(err, SolveError::Config(ConfigError::ZeroGenerations));
        assert!(err.to_string().starts_with("invalid configuration"));

        let err: SolveError = PuzzleError::LabelOutOfRange(9).into();
        assert_eq!(err, SolveError::Board(PuzzleError::LabelOutOfRange(9)));
    }
}
