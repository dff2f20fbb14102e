//! Error types.
//!
//! Two failure classes exist: a malformed run configuration
//! ([`ConfigError`]) and malformed problem data ([`InstanceError`]). Both are
//! detected up front; nothing inside the evolutionary loop can fail.

use thiserror::Error;

/// Invalid GA configuration, detected before the first random draw.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("population_size must be at least 1")]
    PopulationSize,

    #[error("crossover_rate must lie in [0, 1], got {0}")]
    CrossoverRate(f64),

    #[error("mutation_rate must lie in [0, 1], got {0}")]
    MutationRate(f64),

    #[error("tournament_size must be at least 1")]
    TournamentSize,

    #[error("time_limit_ms must be positive or None")]
    TimeLimit,
}

/// Malformed problem instance.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InstanceError {
    #[error("instance has no jobs")]
    NoJobs,

    #[error("instance has no machines")]
    NoMachines,

    #[error("{field}: expected {expected} entries, found {found}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("setup matrix row {row} has {len} entries, matrix must be square")]
    NonSquareSetup { row: usize, len: usize },

    #[error("{field}[{index}] must be a non-negative number")]
    Negative { field: &'static str, index: usize },

    #[error("invalid instance json: {0}")]
    Json(String),
}

impl From<serde_json::Error> for InstanceError {
    fn from(err: serde_json::Error) -> Self {
        InstanceError::Json(err.to_string())
    }
}
