//! GA configuration.
//!
//! [`GaConfig`] holds every parameter that controls the evolutionary loop.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Configuration for the scheduling GA.
///
/// # Defaults
///
/// ```
/// use u_pmsp::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.generations, 200);
/// assert_eq!(config.tournament_size, 3);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_pmsp::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(100)
///     .with_generations(500)
///     .with_tournament_size(5)
///     .with_mutation_rate(0.05)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaConfig {
    /// Number of individuals in every generation (at least 1).
    pub population_size: usize,

    /// Number of generations after the initial population.
    ///
    /// The run always performs exactly this many unless cancelled or out of
    /// time; there is no convergence-based early exit.
    pub generations: usize,

    /// Probability of recombining a selected pair (0.0–1.0).
    ///
    /// When recombination is skipped, both children are copies of the parents.
    pub crossover_rate: f64,

    /// Per-position swap probability (0.0–1.0).
    pub mutation_rate: f64,

    /// Tournament size `k` (at least 1). May exceed the population size.
    pub tournament_size: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a seed from the thread RNG.
    pub seed: Option<u64>,

    /// Whether to evaluate each generation's children in parallel.
    ///
    /// Results do not depend on this flag: all random draws of a generation
    /// are made on one RNG before evaluation starts.
    pub parallel: bool,

    /// Optional wall-clock limit in milliseconds, checked between generations.
    pub time_limit_ms: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            generations: 200,
            crossover_rate: 0.9,
            mutation_rate: 0.02,
            tournament_size: 3,
            seed: None,
            parallel: false,
            time_limit_ms: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the crossover rate. Out-of-range values are reported by
    /// [`validate`](Self::validate), not clamped.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the per-position mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// The first violated constraint, as a [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 1 {
            return Err(ConfigError::PopulationSize);
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(ConfigError::CrossoverRate(self.crossover_rate));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::MutationRate(self.mutation_rate));
        }
        if self.tournament_size < 1 {
            return Err(ConfigError::TournamentSize);
        }
        if self.time_limit_ms == Some(0) {
            return Err(ConfigError::TimeLimit);
        }
        Ok(())
    }
}
