//! Genetic Algorithm for makespan minimization.
//!
//! Chromosomes are job permutations decoded by [`crate::decoder`]. The loop
//! is a generational GA with single-elite survival:
//!
//! 1. Initial population of random permutations
//! 2. Per generation: keep the cheapest individual, fill the rest with
//!    tournament-selected pairs, order crossover, and swap mutation
//! 3. Track the best-ever individual and its cost history
//!
//! # Key Types
//!
//! - [`GaConfig`]: Population size, generations, operator rates, seed
//! - [`Evolution`]: One run, advanced a generation at a time
//! - [`GaRunner`]: Runs to completion with cancellation and time limit
//! - [`GaResult`]: Best individual and history
//! - [`Evaluator`] / [`SetupEvaluator`]: Chromosome cost
//!
//! # Reproducibility
//!
//! One seeded RNG per run feeds initialization, selection, crossover, and
//! mutation in a fixed order. Evaluation (the only parallel part) draws no
//! random numbers, so a seed reproduces the run regardless of thread count.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"

mod config;
pub mod operators;
mod population;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use population::{
    create_individual, evaluate_all, find_best, initialize_population, random_chromosome,
};
pub use runner::{Evolution, GaResult, GaRunner};
pub use selection::tournament_select;
pub use types::{is_permutation, Evaluator, Individual, SetupEvaluator};
