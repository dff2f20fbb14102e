//! Population initialization and batch evaluation.

use rand::Rng;
use rayon::prelude::*;

use super::types::{Evaluator, Individual};
use crate::random::shuffle;

/// Draws a uniformly random permutation of `0..n`.
pub fn random_chromosome<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut chromosome: Vec<usize> = (0..n).collect();
    shuffle(&mut chromosome, rng);
    chromosome
}

/// Creates one random, evaluated individual.
pub fn create_individual<E: Evaluator, R: Rng>(evaluator: &E, rng: &mut R) -> Individual {
    Individual::evaluated(random_chromosome(evaluator.chromosome_len(), rng), evaluator)
}

/// Creates `size` independent random individuals.
///
/// Duplicates are allowed. All chromosomes are drawn from `rng` first, in
/// order, and only then evaluated, so `parallel` does not affect the result.
pub fn initialize_population<E: Evaluator, R: Rng>(
    evaluator: &E,
    size: usize,
    rng: &mut R,
    parallel: bool,
) -> Vec<Individual> {
    let n = evaluator.chromosome_len();
    let chromosomes: Vec<Vec<usize>> = (0..size).map(|_| random_chromosome(n, rng)).collect();
    evaluate_all(evaluator, chromosomes, parallel)
}

/// Evaluates chromosomes into individuals, preserving order.
pub fn evaluate_all<E: Evaluator>(
    evaluator: &E,
    chromosomes: Vec<Vec<usize>>,
    parallel: bool,
) -> Vec<Individual> {
    if parallel {
        chromosomes
            .into_par_iter()
            .map(|c| Individual::evaluated(c, evaluator))
            .collect()
    } else {
        chromosomes
            .into_iter()
            .map(|c| Individual::evaluated(c, evaluator))
            .collect()
    }
}

/// Returns the first individual with minimum cost.
///
/// # Panics
/// Panics if `population` is empty.
pub fn find_best(population: &[Individual]) -> &Individual {
    population
        .iter()
        .min_by(|a, b| a.cost().total_cmp(&b.cost()))
        .expect("population must not be empty")
}
