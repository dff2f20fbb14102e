//! Core GA types.
//!
//! [`Evaluator`] is the contract between the generic evolutionary loop and
//! the cost function; [`SetupEvaluator`] is the scheduling implementation.
//! [`Individual`] is the immutable `{chromosome, cost}` value the loop
//! moves around.

use serde::Serialize;

use crate::decoder;
use crate::instance::Instance;

/// Maps a permutation chromosome to a scalar cost (lower is better).
///
/// # Thread Safety
///
/// `Evaluator` must be `Send + Sync` because the runner may evaluate a
/// generation's children in parallel using rayon.
pub trait Evaluator: Send + Sync {
    /// Length of every chromosome; chromosomes are permutations of
    /// `0..chromosome_len()`.
    fn chromosome_len(&self) -> usize;

    /// Cost of `chromosome`. Must be a pure function of its argument.
    fn evaluate(&self, chromosome: &[usize]) -> f64;
}

/// Makespan evaluator: decodes and keeps only the makespan.
#[derive(Debug, Clone, Copy)]
pub struct SetupEvaluator<'a> {
    instance: &'a Instance,
}

impl<'a> SetupEvaluator<'a> {
    pub fn new(instance: &'a Instance) -> Self {
        Self { instance }
    }

    pub fn instance(&self) -> &'a Instance {
        self.instance
    }
}

impl Evaluator for SetupEvaluator<'_> {
    fn chromosome_len(&self) -> usize {
        self.instance.n_jobs()
    }

    fn evaluate(&self, chromosome: &[usize]) -> f64 {
        decoder::makespan(chromosome, self.instance)
    }
}

/// A candidate solution: a job ordering and its cost.
///
/// Constructed once and never modified. Offspring are always new values;
/// elitism carries a clone, so no two individuals share chromosome storage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Individual {
    chromosome: Vec<usize>,
    cost: f64,
}

impl Individual {
    /// Wraps an already-evaluated chromosome.
    pub fn new(chromosome: Vec<usize>, cost: f64) -> Self {
        Self { chromosome, cost }
    }

    /// Evaluates `chromosome` and wraps it.
    pub fn evaluated<E: Evaluator + ?Sized>(chromosome: Vec<usize>, evaluator: &E) -> Self {
        let cost = evaluator.evaluate(&chromosome);
        Self { chromosome, cost }
    }

    pub fn chromosome(&self) -> &[usize] {
        &self.chromosome
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn into_chromosome(self) -> Vec<usize> {
        self.chromosome
    }
}

/// Returns `true` if `chromosome` contains every value of `0..n` exactly once.
pub fn is_permutation(chromosome: &[usize], n: usize) -> bool {
    if chromosome.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &v in chromosome {
        if v >= n || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}
