//! Tournament selection.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use rand::Rng;

use super::types::Individual;

/// Tournament selection: draw `k` members uniformly **with replacement**,
/// return the index of the cheapest.
///
/// Ties keep the earliest draw. `k` may exceed the population size.
/// Higher `k` means stronger selection pressure; `k = 1` is uniform random
/// selection.
///
/// # Complexity
/// O(k) per selection
///
/// # Panics
/// Panics if `population` is empty or `k == 0`.
pub fn tournament_select<R: Rng>(population: &[Individual], k: usize, rng: &mut R) -> usize {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );
    assert!(k >= 1, "tournament size must be at least 1");
    let n = population.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if population[idx].cost() < population[best_idx].cost() {
            best_idx = idx;
        }
    }
    best_idx
}
