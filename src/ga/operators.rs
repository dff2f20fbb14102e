//! Permutation crossover and mutation.
//!
//! Both operators act on `&[usize]` job orderings and preserve the
//! permutation property by construction: crossover only places values it has
//! not placed yet, and mutation only exchanges existing values.
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Order Crossover (OX) with random cut points.
///
/// Draws `0 <= a < b <= n` (see [`random_cut_points`]) and delegates to
/// [`order_crossover_at`].
///
/// # Panics
/// Panics if parents have different lengths or are empty.
pub fn order_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> (Vec<usize>, Vec<usize>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    let (a, b) = random_cut_points(n, rng);
    order_crossover_at(parent1, parent2, a, b)
}

/// Order Crossover (OX) with explicit cut points `[a, b)`.
///
/// # Algorithm
///
/// 1. Copy `parent1[a..b]` into child1 at the same positions
/// 2. Scan parent2 from left to right, skipping values already in child1
/// 3. Place each remaining value into the next free slot, starting at `b`
///    and wrapping to 0
///
/// Child2 is built the same way with the parents swapped.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics unless `a < b <= n` and both parents have length `n`.
pub fn order_crossover_at(
    parent1: &[usize],
    parent2: &[usize],
    a: usize,
    b: usize,
) -> (Vec<usize>, Vec<usize>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(a < b && b <= n, "cut points must satisfy a < b <= n");

    (
        ox_build_child(parent1, parent2, a, b),
        ox_build_child(parent2, parent1, a, b),
    )
}

/// Build one OX child: copy `[a, b)` from `template`, fill from `donor`.
fn ox_build_child(template: &[usize], donor: &[usize], a: usize, b: usize) -> Vec<usize> {
    let n = template.len();
    let mut child = vec![usize::MAX; n];
    let mut in_segment = vec![false; n];

    for i in a..b {
        child[i] = template[i];
        in_segment[template[i]] = true;
    }

    // Free slots are exactly b..n followed by 0..a.
    let mut pos = b % n;
    for &val in donor {
        if !in_segment[val] {
            child[pos] = val;
            pos = (pos + 1) % n;
        }
    }

    child
}

/// Draws cut points `0 <= a < b <= n`.
///
/// Both endpoints are drawn uniformly from `0..=n`; `b` is redrawn until it
/// differs from `a`, then the pair is ordered.
///
/// # Panics
/// Panics if `n == 0`.
pub fn random_cut_points<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    assert!(n > 0, "cannot cut an empty chromosome");
    let a = rng.random_range(0..=n);
    let mut b = rng.random_range(0..=n);
    while b == a {
        b = rng.random_range(0..=n);
    }
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

// ============================================================================
// Mutation
// ============================================================================

/// Per-position swap mutation.
///
/// For every position `i`, with probability `rate`, swaps it with a position
/// `j` drawn uniformly over all positions (`j == i` is a no-op).
///
/// # Complexity
/// O(n)
pub fn swap_mutation<R: Rng>(perm: &mut [usize], rate: f64, rng: &mut R) {
    let n = perm.len();
    for i in 0..n {
        if rng.random_range(0.0..1.0) < rate {
            let j = rng.random_range(0..n);
            perm.swap(i, j);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::types::is_permutation;
    use crate::random::create_rng;
    use proptest::prelude::*;

    #[test]
    fn test_ox_known_cut() {
        let p1 = vec![0, 1, 2, 3, 4, 5, 6, 7];
        let p2 = vec![7, 6, 5, 4, 3, 2, 1, 0];
        let (c1, c2) = order_crossover_at(&p1, &p2, 2, 5);
        assert_eq!(c1, vec![1, 0, 2, 3, 4, 7, 6, 5]);
        assert_eq!(c2, vec![6, 7, 5, 4, 3, 0, 1, 2]);
    }

    #[test]
    fn test_ox_full_segment_copies_parents() {
        let p1 = vec![3, 1, 0, 2];
        let p2 = vec![0, 2, 3, 1];
        let (c1, c2) = order_crossover_at(&p1, &p2, 0, 4);
        assert_eq!(c1, p1);
        assert_eq!(c2, p2);
    }

    #[test]
    fn test_ox_segment_at_start() {
        let p1 = vec![0, 1, 2, 3, 4];
        let p2 = vec![4, 3, 2, 1, 0];
        let (c1, _) = order_crossover_at(&p1, &p2, 0, 2);
        assert_eq!(c1, vec![0, 1, 4, 3, 2]);
    }

    #[test]
    fn test_ox_segment_at_end_wraps() {
        let p1 = vec![0, 1, 2, 3, 4];
        let p2 = vec![4, 3, 2, 1, 0];
        let (c1, _) = order_crossover_at(&p1, &p2, 3, 5);
        // b == n: filling starts at slot 0
        assert_eq!(c1, vec![2, 1, 0, 3, 4]);
    }

    #[test]
    fn test_ox_single_element() {
        let mut rng = create_rng(42);
        let (c1, c2) = order_crossover(&[0], &[0], &mut rng);
        assert_eq!(c1, vec![0]);
        assert_eq!(c2, vec![0]);
    }

    #[test]
    fn test_ox_identical_parents_known_cut() {
        // segment [2, 0] stays; donor values 4, 1, 3 fill slots 3, 4, 0
        let p = vec![4, 2, 0, 1, 3];
        let (c1, c2) = order_crossover_at(&p, &p, 1, 3);
        assert_eq!(c1, vec![3, 2, 0, 4, 1]);
        assert_eq!(c2, vec![3, 2, 0, 4, 1]);
    }

    #[test]
    fn test_ox_identical_parents_random_cuts() {
        let mut rng = create_rng(42);
        let p = vec![4, 2, 0, 1, 3];
        for _ in 0..50 {
            let (c1, c2) = order_crossover(&p, &p, &mut rng);
            assert!(is_permutation(&c1, 5), "child1 not valid: {c1:?}");
            assert!(is_permutation(&c2, 5), "child2 not valid: {c2:?}");
            assert_eq!(c1, c2);
        }
    }

    #[test]
    #[should_panic(expected = "cut points must satisfy a < b <= n")]
    fn test_ox_rejects_empty_segment() {
        order_crossover_at(&[0, 1], &[1, 0], 1, 1);
    }

    #[test]
    fn test_cut_points_cover_edges() {
        let mut rng = create_rng(5);
        let mut saw_zero = false;
        let mut saw_n = false;
        for _ in 0..2000 {
            let (a, b) = random_cut_points(6, &mut rng);
            assert!(a < b && b <= 6);
            saw_zero |= a == 0;
            saw_n |= b == 6;
        }
        assert!(saw_zero && saw_n);
    }

    #[test]
    fn test_swap_rate_zero_is_identity() {
        let mut rng = create_rng(42);
        let mut perm: Vec<usize> = (0..10).collect();
        swap_mutation(&mut perm, 0.0, &mut rng);
        assert_eq!(perm, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_swap_rate_one_changes_something() {
        let mut rng = create_rng(42);
        let original: Vec<usize> = (0..20).collect();
        let mut perm = original.clone();
        swap_mutation(&mut perm, 1.0, &mut rng);
        assert_ne!(perm, original);
        assert!(is_permutation(&perm, 20));
    }

    #[test]
    fn test_swap_single_element() {
        let mut rng = create_rng(42);
        let mut perm = vec![0];
        swap_mutation(&mut perm, 1.0, &mut rng);
        assert_eq!(perm, vec![0]);
    }

    fn arb_parents() -> impl Strategy<Value = (Vec<usize>, Vec<usize>)> {
        (1usize..30).prop_flat_map(|n| {
            let base: Vec<usize> = (0..n).collect();
            (Just(base.clone()).prop_shuffle(), Just(base).prop_shuffle())
        })
    }

    proptest! {
        #[test]
        fn prop_ox_any_cut_yields_permutations(
            (p1, p2) in arb_parents(),
            x in any::<prop::sample::Index>(),
            y in any::<prop::sample::Index>(),
        ) {
            let n = p1.len();
            let a = x.index(n);
            let b = a + 1 + y.index(n - a);
            let (c1, c2) = order_crossover_at(&p1, &p2, a, b);
            prop_assert!(is_permutation(&c1, n));
            prop_assert!(is_permutation(&c2, n));
            prop_assert_eq!(&c1[a..b], &p1[a..b]);
            prop_assert_eq!(&c2[a..b], &p2[a..b]);
        }

        #[test]
        fn prop_random_ox_yields_permutations((p1, p2) in arb_parents(), seed in any::<u64>()) {
            let mut rng = create_rng(seed);
            let (c1, c2) = order_crossover(&p1, &p2, &mut rng);
            prop_assert!(is_permutation(&c1, p1.len()));
            prop_assert!(is_permutation(&c2, p1.len()));
        }

        #[test]
        fn prop_swap_mutation_keeps_permutation(
            (mut perm, _) in arb_parents(),
            rate in 0.0f64..=1.0,
            seed in any::<u64>(),
        ) {
            let n = perm.len();
            let mut rng = create_rng(seed);
            swap_mutation(&mut perm, rate, &mut rng);
            prop_assert!(is_permutation(&perm, n));
        }
    }
}
