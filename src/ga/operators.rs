//! Genetic operators for fixed-start routes.
//!
//! Crossover and mutation operate on `&[usize]` visiting orders where
//! position 0 holds the fixed start location. Every operator preserves the
//! permutation invariant and never touches position 0.
//!
//! # Operators
//!
//! - [`prefix_crossover`]: deterministic order-based recombination
//! - [`Mutation::Swap`]: exchange two random positions, O(1)
//! - [`Mutation::Inversion`]: reverse a random segment (2-opt), O(n)
//! - [`Mutation::Scramble`]: reshuffle a random segment, O(n)
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use rand::seq::SliceRandom;
use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Order-based crossover with a fixed midpoint.
///
/// The child takes the first `n / 2` elements of `parent1` (preserving the
/// start and a prefix ordering), then appends `parent2`'s elements in their
/// own order, skipping any already present, until it reaches length `n`.
///
/// The child is always a valid permutation with the same start: `parent2`
/// contains exactly the locations missing from the prefix.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths or are empty.
pub fn prefix_crossover(parent1: &[usize], parent2: &[usize]) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    let point = n / 2;
    let mut child = parent1[..point].to_vec();

    let mut in_child = vec![false; n];
    for &loc in &child {
        in_child[loc] = true;
    }
    for &loc in parent2 {
        if !in_child[loc] {
            in_child[loc] = true;
            child.push(loc);
        }
    }

    child
}

// ============================================================================
// Mutation
// ============================================================================

/// Route perturbation strategy.
///
/// All variants operate only on positions `1..n`, leaving the fixed start
/// at position 0 untouched. Routes shorter than a variant's minimum
/// applicable length are left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    /// Exchange the contents of two independent uniform positions in
    /// `[1, n-1]` (which may coincide). No-op below length 3.
    Swap,

    /// Reverse a random segment `[start, end]` with `start` in `[1, n-2]`
    /// and `end` in `(start, n-1]`. No-op below length 4.
    Inversion,

    /// Apply an unbiased shuffle to a random segment chosen as in
    /// [`Mutation::Inversion`]. No-op below length 4.
    Scramble,
}

impl Mutation {
    /// Lowercase method tag used in comparison output records.
    pub fn kind(&self) -> &'static str {
        match self {
            Mutation::Swap => "swap",
            Mutation::Inversion => "inversion",
            Mutation::Scramble => "scramble",
        }
    }

    /// Display label used in combination names.
    pub fn label(&self) -> &'static str {
        match self {
            Mutation::Swap => "Swap",
            Mutation::Inversion => "Inversion",
            Mutation::Scramble => "Scramble",
        }
    }

    /// Applies this mutation to `order` in place.
    pub fn apply<R: Rng>(&self, order: &mut [usize], rng: &mut R) {
        match self {
            Mutation::Swap => swap_mutation(order, rng),
            Mutation::Inversion => invert_mutation(order, rng),
            Mutation::Scramble => scramble_mutation(order, rng),
        }
    }
}

fn swap_mutation<R: Rng>(order: &mut [usize], rng: &mut R) {
    let n = order.len();
    if n < 3 {
        return;
    }
    let i = rng.random_range(1..n);
    let j = rng.random_range(1..n);
    order.swap(i, j);
}

fn invert_mutation<R: Rng>(order: &mut [usize], rng: &mut R) {
    let n = order.len();
    if n < 4 {
        return;
    }
    let (start, end) = mutable_segment(n, rng);
    order[start..=end].reverse();
}

fn scramble_mutation<R: Rng>(order: &mut [usize], rng: &mut R) {
    let n = order.len();
    if n < 4 {
        return;
    }
    let (start, end) = mutable_segment(n, rng);
    order[start..=end].shuffle(rng);
}

/// Picks a segment `[start, end]` with `1 <= start < end <= n-1`.
fn mutable_segment<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let start = rng.random_range(1..n - 1);
    let end = rng.random_range(start + 1..n);
    (start, end)
}

// ============================================================================
// Tests
// ============================================================================
