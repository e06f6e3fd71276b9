//! Route individual: a fixed-start permutation with cached fitness.

use rand::seq::SliceRandom;
use rand::Rng;

/// One candidate tour: a permutation of all location indices where
/// position 0 is always the fixed start location.
///
/// Fitness is cached on the individual after evaluation; an unevaluated
/// route carries the worst possible fitness (`f64::NEG_INFINITY`, since
/// higher fitness is better).
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    order: Vec<usize>,
    fitness: f64,
}

impl Route {
    /// Creates an unevaluated route from an explicit visiting order.
    pub fn from_order(order: Vec<usize>) -> Self {
        Self {
            order,
            fitness: f64::NEG_INFINITY,
        }
    }

    /// Creates a random route over `n` locations: `[start]` followed by a
    /// uniformly shuffled permutation of the remaining indices.
    pub fn random<R: Rng>(n: usize, start: usize, rng: &mut R) -> Self {
        let mut rest: Vec<usize> = (0..n).filter(|&i| i != start).collect();
        rest.shuffle(rng);
        let mut order = Vec::with_capacity(n);
        order.push(start);
        order.extend(rest);
        Self::from_order(order)
    }

    /// The visiting order as location indices.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Cached fitness; `f64::NEG_INFINITY` until evaluated.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Stores an evaluated fitness on this route.
    pub(crate) fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }

    /// Checks the tour invariant: length `n`, every index in `0..n`
    /// exactly once, and `order[0] == start`.
    pub fn is_valid_tour(&self, n: usize, start: usize) -> bool {
        if self.order.len() != n || self.order.first() != Some(&start) {
            return false;
        }
        let mut seen = vec![false; n];
        for &idx in &self.order {
            if idx >= n || seen[idx] {
                return false;
            }
            seen[idx] = true;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_random_route_is_valid() {
        let mut rng = create_rng(42);
        for start in 0..6 {
            for _ in 0..50 {
                let route = Route::random(6, start, &mut rng);
                assert!(route.is_valid_tour(6, start), "invalid: {:?}", route.order());
            }
        }
    }

    #[test]
    fn test_random_route_is_unevaluated() {
        let mut rng = create_rng(42);
        let route = Route::random(5, 0, &mut rng);
        assert_eq!(route.fitness(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_random_covers_orderings() {
        // With 3 free positions after the start there are 6 orderings;
        // a uniform shuffle should hit all of them over many draws.
        let mut rng = create_rng(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(Route::random(4, 0, &mut rng).order().to_vec());
        }
        assert_eq!(seen.len(), 6, "expected all 6 permutations, got {seen:?}");
    }

    #[test]
    fn test_invariant_rejects_wrong_start() {
        let route = Route::from_order(vec![1, 0, 2]);
        assert!(route.is_valid_tour(3, 1));
        assert!(!route.is_valid_tour(3, 0));
    }

    #[test]
    fn test_invariant_rejects_repeats_and_gaps() {
        assert!(!Route::from_order(vec![0, 1, 1]).is_valid_tour(3, 0));
        assert!(!Route::from_order(vec![0, 1]).is_valid_tour(3, 0));
        assert!(!Route::from_order(vec![0, 1, 5]).is_valid_tour(3, 0));
    }
}
