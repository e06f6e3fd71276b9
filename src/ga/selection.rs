//! Parent selection strategies.
//!
//! Selection determines which routes become parents for crossover.
//! Different strategies apply different selection pressure. All strategies
//! here assume **maximization** (higher fitness = better route) and never
//! mutate the population they read from.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::route::Route;
use rand::Rng;

/// Selection strategy for choosing parents.
///
/// # Examples
///
/// ```
/// use route_compare::ga::Selection;
///
/// // Tournament with size 3 (moderate selection pressure)
/// let sel = Selection::Tournament(3);
///
/// // Fitness-proportionate roulette wheel
/// let sel = Selection::Roulette;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Tournament selection: draw `k` routes uniformly at random with
    /// replacement, keep the fittest. On exact fitness ties the
    /// first-encountered contestant wins.
    ///
    /// Higher `k` = stronger selection pressure.
    ///
    /// # Complexity
    /// O(k) per selection
    Tournament(usize),

    /// Fitness-proportionate (roulette wheel) selection.
    ///
    /// Probability of selection is proportional to raw fitness, which is
    /// strictly positive for every valid route.
    ///
    /// # Complexity
    /// O(n) per selection (linear scan)
    Roulette,

    /// Rank-based selection with linear weights.
    ///
    /// The population is sorted by fitness descending; the route at
    /// 0-based position `p` gets weight `n - p` (best gets `n`, worst
    /// gets 1). This avoids the scaling problems of roulette selection
    /// when fitness variance is high.
    ///
    /// Reference: Baker (1985), "Adaptive Selection Methods for Genetic
    /// Algorithms"
    ///
    /// # Complexity
    /// O(n log n) per selection (sort of an index copy)
    Rank,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament(3)
    }
}

impl Selection {
    /// Lowercase method tag used in comparison output records.
    pub fn kind(&self) -> &'static str {
        match self {
            Selection::Tournament(_) => "tournament",
            Selection::Roulette => "roulette",
            Selection::Rank => "rank",
        }
    }

    /// Display label used in combination names.
    pub fn label(&self) -> &'static str {
        match self {
            Selection::Tournament(_) => "Tournament",
            Selection::Roulette => "Roulette",
            Selection::Rank => "Rank",
        }
    }

    /// Selects a parent index from the population.
    ///
    /// # Panics
    ///
    /// Panics if `population` is empty.
    pub fn select<R: Rng>(&self, population: &[Route], rng: &mut R) -> usize {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );

        match self {
            Selection::Tournament(k) => tournament(population, *k, rng),
            Selection::Roulette => roulette(population, rng),
            Selection::Rank => rank(population, rng),
        }
    }
}

/// Tournament: k independent uniform draws with replacement, best wins.
fn tournament<R: Rng>(population: &[Route], k: usize, rng: &mut R) -> usize {
    let k = k.max(1);
    let n = population.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        // Strict comparison keeps the first-encountered route on ties.
        if population[idx].fitness() > population[best_idx].fitness() {
            best_idx = idx;
        }
    }
    best_idx
}

/// Roulette wheel: walk the population accumulating fitness until the
/// cumulative sum reaches a uniform draw in `[0, total)`.
fn roulette<R: Rng>(population: &[Route], rng: &mut R) -> usize {
    let n = population.len();
    if n == 1 {
        return 0;
    }

    let total: f64 = population.iter().map(Route::fitness).sum();
    if total <= 0.0 {
        return rng.random_range(0..n);
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, route) in population.iter().enumerate() {
        cumulative += route.fitness();
        if cumulative >= threshold {
            return i;
        }
    }

    n - 1 // floating-point drift fallback
}

/// Rank selection: weight `n - position` over a fitness-descending order.
fn rank<R: Rng>(population: &[Route], rng: &mut R) -> usize {
    let n = population.len();
    if n == 1 {
        return 0;
    }

    // Sort an index copy, best first; the population itself is untouched.
    let mut by_fitness: Vec<usize> = (0..n).collect();
    by_fitness.sort_by(|&a, &b| {
        population[b]
            .fitness()
            .partial_cmp(&population[a].fitness())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let total = (n * (n + 1)) as f64 / 2.0;
    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;

    for (position, &idx) in by_fitness.iter().enumerate() {
        cumulative += (n - position) as f64;
        if cumulative >= threshold {
            return idx;
        }
    }

    by_fitness[n - 1] // overrun falls back to the worst route
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn make_population(fitnesses: &[f64]) -> Vec<Route> {
        fitnesses
            .iter()
            .enumerate()
            .map(|(i, &f)| {
                // The visiting order is irrelevant to selection; only the
                // cached fitness matters.
                let mut route = Route::from_order(vec![i]);
                route.set_fitness(f);
                route
            })
            .collect()
    }

    #[test]
    fn test_tournament_favors_best() {
        let pop = make_population(&[1.0, 5.0, 10.0, 3.0]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        let n = 10000;
        for _ in 0..n {
            let idx = Selection::Tournament(4).select(&pop, &mut rng);
            counts[idx] += 1;
        }
        // Index 2 (fitness=10.0) should dominate
        let best_count = counts[2];
        assert!(
            best_count > 6000,
            "expected best to be selected >60% of the time, got {best_count}/{n}"
        );
    }

    #[test]
    fn test_tournament_size_1_is_random() {
        let pop = make_population(&[1.0, 5.0, 10.0, 3.0]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        for _ in 0..10000 {
            let idx = Selection::Tournament(1).select(&pop, &mut rng);
            counts[idx] += 1;
        }
        for &c in &counts {
            assert!(c > 1500, "expected uniform, got counts: {counts:?}");
        }
    }

    #[test]
    fn test_roulette_favors_best() {
        let pop = make_population(&[1.0, 50.0, 100.0, 20.0]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        for _ in 0..10000 {
            let idx = Selection::Roulette.select(&pop, &mut rng);
            counts[idx] += 1;
        }
        let best_count = counts[2];
        let worst_count = counts[0];
        assert!(
            best_count > worst_count,
            "best should be selected more often: best={best_count}, worst={worst_count}"
        );
        // Probability is proportional to raw fitness: ~100/171 for the best
        assert!(
            best_count > 5000,
            "fitness-proportionate share expected, got {best_count}"
        );
    }

    #[test]
    fn test_rank_favors_best() {
        let pop = make_population(&[1.0, 50.0, 100.0, 20.0]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        for _ in 0..10000 {
            let idx = Selection::Rank.select(&pop, &mut rng);
            counts[idx] += 1;
        }
        // Best weight 4/10, worst weight 1/10
        assert!(
            counts[2] > counts[0],
            "best should be selected more: best={}, worst={}",
            counts[2],
            counts[0]
        );
    }

    #[test]
    fn test_rank_ignores_fitness_magnitude() {
        // Rank weights depend only on ordering, so an extreme outlier
        // must not starve the rest of the population.
        let pop = make_population(&[1.0, 2.0, 1_000_000.0, 3.0]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        for _ in 0..10000 {
            let idx = Selection::Rank.select(&pop, &mut rng);
            counts[idx] += 1;
        }
        // Worst route still carries weight 1/10 = 10% of draws
        assert!(
            counts[0] > 500,
            "worst route should keep a rank share, got {counts:?}"
        );
    }

    #[test]
    fn test_selection_does_not_mutate_population() {
        let pop = make_population(&[1.0, 50.0, 100.0, 20.0]);
        let snapshot = pop.clone();
        let mut rng = create_rng(42);
        for sel in [Selection::Tournament(3), Selection::Roulette, Selection::Rank] {
            for _ in 0..100 {
                sel.select(&pop, &mut rng);
            }
        }
        assert_eq!(pop, snapshot);
    }

    #[test]
    fn test_single_route() {
        let pop = make_population(&[5.0]);
        let mut rng = create_rng(42);

        assert_eq!(Selection::Tournament(3).select(&pop, &mut rng), 0);
        assert_eq!(Selection::Roulette.select(&pop, &mut rng), 0);
        assert_eq!(Selection::Rank.select(&pop, &mut rng), 0);
    }

    #[test]
    fn test_equal_fitness_is_roughly_uniform() {
        let pop = make_population(&[5.0, 5.0, 5.0, 5.0]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        for _ in 0..10000 {
            let idx = Selection::Roulette.select(&pop, &mut rng);
            counts[idx] += 1;
        }
        for &c in &counts {
            assert!(
                c > 1500,
                "expected roughly uniform with equal fitness, got {counts:?}"
            );
        }
    }

    #[test]
    fn test_kind_and_label() {
        assert_eq!(Selection::Tournament(3).kind(), "tournament");
        assert_eq!(Selection::Roulette.kind(), "roulette");
        assert_eq!(Selection::Rank.kind(), "rank");
        assert_eq!(Selection::Rank.label(), "Rank");
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let pop: Vec<Route> = vec![];
        let mut rng = create_rng(42);
        Selection::Tournament(3).select(&pop, &mut rng);
    }
}
