//! Evolutionary loop execution.
//!
//! [`EvolutionEngine`] runs one generational search for one
//! (selection, mutation) combination:
//! initialization → elitism → selection → crossover → mutation → repeat.

use super::config::GaConfig;
use super::fitness::FitnessEvaluator;
use super::operators::{prefix_crossover, Mutation};
use super::route::Route;
use super::selection::Selection;
use crate::error::{CompareError, Result};
use rand::Rng;
use tracing::trace;

/// Result of one evolutionary run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunResult {
    /// Best visiting order found, as location indices (`order[0]` = start).
    pub order: Vec<usize>,

    /// Total directed distance of the best route (km).
    pub total_distance: f64,

    /// Total directed travel time of the best route (minutes, unrounded).
    pub total_time: f64,

    /// Fitness of the best route (higher is better).
    pub fitness: f64,
}

/// Executes the generational search.
///
/// # Usage
///
/// ```
/// use route_compare::dataset;
/// use route_compare::ga::{
///     EvolutionEngine, FitnessEvaluator, GaConfig, Mutation, ScoreWeights, Selection,
/// };
/// use route_compare::random::create_rng;
///
/// let graph = dataset::reference_graph();
/// let evaluator = FitnessEvaluator::new(&graph, ScoreWeights::default());
/// let mut rng = create_rng(42);
///
/// let result = EvolutionEngine::run(
///     &evaluator,
///     Selection::Tournament(3),
///     Mutation::Swap,
///     0,
///     &GaConfig::default(),
///     &mut rng,
/// ).expect("search runs");
/// assert_eq!(result.order[0], 0);
/// ```
pub struct EvolutionEngine;

impl EvolutionEngine {
    /// Runs one search from `start` against the given RNG stream.
    ///
    /// Deterministic for a fixed stream: same seed + same inputs produce
    /// the same [`RunResult`].
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::InvariantViolation`] if a produced route
    /// breaks the permutation/start invariant or its fitness denominator
    /// degenerates; the run aborts instead of propagating a corrupted
    /// result.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid (call [`GaConfig::validate`]
    /// first to get a descriptive error).
    pub fn run<R: Rng>(
        evaluator: &FitnessEvaluator<'_>,
        selection: Selection,
        mutation: Mutation,
        start: usize,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<RunResult> {
        config.validate().expect("invalid GaConfig");
        let n = evaluator.graph().len();

        // 1. Initialize: fixed start plus a uniformly shuffled remainder
        let mut population: Vec<Route> = (0..config.population_size)
            .map(|_| Route::random(n, start, rng))
            .collect();
        for route in &mut population {
            evaluate(evaluator, route, n, start)?;
        }

        // 2. Generational loop; the prior population is discarded wholesale
        //    once the next one is fully built
        for generation in 0..config.generations {
            let mut next_gen: Vec<Route> = Vec::with_capacity(config.population_size);

            // Elitism: the single fittest route survives unchanged
            next_gen.push(population[fittest(&population)].clone());

            while next_gen.len() < config.population_size {
                let p1 = selection.select(&population, rng);
                let p2 = selection.select(&population, rng);

                let mut order =
                    prefix_crossover(population[p1].order(), population[p2].order());
                if rng.random_range(0.0..1.0) < config.mutation_rate {
                    mutation.apply(&mut order, rng);
                }

                let mut child = Route::from_order(order);
                evaluate(evaluator, &mut child, n, start)?;
                next_gen.push(child);
            }

            population = next_gen;
            trace!(
                generation,
                best_fitness = population[fittest(&population)].fitness(),
                "generation complete"
            );
        }

        // 3. Fixed generation count is the sole stopping condition
        let best = &population[fittest(&population)];
        Ok(RunResult {
            order: best.order().to_vec(),
            total_distance: evaluator.total_distance(best.order()),
            total_time: evaluator.total_time(best.order()),
            fitness: best.fitness(),
        })
    }
}

/// Scores a route and fail-fast checks the tour invariant.
fn evaluate(
    evaluator: &FitnessEvaluator<'_>,
    route: &mut Route,
    n: usize,
    start: usize,
) -> Result<()> {
    if !route.is_valid_tour(n, start) {
        return Err(CompareError::InvariantViolation(format!(
            "route {:?} is not a start-{start} permutation of 0..{n}",
            route.order()
        )));
    }
    let score = evaluator.score(route.order())?;
    route.set_fitness(score);
    Ok(())
}

/// Index of the route with the highest fitness; first-encountered wins ties.
fn fittest(population: &[Route]) -> usize {
    let mut best = 0;
    for (i, route) in population.iter().enumerate().skip(1) {
        if route.fitness() > population[best].fitness() {
            best = i;
        }
    }
    best
}
