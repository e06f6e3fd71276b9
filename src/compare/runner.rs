//! Comparison execution: best-of-R runs for each of the nine combinations.

use super::combination::CombinationSpec;
use super::config::CompareConfig;
use super::ranking::{rank_combinations, CombinationResult, ComparisonOutcome};
use crate::error::{CompareError, Result};
use crate::ga::{EvolutionEngine, FitnessEvaluator, RunResult};
use crate::graph::LocationGraph;
use crate::random::derive_stream;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, info};

/// Optional progress observer, called once per completed combination with
/// its 1-based grid position and the grid size.
///
/// Purely observational: it cannot affect outcomes, which depend only on
/// the inputs and the configured seed.
pub type Progress<'p> = &'p (dyn Fn(usize, usize) + Sync);

/// Runs the full nine-combination comparison over one graph.
///
/// The 27 underlying engine runs (9 combinations × R repeats) are
/// independent: each reads only the immutable graph and draws from its own
/// derived RNG stream. With the `parallel` feature they are dispatched
/// across the rayon pool; ranking always waits for the complete set.
///
/// # Usage
///
/// ```
/// use route_compare::compare::{CompareConfig, StrategyComparison};
/// use route_compare::dataset;
///
/// let graph = dataset::reference_graph();
/// let comparison =
///     StrategyComparison::with_config(&graph, CompareConfig::default().with_seed(42));
/// let outcome = comparison.run("Malioboro").expect("start exists");
///
/// assert_eq!(outcome.results.len(), 9);
/// assert_eq!(outcome.best[0].rank, 1);
/// ```
pub struct StrategyComparison<'a> {
    graph: &'a LocationGraph,
    config: CompareConfig,
}

impl<'a> StrategyComparison<'a> {
    /// Creates a comparison with default configuration.
    pub fn new(graph: &'a LocationGraph) -> Self {
        Self::with_config(graph, CompareConfig::default())
    }

    /// Creates a comparison with an explicit configuration.
    pub fn with_config(graph: &'a LocationGraph, config: CompareConfig) -> Self {
        Self { graph, config }
    }

    /// Runs all nine combinations from the named start location and ranks
    /// the outcomes.
    ///
    /// # Errors
    ///
    /// - [`CompareError::InvalidStart`] if `start_name` is not in the
    ///   location list; nothing runs
    /// - [`CompareError::InvariantViolation`] if any engine run aborts
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid (call
    /// [`CompareConfig::validate`] first to get a descriptive error).
    pub fn run(&self, start_name: &str) -> Result<ComparisonOutcome> {
        self.run_with_progress(start_name, None)
    }

    /// Like [`run`](Self::run), reporting each completed combination to
    /// the given observer.
    pub fn run_with_progress(
        &self,
        start_name: &str,
        progress: Option<Progress<'_>>,
    ) -> Result<ComparisonOutcome> {
        self.config.validate().expect("invalid CompareConfig");

        let start = self
            .graph
            .index_of(start_name)
            .ok_or_else(|| CompareError::InvalidStart(start_name.to_string()))?;
        let base_seed = self.config.seed.unwrap_or_else(rand::random);
        let evaluator = FitnessEvaluator::new(self.graph, self.config.weights);
        let grid = CombinationSpec::grid();

        info!(
            start = start_name,
            combinations = grid.len(),
            runs_per_combination = self.config.runs_per_combination,
            "starting strategy comparison"
        );
        let results = self.run_grid(&grid, &evaluator, start, base_seed, progress)?;
        rank_combinations(results)
    }

    #[cfg(not(feature = "parallel"))]
    fn run_grid(
        &self,
        grid: &[CombinationSpec],
        evaluator: &FitnessEvaluator<'_>,
        start: usize,
        base_seed: u64,
        progress: Option<Progress<'_>>,
    ) -> Result<Vec<CombinationResult>> {
        let mut results = Vec::with_capacity(grid.len());
        for spec in grid {
            results.push(self.run_combination(evaluator, spec, start, base_seed)?);
            if let Some(report) = progress {
                report(spec.ordinal + 1, grid.len());
            }
        }
        Ok(results)
    }

    #[cfg(feature = "parallel")]
    fn run_grid(
        &self,
        grid: &[CombinationSpec],
        evaluator: &FitnessEvaluator<'_>,
        start: usize,
        base_seed: u64,
        progress: Option<Progress<'_>>,
    ) -> Result<Vec<CombinationResult>> {
        grid.par_iter()
            .map(|spec| {
                let result = self.run_combination(evaluator, spec, start, base_seed)?;
                if let Some(report) = progress {
                    report(spec.ordinal + 1, grid.len());
                }
                Ok(result)
            })
            .collect()
    }

    /// Best-of-R for one combination; each repeat draws from its own
    /// derived stream, so repeats and combinations stay statistically
    /// independent.
    fn run_combination(
        &self,
        evaluator: &FitnessEvaluator<'_>,
        spec: &CombinationSpec,
        start: usize,
        base_seed: u64,
    ) -> Result<CombinationResult> {
        let runs = self.config.runs_per_combination;
        let mut best: Option<RunResult> = None;

        for run in 0..runs {
            // Stream index depends only on (combination, repeat), so the
            // first R runs of a best-of-R' comparison reuse the same
            // streams for any R' >= R.
            let stream_index = ((spec.ordinal as u64) << 32) | run as u64;
            let mut rng = derive_stream(base_seed, stream_index);
            let result = EvolutionEngine::run(
                evaluator,
                spec.selection,
                spec.mutation,
                start,
                &self.config.ga,
                &mut rng,
            )?;
            debug!(
                combination = %spec.name(),
                run,
                fitness = result.fitness,
                "run complete"
            );
            // Strict comparison keeps the earliest run on exact ties
            if best.as_ref().map_or(true, |b| result.fitness > b.fitness) {
                best = Some(result);
            }
        }

        let best = best.expect("runs_per_combination is at least 1");
        info!(
            combination = %spec.name(),
            fitness = best.fitness,
            distance = best.total_distance,
            "combination complete"
        );

        Ok(CombinationResult {
            combination_name: spec.name(),
            selection_method: spec.selection.kind().to_string(),
            mutation_method: spec.mutation.kind().to_string(),
            ordinal: spec.ordinal,
            route: self.graph.resolve(&best.order),
            total_distance: best.total_distance,
            total_time: best.total_time.round() as i64,
            fitness: best.fitness,
            rank: 0,
        })
    }
}
