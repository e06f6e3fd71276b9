//! Nine-combination strategy comparison.
//!
//! Runs the evolutionary search for every pairing of the three selection
//! strategies with the three mutation operators, dampens stochastic
//! variance by keeping the best of several repeats per pairing, and
//! dense-ranks the outcomes.
//!
//! # Key Types
//!
//! - [`CombinationSpec`]: one selection × mutation pairing with its grid ordinal
//! - [`CompareConfig`]: repeats, seed, GA parameters, fitness weights
//! - [`StrategyComparison`]: executes the 9 × R runs and ranks the results
//! - [`CombinationResult`] / [`ComparisonOutcome`]: the ranked output records

mod combination;
mod config;
mod ranking;
mod runner;

pub use combination::{CombinationSpec, COMBINATION_COUNT, TOURNAMENT_SIZE};
pub use config::CompareConfig;
pub use ranking::{rank_combinations, results_tied, CombinationResult, ComparisonOutcome};
pub use runner::{Progress, StrategyComparison};

use crate::error::Result;
use crate::graph::LocationGraph;

/// Runs the full comparison from `start_name` with the given configuration.
///
/// Convenience wrapper around [`StrategyComparison`].
///
/// # Examples
///
/// ```
/// use route_compare::compare::{compare_strategies, CompareConfig};
/// use route_compare::dataset;
///
/// let graph = dataset::reference_graph();
/// let outcome = compare_strategies(
///     &graph,
///     "Taman Sari",
///     CompareConfig::default().with_seed(7),
/// ).expect("start exists");
///
/// assert_eq!(outcome.results.len(), 9);
/// assert_eq!(outcome.results[0].route[0], "Taman Sari");
/// ```
pub fn compare_strategies(
    graph: &LocationGraph,
    start_name: &str,
    config: CompareConfig,
) -> Result<ComparisonOutcome> {
    StrategyComparison::with_config(graph, config).run(start_name)
}
