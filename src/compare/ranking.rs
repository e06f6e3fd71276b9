//! Aggregation, sorting, and dense ranking of combination outcomes.

use super::combination::COMBINATION_COUNT;
use crate::error::{CompareError, Result};
use std::cmp::Reverse;

/// Outcome of one strategy combination: combination metadata plus the
/// best-of-R run result.
///
/// `rank` is assigned by [`rank_combinations`] once all nine combinations
/// have run; it is 0 (unranked) before that.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombinationResult {
    /// Display name, e.g. `"Tournament + Swap"`.
    pub combination_name: String,

    /// Selection method tag: `"tournament"`, `"roulette"`, or `"rank"`.
    pub selection_method: String,

    /// Mutation method tag: `"swap"`, `"inversion"`, or `"scramble"`.
    pub mutation_method: String,

    /// Grid ordinal (0–8), the final deterministic tie-break.
    pub ordinal: usize,

    /// Best route found, as location names (`route[0]` = start).
    pub route: Vec<String>,

    /// Total directed distance of the best route (km).
    pub total_distance: f64,

    /// Total directed travel time of the best route, rounded to whole
    /// minutes.
    pub total_time: i64,

    /// Fitness of the best route (higher is better; compare at 6-decimal
    /// precision, display at 4).
    pub fitness: f64,

    /// Dense rank, 1-based; tied results share a rank.
    pub rank: usize,
}

/// The ranked nine-combination comparison.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComparisonOutcome {
    /// All nine results in rank order (ties broken deterministically).
    pub results: Vec<CombinationResult>,

    /// The subset with rank 1; more than one element when tied.
    pub best: Vec<CombinationResult>,
}

/// Fitness rounded to 6 decimal digits, as an integer comparison key.
fn fitness_key(result: &CombinationResult) -> i64 {
    (result.fitness * 1_000_000.0).round() as i64
}

/// Distance rounded to 2 decimal digits, as an integer comparison key.
fn distance_key(result: &CombinationResult) -> i64 {
    (result.total_distance * 100.0).round() as i64
}

/// Tie test: equal fitness at 6 decimals, equal distance at 2 decimals,
/// and equal integer minutes.
pub fn results_tied(a: &CombinationResult, b: &CombinationResult) -> bool {
    fitness_key(a) == fitness_key(b)
        && distance_key(a) == distance_key(b)
        && a.total_time == b.total_time
}

/// Sorts the complete result set and assigns dense ranks.
///
/// Sort order: fitness (6-decimal) descending, then distance (2-decimal)
/// ascending, then time ascending, then grid ordinal ascending. The first
/// element gets rank 1; each subsequent element inherits its predecessor's
/// rank when [`results_tied`], otherwise its 1-based sorted position.
///
/// # Errors
///
/// Returns [`CompareError::IncompleteComparison`] unless exactly
/// [`COMBINATION_COUNT`] results are supplied; the ranker never ranks a
/// partial set.
pub fn rank_combinations(mut results: Vec<CombinationResult>) -> Result<ComparisonOutcome> {
    if results.len() != COMBINATION_COUNT {
        return Err(CompareError::IncompleteComparison {
            expected: COMBINATION_COUNT,
            actual: results.len(),
        });
    }

    results.sort_by_key(|r| {
        (
            Reverse(fitness_key(r)),
            distance_key(r),
            r.total_time,
            r.ordinal,
        )
    });

    let mut current_rank = 1;
    for i in 0..results.len() {
        if i > 0 && !results_tied(&results[i], &results[i - 1]) {
            current_rank = i + 1;
        }
        results[i].rank = current_rank;
    }

    let best = results.iter().filter(|r| r.rank == 1).cloned().collect();
    Ok(ComparisonOutcome { results, best })
}
