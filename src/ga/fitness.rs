//! Route cost evaluation.
//!
//! [`FitnessEvaluator`] computes total distance, total time, and the
//! combined fitness score for a candidate route. All functions are pure:
//! identical routes always produce identical values.

use crate::error::{CompareError, Result};
use crate::graph::LocationGraph;

/// Weights and normalization bounds for the combined fitness score.
///
/// The combined score is
/// `distance_weight * d / max_distance + time_weight * t / max_time`,
/// and fitness is its reciprocal (higher is better).
///
/// The default bounds (360 km, 588 min) are calibrated to the 10-location
/// reference dataset; use [`ScoreWeights::derive`] to compute bounds for
/// arbitrary graphs instead of hand tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreWeights {
    /// Weight of the normalized distance term.
    pub distance_weight: f64,
    /// Weight of the normalized time term.
    pub time_weight: f64,
    /// Normalization bound for total distance (km).
    pub max_distance: f64,
    /// Normalization bound for total time (minutes).
    pub max_time: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            distance_weight: 0.6,
            time_weight: 0.4,
            max_distance: 360.0,
            max_time: 588.0,
        }
    }
}

impl ScoreWeights {
    /// Derives normalization bounds from a graph.
    ///
    /// A route visits N locations over N−1 edges, so `(N − 1) * max_entry`
    /// bounds any tour's total cost. Weights keep their defaults.
    pub fn derive(graph: &LocationGraph) -> Self {
        let hops = (graph.len() - 1) as f64;
        Self {
            max_distance: hops * graph.distance().max_entry(),
            max_time: hops * graph.time().max_entry(),
            ..Self::default()
        }
    }
}

/// Pure fitness functions over one graph and one set of score weights.
pub struct FitnessEvaluator<'a> {
    graph: &'a LocationGraph,
    weights: ScoreWeights,
}

impl<'a> FitnessEvaluator<'a> {
    /// Creates an evaluator for `graph` with the given weights.
    pub fn new(graph: &'a LocationGraph, weights: ScoreWeights) -> Self {
        Self { graph, weights }
    }

    /// The graph this evaluator reads from.
    pub fn graph(&self) -> &LocationGraph {
        self.graph
    }

    /// Sum of directed distances over consecutive route pairs.
    pub fn total_distance(&self, order: &[usize]) -> f64 {
        order
            .windows(2)
            .map(|pair| self.graph.distance().get(pair[0], pair[1]))
            .sum()
    }

    /// Sum of directed travel times over consecutive route pairs.
    pub fn total_time(&self, order: &[usize]) -> f64 {
        order
            .windows(2)
            .map(|pair| self.graph.time().get(pair[0], pair[1]))
            .sum()
    }

    /// Combined fitness: reciprocal of the weighted normalized cost.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::InvariantViolation`] if the combined cost
    /// degenerates to zero or a non-finite value. This cannot happen for a
    /// valid route over positive matrix entries between distinct locations;
    /// it signals an implementation defect and the caller must abort the
    /// affected run.
    pub fn score(&self, order: &[usize]) -> Result<f64> {
        let distance = self.total_distance(order);
        let time = self.total_time(order);
        let combined = self.weights.distance_weight * distance / self.weights.max_distance
            + self.weights.time_weight * time / self.weights.max_time;
        if !combined.is_finite() || combined <= 0.0 {
            return Err(CompareError::InvariantViolation(format!(
                "degenerate fitness denominator {combined} for route {order:?}"
            )));
        }
        Ok(1.0 / combined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_graph() -> LocationGraph {
        LocationGraph::from_rows(
            &["A", "B", "C", "D"],
            &[
                vec![0.0, 1.0, 4.0, 7.0],
                vec![2.0, 0.0, 3.0, 5.0],
                vec![4.0, 3.0, 0.0, 2.0],
                vec![6.0, 5.0, 2.0, 0.0],
            ],
            &[
                vec![0.0, 10.0, 40.0, 70.0],
                vec![20.0, 0.0, 30.0, 50.0],
                vec![40.0, 30.0, 0.0, 20.0],
                vec![60.0, 50.0, 20.0, 0.0],
            ],
        )
        .expect("valid fixture")
    }

    #[test]
    fn test_total_distance_follows_direction() {
        let graph = small_graph();
        let eval = FitnessEvaluator::new(&graph, ScoreWeights::default());
        // A->B (1) + B->C (3) + C->D (2)
        assert_eq!(eval.total_distance(&[0, 1, 2, 3]), 6.0);
        // Reverse direction reads the other triangle: D->C (2) + C->B (3) + B->A (2)
        assert_eq!(eval.total_distance(&[3, 2, 1, 0]), 7.0);
    }

    #[test]
    fn test_total_time() {
        let graph = small_graph();
        let eval = FitnessEvaluator::new(&graph, ScoreWeights::default());
        assert_eq!(eval.total_time(&[0, 1, 2, 3]), 60.0);
    }

    #[test]
    fn test_score_matches_formula() {
        let graph = small_graph();
        let weights = ScoreWeights {
            distance_weight: 0.6,
            time_weight: 0.4,
            max_distance: 100.0,
            max_time: 1000.0,
        };
        let eval = FitnessEvaluator::new(&graph, weights);
        let expected = 1.0 / (0.6 * 6.0 / 100.0 + 0.4 * 60.0 / 1000.0);
        let got = eval.score(&[0, 1, 2, 3]).expect("positive cost");
        assert!((got - expected).abs() < 1e-12, "got {got}, expected {expected}");
    }

    #[test]
    fn test_score_is_pure() {
        let graph = small_graph();
        let eval = FitnessEvaluator::new(&graph, ScoreWeights::default());
        let a = eval.score(&[0, 2, 1, 3]).expect("ok");
        let _ = eval.score(&[0, 3, 2, 1]).expect("ok");
        let b = eval.score(&[0, 2, 1, 3]).expect("ok");
        assert_eq!(a, b);
    }

    #[test]
    fn test_shorter_route_scores_higher() {
        let graph = small_graph();
        let eval = FitnessEvaluator::new(&graph, ScoreWeights::default());
        let short = eval.score(&[0, 1, 2, 3]).expect("ok");
        let long = eval.score(&[0, 3, 1, 2]).expect("ok");
        assert!(short > long);
    }

    #[test]
    fn test_zero_cost_route_is_invariant_violation() {
        // All-zero matrices pass input validation but make the combined
        // score collapse to zero; the evaluator must refuse, not divide.
        let graph = LocationGraph::from_rows(
            &["A", "B", "C"],
            &[vec![0.0; 3], vec![0.0; 3], vec![0.0; 3]],
            &[vec![0.0; 3], vec![0.0; 3], vec![0.0; 3]],
        )
        .expect("valid input");
        let eval = FitnessEvaluator::new(&graph, ScoreWeights::default());
        let err = eval.score(&[0, 1, 2]).expect_err("zero denominator");
        assert!(matches!(err, CompareError::InvariantViolation(_)));
    }

    #[test]
    fn test_derive_bounds() {
        let graph = small_graph();
        let weights = ScoreWeights::derive(&graph);
        assert_eq!(weights.max_distance, 3.0 * 7.0);
        assert_eq!(weights.max_time, 3.0 * 70.0);
        assert_eq!(weights.distance_weight, 0.6);
        assert_eq!(weights.time_weight, 0.4);
    }
}
