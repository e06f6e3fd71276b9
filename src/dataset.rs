//! Reference dataset: ten Yogyakarta tourist locations.
//!
//! Directed road distances (km) and travel times (minutes) between ten
//! attractions. The default [`ScoreWeights`](crate::ga::ScoreWeights)
//! normalization bounds are calibrated to this dataset. Used by tests,
//! benchmarks, and as a ready-made input for callers without their own
//! matrices.

use crate::graph::LocationGraph;

/// The ten reference locations, in matrix row/column order.
pub const LOCATION_NAMES: [&str; 10] = [
    "Malioboro",
    "Taman Sari",
    "Alun-Alun Kidul",
    "Prawirotaman",
    "Kaliurang - Jeep Tour",
    "Candi Prambanan",
    "Goa Pindul",
    "Pantai Parangtritis",
    "Pantai Glagah",
    "Tugu Margo Utomo",
];

/// Builds the reference graph.
pub fn reference_graph() -> LocationGraph {
    let distance_km = [
        [0.0, 2.5, 2.5, 3.6, 25.0, 17.0, 42.0, 28.0, 41.0, 21.0],
        [2.5, 0.0, 0.7, 2.9, 27.0, 19.0, 42.0, 27.0, 41.0, 20.0],
        [2.5, 0.7, 0.0, 2.3, 27.0, 21.0, 42.0, 27.0, 41.0, 20.0],
        [3.6, 2.9, 2.3, 0.0, 28.0, 25.0, 41.0, 26.0, 46.0, 11.0],
        [25.0, 27.0, 27.0, 28.0, 0.0, 24.0, 59.0, 53.0, 66.0, 52.0],
        [17.0, 19.0, 21.0, 25.0, 24.0, 0.0, 37.0, 43.0, 58.0, 20.0],
        [42.0, 42.0, 42.0, 41.0, 59.0, 37.0, 0.0, 48.0, 76.0, 47.0],
        [28.0, 27.0, 27.0, 26.0, 53.0, 43.0, 48.0, 0.0, 38.0, 34.0],
        [41.0, 41.0, 41.0, 46.0, 66.0, 58.0, 76.0, 38.0, 0.0, 40.0],
        [21.0, 20.0, 20.0, 11.0, 52.0, 20.0, 47.0, 34.0, 40.0, 0.0],
    ];
    let time_min = [
        [0.0, 7.0, 7.0, 8.0, 39.0, 27.0, 66.0, 42.0, 57.0, 33.0],
        [9.0, 0.0, 3.0, 8.0, 45.0, 32.0, 70.0, 47.0, 63.0, 35.0],
        [8.0, 3.0, 0.0, 6.0, 53.0, 37.0, 72.0, 46.0, 63.0, 36.0],
        [9.0, 9.0, 7.0, 0.0, 54.0, 33.0, 66.0, 42.0, 64.0, 23.0],
        [42.0, 47.0, 56.0, 56.0, 0.0, 39.0, 89.0, 87.0, 102.0, 78.0],
        [26.0, 32.0, 39.0, 39.0, 40.0, 0.0, 64.0, 67.0, 86.0, 40.0],
        [64.0, 65.0, 70.0, 69.0, 99.0, 60.0, 0.0, 72.0, 112.0, 80.0],
        [42.0, 47.0, 43.0, 40.0, 87.0, 66.0, 69.0, 0.0, 54.0, 54.0],
        [63.0, 66.0, 66.0, 61.0, 100.0, 94.0, 110.0, 53.0, 0.0, 62.0],
        [35.0, 37.0, 19.0, 21.0, 84.0, 41.0, 82.0, 55.0, 61.0, 0.0],
    ];

    let distance_rows: Vec<Vec<f64>> = distance_km.iter().map(|row| row.to_vec()).collect();
    let time_rows: Vec<Vec<f64>> = time_min.iter().map(|row| row.to_vec()).collect();
    LocationGraph::from_rows(&LOCATION_NAMES, &distance_rows, &time_rows)
        .expect("reference dataset is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_graph_shape() {
        let graph = reference_graph();
        assert_eq!(graph.len(), 10);
        assert_eq!(graph.name(0), "Malioboro");
        assert_eq!(graph.index_of("Goa Pindul"), Some(6));
    }

    #[test]
    fn test_matrices_are_directed() {
        let graph = reference_graph();
        // Malioboro -> Taman Sari takes 7 minutes, the reverse 9
        assert_eq!(graph.time().get(0, 1), 7.0);
        assert_eq!(graph.time().get(1, 0), 9.0);
    }

    #[test]
    fn test_extreme_entries() {
        let graph = reference_graph();
        assert_eq!(graph.distance().max_entry(), 76.0);
        assert_eq!(graph.time().max_entry(), 112.0);
    }
}
