//! Location set and directed cost matrices.
//!
//! [`LocationGraph`] is the immutable input to the search: an ordered list
//! of location names plus a directed distance matrix (km) and a directed
//! time matrix (minutes). All validation happens at construction, so the
//! evolutionary engine never re-checks its inputs.

mod matrix;

pub use matrix::CostMatrix;

use crate::error::{CompareError, Result};

/// Minimum number of locations a graph must contain.
pub const MIN_LOCATIONS: usize = 3;

/// An immutable set of locations with directed distance and time matrices.
///
/// Row/column order of both matrices matches the location list. Entries
/// need not be symmetric.
///
/// # Examples
///
/// ```
/// use route_compare::graph::{CostMatrix, LocationGraph};
///
/// let distance = CostMatrix::from_rows(&[
///     vec![0.0, 1.0, 2.0],
///     vec![1.0, 0.0, 3.0],
///     vec![2.0, 3.0, 0.0],
/// ]).expect("square grid");
/// let time = distance.clone();
///
/// let graph = LocationGraph::new(
///     vec!["A".into(), "B".into(), "C".into()],
///     distance,
///     time,
/// ).expect("valid input");
///
/// assert_eq!(graph.len(), 3);
/// assert_eq!(graph.index_of("B"), Some(1));
/// assert_eq!(graph.name(2), "C");
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationGraph {
    names: Vec<String>,
    distance: CostMatrix,
    time: CostMatrix,
}

impl LocationGraph {
    /// Builds a graph from location names and validated cost matrices.
    ///
    /// # Errors
    ///
    /// - [`CompareError::TooFewLocations`] if fewer than
    ///   [`MIN_LOCATIONS`] names are supplied
    /// - [`CompareError::DuplicateLocation`] if a name repeats
    /// - [`CompareError::InvalidMatrix`] if a matrix's dimensions disagree
    ///   with the location count, or it contains a negative/non-finite
    ///   entry or a non-zero diagonal
    pub fn new(names: Vec<String>, distance: CostMatrix, time: CostMatrix) -> Result<Self> {
        let n = names.len();
        if n < MIN_LOCATIONS {
            return Err(CompareError::TooFewLocations(n));
        }
        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                return Err(CompareError::DuplicateLocation(name.clone()));
            }
        }
        distance.validate("distance", n)?;
        time.validate("time", n)?;
        Ok(Self {
            names,
            distance,
            time,
        })
    }

    /// Builds a graph from string slices and nested matrix rows.
    pub fn from_rows(
        names: &[&str],
        distance_rows: &[Vec<f64>],
        time_rows: &[Vec<f64>],
    ) -> Result<Self> {
        let distance = CostMatrix::from_rows(distance_rows).ok_or(CompareError::InvalidMatrix {
            matrix: "distance",
            reason: "grid is not square".into(),
        })?;
        let time = CostMatrix::from_rows(time_rows).ok_or(CompareError::InvalidMatrix {
            matrix: "time",
            reason: "grid is not square".into(),
        })?;
        Self::new(names.iter().map(|s| s.to_string()).collect(), distance, time)
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always `false`; a graph has at least [`MIN_LOCATIONS`] locations.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Position of `name` in the location list.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Name of the location at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn name(&self, index: usize) -> &str {
        &self.names[index]
    }

    /// All location names in list order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The directed distance matrix (km).
    pub fn distance(&self) -> &CostMatrix {
        &self.distance
    }

    /// The directed time matrix (minutes).
    pub fn time(&self) -> &CostMatrix {
        &self.time
    }

    /// Resolves an index route to location names.
    pub fn resolve(&self, order: &[usize]) -> Vec<String> {
        order.iter().map(|&i| self.names[i].clone()).collect()
    }
}
