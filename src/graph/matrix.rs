//! Dense cost matrix.

use crate::error::{CompareError, Result};

/// A dense n×n cost matrix stored in row-major order.
///
/// Holds directed edge costs (distance in km or travel time in minutes);
/// entries need not be symmetric. Immutable once validated.
///
/// # Examples
///
/// ```
/// use route_compare::graph::CostMatrix;
///
/// let m = CostMatrix::from_rows(&[
///     vec![0.0, 2.0],
///     vec![3.0, 0.0],
/// ]).expect("square grid");
/// assert_eq!(m.get(0, 1), 2.0);
/// assert_eq!(m.get(1, 0), 3.0);
/// assert_eq!(m.size(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostMatrix {
    data: Vec<f64>,
    size: usize,
}

impl CostMatrix {
    /// Creates a cost matrix from a flat row-major grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Creates a cost matrix from nested rows.
    ///
    /// Returns `None` if any row length differs from the row count.
    pub fn from_rows(rows: &[Vec<f64>]) -> Option<Self> {
        let n = rows.len();
        if rows.iter().any(|row| row.len() != n) {
            return None;
        }
        let data = rows.iter().flatten().copied().collect();
        Self::from_data(n, data)
    }

    /// Returns the cost from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Largest entry in the matrix.
    pub fn max_entry(&self) -> f64 {
        self.data.iter().copied().fold(0.0, f64::max)
    }

    /// Checks that the matrix matches the expected location count and that
    /// every entry is finite, non-negative, and zero on the diagonal.
    ///
    /// `label` names the matrix in error messages.
    pub fn validate(&self, label: &'static str, expected_size: usize) -> Result<()> {
        if self.size != expected_size {
            return Err(CompareError::InvalidMatrix {
                matrix: label,
                reason: format!("expected {expected_size}x{expected_size}, got {0}x{0}", self.size),
            });
        }
        for from in 0..self.size {
            for to in 0..self.size {
                let value = self.get(from, to);
                if !value.is_finite() || value < 0.0 {
                    return Err(CompareError::InvalidMatrix {
                        matrix: label,
                        reason: format!("entry [{from}][{to}] = {value} is not a non-negative finite number"),
                    });
                }
                if from == to && value != 0.0 {
                    return Err(CompareError::InvalidMatrix {
                        matrix: label,
                        reason: format!("non-zero diagonal at [{from}][{from}]"),
                    });
                }
            }
        }
        Ok(())
    }
}
