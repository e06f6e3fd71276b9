//! Error types for route comparison.

use thiserror::Error;

/// Result type alias for comparison operations.
pub type Result<T> = std::result::Result<T, CompareError>;

/// Errors reported by graph construction, the evolutionary engine, and
/// the comparison ranker.
///
/// Input-shape errors (`InvalidStart`, `InvalidMatrix`, `TooFewLocations`,
/// `DuplicateLocation`) are reported before any search runs. An
/// [`InvariantViolation`](CompareError::InvariantViolation) can only arise
/// from an implementation defect and aborts the affected run instead of
/// propagating a corrupted result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompareError {
    /// The chosen start location is not in the location list.
    #[error("start location {0:?} is not in the location list")]
    InvalidStart(String),

    /// A cost matrix disagrees with the location count or contains an
    /// invalid entry (negative, non-finite, or non-zero diagonal).
    #[error("invalid {matrix} matrix: {reason}")]
    InvalidMatrix {
        /// Which matrix failed validation (`"distance"` or `"time"`).
        matrix: &'static str,
        /// Human-readable description of the violation.
        reason: String,
    },

    /// Fewer than three locations were supplied.
    #[error("need at least 3 locations, got {0}")]
    TooFewLocations(usize),

    /// The same location name appears more than once.
    #[error("duplicate location name {0:?}")]
    DuplicateLocation(String),

    /// A route broke the permutation/start invariant, or a fitness
    /// denominator degenerated. Structural, never caused by valid input.
    #[error("internal invariant violated: {0}")]
    InvariantViolation(String),

    /// The ranker was invoked with a partial result set.
    #[error("ranking requires {expected} combination results, got {actual}")]
    IncompleteComparison {
        /// Number of combination results the ranker requires.
        expected: usize,
        /// Number of combination results actually supplied.
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CompareError::InvalidStart("Nowhere".into());
        assert_eq!(
            err.to_string(),
            "start location \"Nowhere\" is not in the location list"
        );

        let err = CompareError::InvalidMatrix {
            matrix: "distance",
            reason: "non-zero diagonal at [2][2]".into(),
        };
        assert!(err.to_string().contains("distance matrix"));

        let err = CompareError::IncompleteComparison {
            expected: 9,
            actual: 4,
        };
        assert_eq!(
            err.to_string(),
            "ranking requires 9 combination results, got 4"
        );
    }
}
