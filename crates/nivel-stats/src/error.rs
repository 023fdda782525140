//! Error types for the level-statistics transforms.

use thiserror::Error;

/// Errors that can occur when validating inputs to the statistics and
/// noise-correction transforms.
///
/// Validation happens once at the start of each call; no partial result is
/// ever produced alongside an error. Domain degeneracies (a corrected level
/// of `-inf`, a noise error of `+inf`, NaN propagation from NaN input) are
/// values, not errors, and never appear here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// Observation set with zero rows or zero columns
    #[error("level observation set is empty")]
    EmptyInput,

    /// Rows of a level matrix have differing observation counts
    #[error("row {row} has {got} observations, expected {expected}")]
    RaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Observation count of row 0.
        expected: usize,
        /// Observation count actually found.
        got: usize,
    },

    /// Fewer observations per row than the estimator needs
    #[error("need at least 2 observations per row for a sample standard deviation, got {got}")]
    TooFewObservations {
        /// Observations per row in the rejected input.
        got: usize,
    },

    /// Estimation-method token not one of `level`, `energy1`, `energy2`
    #[error("unknown estimation method '{0}' (expected 'level', 'energy1' or 'energy2')")]
    UnknownMethod(String),

    /// Ratio-kind token not one of `snr`, `snnr`
    #[error("unknown ratio kind '{0}' (expected 'snr' or 'snnr')")]
    UnknownRatioKind(String),

    /// Paired inputs whose lengths neither match nor broadcast
    #[error("shape mismatch: left input has {left} entries, right has {right}")]
    ShapeMismatch {
        /// Length of the left-hand input.
        left: usize,
        /// Length of the right-hand input.
        right: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ragged_rows_display() {
        let err = StatsError::RaggedRows {
            row: 3,
            expected: 5,
            got: 4,
        };
        assert_eq!(err.to_string(), "row 3 has 4 observations, expected 5");
    }

    #[test]
    fn unknown_method_display() {
        let err = StatsError::UnknownMethod("bogus".to_string());
        let msg = err.to_string();
        assert!(msg.contains("bogus"), "got: {msg}");
        assert!(msg.contains("energy2"), "got: {msg}");
    }

    #[test]
    fn shape_mismatch_display() {
        let err = StatsError::ShapeMismatch { left: 8, right: 3 };
        assert_eq!(
            err.to_string(),
            "shape mismatch: left input has 8 entries, right has 3"
        );
    }

    #[test]
    fn too_few_observations_display() {
        let err = StatsError::TooFewObservations { got: 1 };
        assert!(err.to_string().contains("got 1"));
    }
}
