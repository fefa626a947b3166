//! Error types for model training and inference.

use thiserror::Error;

/// Errors reported by fallible operations in this crate.
///
/// Every variant is a usage error detected before any arithmetic runs, so a
/// failed call never leaves a model partially trained. Numeric edge cases such
/// as `exp` overflowing to infinity are absorbed by the arithmetic and are not
/// represented here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LogitError {
    /// Shape or dimensionality mismatch between two operands.
    #[error("shape mismatch: expected {expected}, got {got}")]
    ShapeMismatch { expected: String, got: String },

    /// A design matrix row has a different length than the first row.
    #[error("row {row} has {got} features, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// Model used before calling `fit`.
    #[error("model is not fitted; call `fit` before predicting")]
    NotFitted,

    /// The training set contains zero examples.
    #[error("training data contains no examples")]
    EmptyTrainingData,
}

impl LogitError {
    pub(crate) fn feature_mismatch(expected: usize, got: usize) -> Self {
        LogitError::ShapeMismatch {
            expected: format!("{} features", expected),
            got: format!("{} features", got),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LogitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_shape_mismatch() {
        let err = LogitError::ShapeMismatch {
            expected: "4 targets".into(),
            got: "3 targets".into(),
        };
        assert_eq!(err.to_string(), "shape mismatch: expected 4 targets, got 3 targets");
    }

    #[test]
    fn test_display_ragged_rows() {
        let err = LogitError::RaggedRows {
            row: 2,
            expected: 3,
            got: 1,
        };
        assert_eq!(err.to_string(), "row 2 has 1 features, expected 3");
    }

    #[test]
    fn test_feature_mismatch_helper() {
        assert_eq!(
            LogitError::feature_mismatch(2, 5),
            LogitError::ShapeMismatch {
                expected: "2 features".into(),
                got: "5 features".into(),
            }
        );
    }
}
