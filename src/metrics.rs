//! Evaluation metrics for binary predictions.

use crate::backend::{Backend, Tensor1D};
use crate::error::{LogitError, Result};

/// Fraction of positions where `predictions[i] == targets[i]`.
///
/// Comparison is exact, which suits the `{0.0, 1.0}` output of
/// [`LogisticRegression::predict`](crate::LogisticRegression::predict).
/// Empty input yields `0.0`.
///
/// # Errors
/// [`LogitError::ShapeMismatch`] if the lengths differ.
///
/// # Example
/// ```
/// use gradlogit::backend::{CpuBackend, Tensor1D};
/// use gradlogit::metrics::accuracy;
///
/// let pred = Tensor1D::<CpuBackend>::new(vec![0.0, 1.0, 1.0, 0.0]);
/// let truth = Tensor1D::<CpuBackend>::new(vec![0.0, 1.0, 0.0, 0.0]);
/// assert_eq!(accuracy(&pred, &truth)?, 0.75);
/// # Ok::<(), gradlogit::LogitError>(())
/// ```
pub fn accuracy<B: Backend>(predictions: &Tensor1D<B>, targets: &Tensor1D<B>) -> Result<f64> {
    if predictions.len() != targets.len() {
        return Err(LogitError::ShapeMismatch {
            expected: format!("{} targets", predictions.len()),
            got: format!("{} targets", targets.len()),
        });
    }
    if predictions.is_empty() {
        return Ok(0.0);
    }

    let hits = predictions
        .to_vec()
        .iter()
        .zip(targets.to_vec().iter())
        .filter(|(p, t)| p == t)
        .count();
    Ok(hits as f64 / predictions.len() as f64)
}
