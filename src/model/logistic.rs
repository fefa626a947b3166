use super::config::LogisticConfig;
use crate::activation::logistic_1d;
use crate::backend::{Backend, Tensor1D, Tensor2D};
use crate::error::{LogitError, Result};
use crate::loss::{LogLoss, Loss};
use crate::optimizer::{GradientDescent, Optimizer};
use log::{debug, info, log_enabled, warn, Level};

/// Log-loss is reported at this cadence when debug logging is enabled.
const LOSS_LOG_EVERY: usize = 1000;

/// Binary logistic regression trained by full-batch gradient descent.
///
/// The model owns its configuration and, once fitted, a weight vector of
/// length `1 + n_features`. Index 0 is the intercept; the remaining entries
/// follow the input feature order.
///
/// Training runs exactly `iterations` steps with no early stopping. Each call
/// to [`fit`](Self::fit) starts again from all-zero weights, so the result
/// depends only on that call's data.
///
/// Predictions round probabilities half-to-even: a probability of exactly
/// `0.5` predicts `0.0`.
///
/// # Example
/// ```
/// use gradlogit::{CpuBackend, LogisticRegression, Tensor1D, Tensor2D};
///
/// let x = Tensor2D::<CpuBackend>::from_rows(&[
///     vec![0.0], vec![1.0], vec![2.0], vec![3.0],
///     vec![10.0], vec![11.0], vec![12.0], vec![13.0],
/// ])?;
/// let t = Tensor1D::new(vec![0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0]);
///
/// let mut model = LogisticRegression::<CpuBackend>::default();
/// let preds = model.fit(&x, &t)?.predict(&x)?;
/// assert_eq!(preds.to_vec(), t.to_vec());
/// # Ok::<(), gradlogit::LogitError>(())
/// ```
#[derive(Clone)]
pub struct LogisticRegression<B: Backend> {
    config: LogisticConfig,
    weights: Option<Tensor1D<B>>,
}

impl<B: Backend> LogisticRegression<B> {
    /// Creates an unfitted model.
    ///
    /// No validation is performed; see [`LogisticConfig`] for how degenerate
    /// values behave.
    pub fn new(iterations: usize, learning_rate: f64) -> Self {
        Self::from_config(LogisticConfig::new(iterations, learning_rate))
    }

    pub fn from_config(config: LogisticConfig) -> Self {
        Self {
            config,
            weights: None,
        }
    }

    /// Starts a [`LogisticConfigBuilder`](super::LogisticConfigBuilder);
    /// finish with [`LogisticRegression::from_config`].
    pub fn builder() -> super::LogisticConfigBuilder {
        LogisticConfig::builder()
    }

    /// Trains on design matrix `x` (n × m) and targets `t` (length n).
    ///
    /// Targets are expected to be `0.0` or `1.0`; other values are not
    /// rejected and simply enter the residual as given.
    ///
    /// Any previously learned weights are discarded. On error the model is
    /// left exactly as it was.
    ///
    /// # Errors
    /// - [`LogitError::EmptyTrainingData`] if `x` has no rows.
    /// - [`LogitError::ShapeMismatch`] if `t.len() != x.nrows()`.
    pub fn fit(&mut self, x: &Tensor2D<B>, t: &Tensor1D<B>) -> Result<&mut Self> {
        let (n, m) = x.shape();
        if n == 0 {
            return Err(LogitError::EmptyTrainingData);
        }
        if t.len() != n {
            return Err(LogitError::ShapeMismatch {
                expected: format!("{} targets", n),
                got: format!("{} targets", t.len()),
            });
        }

        let LogisticConfig {
            iterations,
            learning_rate,
        } = self.config;
        if self.config.is_degenerate() {
            warn!(
                "degenerate training config: iterations = {}, learning_rate = {}",
                iterations, learning_rate
            );
        }
        info!(
            "fitting logistic regression: {} examples, {} features, {} iterations, lr = {}",
            n, m, iterations, learning_rate
        );

        let x_aug = x.with_intercept();
        let x_aug_t = x_aug.transpose();
        let loss_fn = LogLoss;
        let optimizer = GradientDescent::<B>::new(learning_rate);

        let mut weights = Tensor1D::<B>::zeros(m + 1);
        let mut p = logistic_1d(&x_aug.dot(&weights));

        for step in 0..iterations {
            let residual = loss_fn.grad_wrt_prediction(&p, t);
            let gradient = x_aug_t.dot(&residual);
            weights = optimizer.step(&weights, &gradient);
            p = logistic_1d(&x_aug.dot(&weights));

            if log_enabled!(Level::Debug) && (step + 1) % LOSS_LOG_EVERY == 0 {
                debug!(
                    "iteration {}: log-loss = {:.6}",
                    step + 1,
                    loss_fn.loss(&p, t).to_f64()
                );
            }
        }

        info!(
            "fit finished: intercept = {}",
            weights.to_vec().first().copied().unwrap_or_default()
        );
        self.weights = Some(weights);
        Ok(self)
    }

    /// Raw linear scores `X' · w`, where `X'` is `x` with the intercept
    /// column prepended.
    ///
    /// # Errors
    /// - [`LogitError::NotFitted`] before the first successful `fit`. Calling
    ///   any prediction method on an untrained model is a shape violation
    ///   (there is no weight vector to match against); this crate reports it
    ///   as its own variant rather than as `ShapeMismatch`.
    /// - [`LogitError::ShapeMismatch`] if `x` has a different feature count
    ///   than the training data.
    pub fn decision_function(&self, x: &Tensor2D<B>) -> Result<Tensor1D<B>> {
        let weights = self.weights.as_ref().ok_or(LogitError::NotFitted)?;
        let expected = weights.len() - 1;
        if x.ncols() != expected {
            return Err(LogitError::feature_mismatch(expected, x.ncols()));
        }
        Ok(x.with_intercept().dot(weights))
    }

    /// Probabilities `logistic(X' · w)`, each in `[0, 1]`.
    ///
    /// # Errors
    /// Same as [`decision_function`](Self::decision_function).
    pub fn predict_proba(&self, x: &Tensor2D<B>) -> Result<Tensor1D<B>> {
        Ok(logistic_1d(&self.decision_function(x)?))
    }

    /// Class predictions: probabilities rounded half-to-even, so every value
    /// is exactly `0.0` or `1.0`.
    ///
    /// # Errors
    /// Same as [`decision_function`](Self::decision_function).
    pub fn predict(&self, x: &Tensor2D<B>) -> Result<Tensor1D<B>> {
        Ok(self.predict_proba(x)?.round())
    }

    pub fn config(&self) -> &LogisticConfig {
        &self.config
    }

    pub fn iterations(&self) -> usize {
        self.config.iterations
    }

    pub fn learning_rate(&self) -> f64 {
        self.config.learning_rate
    }

    /// Learned weights (intercept first), or `None` before `fit`.
    pub fn weights(&self) -> Option<&Tensor1D<B>> {
        self.weights.as_ref()
    }

    /// Learned intercept, or `None` before `fit`.
    pub fn intercept(&self) -> Option<f64> {
        self.weights
            .as_ref()
            .and_then(|w| w.to_vec().first().copied())
    }

    /// Feature count of the last training matrix, or `None` before `fit`.
    pub fn n_features(&self) -> Option<usize> {
        self.weights.as_ref().map(|w| w.len() - 1)
    }

    pub fn is_fitted(&self) -> bool {
        self.weights.is_some()
    }
}

impl<B: Backend> Default for LogisticRegression<B> {
    fn default() -> Self {
        Self::from_config(LogisticConfig::default())
    }
}

impl<B: Backend> std::fmt::Debug for LogisticRegression<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogisticRegression")
            .field("config", &self.config)
            .field("weights", &self.weights)
            .finish()
    }
}
