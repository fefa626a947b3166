/// Training hyperparameters for [`LogisticRegression`](super::LogisticRegression).
///
/// Values are not validated. `iterations == 0` leaves the weights at zero and
/// a non-positive `learning_rate` stalls or reverses training; both are logged
/// as warnings by `fit` but never rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogisticConfig {
    /// Number of full-batch gradient-descent steps.
    pub iterations: usize,
    /// Step size applied to every gradient.
    pub learning_rate: f64,
}

impl LogisticConfig {
    pub const DEFAULT_ITERATIONS: usize = 15_000;
    pub const DEFAULT_LEARNING_RATE: f64 = 0.10;

    pub fn new(iterations: usize, learning_rate: f64) -> Self {
        Self {
            iterations,
            learning_rate,
        }
    }

    pub fn builder() -> LogisticConfigBuilder {
        LogisticConfigBuilder::new()
    }

    /// `true` when training cannot make meaningful progress.
    pub fn is_degenerate(&self) -> bool {
        self.iterations == 0 || self.learning_rate.is_nan() || self.learning_rate <= 0.0
    }
}

impl Default for LogisticConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ITERATIONS, Self::DEFAULT_LEARNING_RATE)
    }
}

/// Fluent builder for [`LogisticConfig`].
///
/// # Example
/// ```
/// use gradlogit::LogisticConfig;
///
/// let config = LogisticConfig::builder()
///     .iterations(500)
///     .learning_rate(0.5)
///     .build();
/// assert_eq!(config, LogisticConfig::new(500, 0.5));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct LogisticConfigBuilder {
    iterations: usize,
    learning_rate: f64,
}

impl LogisticConfigBuilder {
    pub fn new() -> Self {
        Self {
            iterations: LogisticConfig::DEFAULT_ITERATIONS,
            learning_rate: LogisticConfig::DEFAULT_LEARNING_RATE,
        }
    }

    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn learning_rate(mut self, lr: f64) -> Self {
        self.learning_rate = lr;
        self
    }

    pub fn build(self) -> LogisticConfig {
        LogisticConfig::new(self.iterations, self.learning_rate)
    }
}

impl Default for LogisticConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
