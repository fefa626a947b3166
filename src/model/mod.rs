//! The logistic regression estimator and its configuration.

mod config;
mod logistic;

pub use config::{LogisticConfig, LogisticConfigBuilder};
pub use logistic::LogisticRegression;

/// [`LogisticRegression`] on the default CPU backend.
#[cfg(feature = "cpu")]
pub type LogisticRegressor = LogisticRegression<crate::backend::CpuBackend>;
