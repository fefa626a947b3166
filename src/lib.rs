//! # gradlogit
//!
//! Binary logistic regression trained by full-batch gradient descent, over
//! pluggable numeric backends.
//!
//! ## Core Design Principles
//!
//! - **Fixed procedure**: `fit` runs exactly `iterations` gradient-descent
//!   steps from all-zero weights. No early stopping, no regularization.
//! - **Backend Agnosticism**: the [`Backend`] trait supplies the array
//!   primitives (matrix-vector product, transpose, `exp`, rounding), so the
//!   model code is identical on every backend.
//! - **Errors, not garbage**: shape violations and predicting before fitting
//!   return [`LogitError`]; exponential overflow saturates silently.
//!
//! ## Quick Start
//!
//! ```rust
//! use gradlogit::{CpuBackend, LogisticRegression, Tensor1D, Tensor2D};
//!
//! let x = Tensor2D::<CpuBackend>::from_rows(&[vec![-2.0], vec![-1.0], vec![1.0], vec![2.0]])?;
//! let t = Tensor1D::new(vec![0.0, 0.0, 1.0, 1.0]);
//!
//! let mut model = LogisticRegression::new(1000, 0.1);
//! model.fit(&x, &t)?;
//!
//! assert_eq!(model.predict(&x)?.to_vec(), vec![0.0, 0.0, 1.0, 1.0]);
//! # Ok::<(), gradlogit::LogitError>(())
//! ```
//!
//! ## Module Structure
//!
//! - `backend` — Tensor abstractions and computation primitives (`Tensor1D`, `Tensor2D`)
//! - `activation` — The logistic function
//! - `loss` — Log-loss and its gradient
//! - `optimizer` — Gradient-descent update rule
//! - `model` — `LogisticRegression` and its configuration
//! - `metrics` — Accuracy
//!
//! ## Logging
//!
//! Training reports progress through the [`log`] facade. Install any logger
//! (e.g. `env_logger`) in your binary to see it; the library never installs
//! one itself.

pub mod activation;
pub mod backend;
pub mod error;
pub mod loss;
pub mod metrics;
pub mod model;
pub mod optimizer;

pub use activation::logistic;
#[cfg(feature = "cpu")]
pub use backend::CpuBackend;
#[cfg(feature = "ndarray")]
pub use backend::NdarrayBackend;
pub use backend::{Backend, Scalar, ScalarOps, Tensor1D, Tensor2D};
pub use error::{LogitError, Result};
#[cfg(feature = "cpu")]
pub use model::LogisticRegressor;
pub use model::{LogisticConfig, LogisticConfigBuilder, LogisticRegression};
