//! The logistic (sigmoid) function.
//!
//! Both forms use the direct formula `1 / (1 + e^(-x))`. For very negative
//! inputs `e^(-x)` overflows to infinity and the result is exactly `0.0`,
//! which is the correct limit; no error or panic is raised.

use crate::backend::{Backend, Scalar, Tensor1D};

/// Scalar logistic function `1 / (1 + e^(-x))`.
///
/// # Example
/// ```
/// use gradlogit::activation::logistic;
///
/// assert_eq!(logistic(0.0), 0.5);
/// assert!(logistic(4.0) > 0.98);
/// assert_eq!(logistic(-1000.0), 0.0);
/// ```
pub fn logistic(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Elementwise logistic function over a backend tensor.
///
/// Composed from backend primitives: negate, `exp`, add one, reciprocal.
///
/// # Example
/// ```
/// use gradlogit::activation::logistic_1d;
/// use gradlogit::backend::{CpuBackend, Tensor1D};
///
/// let z = Tensor1D::<CpuBackend>::new(vec![-1000.0, 0.0, 1000.0]);
/// assert_eq!(logistic_1d(&z).to_vec(), vec![0.0, 0.5, 1.0]);
/// ```
pub fn logistic_1d<B: Backend>(z: &Tensor1D<B>) -> Tensor1D<B> {
    z.scale(&Scalar::new(-1.0))
        .exp()
        .add_scalar(&Scalar::new(1.0))
        .recip()
}
