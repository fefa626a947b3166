//! # Backend Abstraction
//!
//! This module provides the numeric array capability the learning algorithm
//! runs on. The model never touches storage directly: every matrix-vector
//! product, transpose, elementwise exponential and rounding goes through a
//! [`Backend`] chosen at compile time.
//!
//! ## Design
//!
//! - **Stateless backends**: a backend is a unit type; all operations are
//!   associated functions over owned or borrowed tensors. Nothing global.
//! - **Zero-cost generics**: backend selection happens via type parameters,
//!   no dynamic dispatch.
//! - **Typed wrappers**: [`Tensor1D<B>`], [`Tensor2D<B>`] and [`Scalar<B>`]
//!   carry the backend in their type so values from different backends cannot
//!   be mixed.
//! - **Feature-gated implementations**: `cpu` (default, pure Rust) and
//!   `ndarray`.
//!
//! ## Available Backends
//!
//! | Backend          | Feature   | Use Case                          |
//! |------------------|-----------|-----------------------------------|
//! | `CpuBackend`     | `cpu`     | Default, pure-Rust implementation |
//! | `NdarrayBackend` | `ndarray` | Interop with `ndarray` ecosystem  |
//!
//! ## Example
//!
//! ```rust
//! use gradlogit::backend::{CpuBackend, Tensor1D, Tensor2D};
//!
//! let x = Tensor2D::<CpuBackend>::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
//! let w = Tensor1D::<CpuBackend>::new(vec![0.5, 0.5]);
//!
//! assert_eq!(x.dot(&w).to_vec(), vec![1.5, 3.5]);
//! ```

#[cfg(feature = "cpu")]
mod cpu;
#[cfg(feature = "cpu")]
/// Pure-Rust CPU backend implementation with zero external dependencies.
pub use cpu::{CpuBackend, CpuTensor2D};

#[cfg(feature = "ndarray")]
mod ndarray_backend;
#[cfg(feature = "ndarray")]
/// Backend backed by the `ndarray` crate for ecosystem interoperability.
pub use ndarray_backend::{NdarrayBackend, NdarrayTensor2D};

/// Scalar value representation and arithmetic operations.
pub mod scalar;
/// One-dimensional tensor abstraction.
pub mod tensor1d;
/// Two-dimensional tensor abstraction.
pub mod tensor2d;

pub use scalar::{Scalar, ScalarOps};
pub use tensor1d::Tensor1D;
pub use tensor2d::Tensor2D;

/// Abstraction over the dense array operations used by training and inference.
///
/// Implementations provide concrete tensor types and the handful of operations
/// the logistic regression procedure consumes. All 2D tensors are row-major.
///
/// # Safety Guarantees
///
/// - Shape-sensitive operations (`matvec`, elementwise binary ops) panic on
///   mismatch. Callers in this crate validate shapes first and surface
///   [`LogitError`](crate::LogitError) to users, so a panic here indicates a bug.
/// - Tensor types are `Clone + Send + Sync`.
///
/// # Example Implementation Sketch
///
/// ```ignore
/// use gradlogit::backend::Backend;
///
/// #[derive(Clone, Debug, Copy)]
/// struct MyBackend;
///
/// impl Backend for MyBackend {
///     type Scalar = f64;
///     type Tensor1D = Vec<f64>;
///     type Tensor2D = MyMatrix;
///     // ... implement all required methods
/// }
/// ```
pub trait Backend: Clone + Copy + 'static {
    /// Scalar type supporting arithmetic operations.
    type Scalar: ScalarOps;

    /// One-dimensional tensor type.
    type Tensor1D: Clone + Send + Sync;

    /// Two-dimensional tensor type.
    type Tensor2D: Clone + Send + Sync;

    // --- Constructors ---

    /// Creates a 1D tensor filled with zeros of given length.
    fn zeros_1d(len: usize) -> Self::Tensor1D;

    /// Constructs a 1D tensor from owned data.
    fn from_vec_1d(data: Vec<f64>) -> Self::Tensor1D;

    /// Constructs a 2D tensor from row-major ordered data.
    ///
    /// # Panics
    /// If `data.len() != rows * cols`.
    fn from_vec_2d(data: Vec<f64>, rows: usize, cols: usize) -> Self::Tensor2D;

    // --- Element-wise operations ---

    /// Element-wise addition of two 1D tensors.
    ///
    /// # Panics
    /// If tensors have different lengths.
    fn add_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D;

    /// Element-wise subtraction of two 1D tensors.
    ///
    /// # Panics
    /// If tensors have different lengths.
    fn sub_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D;

    /// Element-wise multiplication of two 1D tensors.
    ///
    /// # Panics
    /// If tensors have different lengths.
    fn mul_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D;

    /// Multiplies each element of tensor by a scalar.
    fn mul_scalar_1d(t: &Self::Tensor1D, s: &Self::Scalar) -> Self::Tensor1D;

    /// Adds a scalar to each element of tensor.
    fn add_scalar_1d(t: &Self::Tensor1D, s: &Self::Scalar) -> Self::Tensor1D;

    /// Element-wise reciprocal `1 / x`. Follows IEEE 754 (`1 / inf == 0`).
    fn recip_1d(t: &Self::Tensor1D) -> Self::Tensor1D;

    /// Clamps every element into `[lo, hi]`.
    fn clamp_1d(t: &Self::Tensor1D, lo: &Self::Scalar, hi: &Self::Scalar) -> Self::Tensor1D;

    /// Element-wise exponential function (e^x).
    ///
    /// Overflows to `+inf` for large inputs rather than panicking.
    fn exp_1d(x: &Self::Tensor1D) -> Self::Tensor1D;

    /// Element-wise natural logarithm.
    fn log_1d(x: &Self::Tensor1D) -> Self::Tensor1D;

    /// Element-wise rounding to the nearest integer, ties to even.
    ///
    /// `0.5 -> 0.0`, `1.5 -> 2.0`, `2.5 -> 2.0`.
    fn round_1d(x: &Self::Tensor1D) -> Self::Tensor1D;

    // --- Reductions ---

    /// Computes the arithmetic mean of all elements in a 1D tensor.
    ///
    /// Returns NaN for an empty tensor.
    fn mean_all_1d(t: &Self::Tensor1D) -> Self::Scalar;

    // --- Scalar operations ---

    /// Creates a backend-specific scalar from an f64 value.
    fn scalar_f64(value: f64) -> Self::Scalar;

    // --- Data access ---

    /// Converts a 1D tensor to a Vec of f64 values.
    ///
    /// Not intended for hot paths due to allocation overhead.
    fn to_vec_1d(t: &Self::Tensor1D) -> Vec<f64>;

    /// Returns the number of elements in a 1D tensor.
    fn len_1d(t: &Self::Tensor1D) -> usize;

    /// Returns the shape of a 2D tensor as (rows, cols).
    fn shape(t: &Self::Tensor2D) -> (usize, usize);

    // --- Linear algebra ---

    /// Matrix-vector multiplication.
    ///
    /// Computes `y = A * x` where `A` is (m × n) and `x` is (n,).
    /// Returns a (m,) vector.
    ///
    /// # Panics
    /// If `A.cols() != x.len()`.
    fn matvec(a: &Self::Tensor2D, x: &Self::Tensor1D) -> Self::Tensor1D;

    /// Returns the transpose of a 2D tensor.
    ///
    /// Converts an (m × n) matrix to (n × m) with elements at (i,j) ↔ (j,i).
    fn transpose(t: &Self::Tensor2D) -> Self::Tensor2D;

    /// Returns a copy of `t` with a column of ones inserted at index 0.
    ///
    /// An (m × n) matrix becomes (m × (n + 1)).
    fn prepend_ones_column(t: &Self::Tensor2D) -> Self::Tensor2D;
}
