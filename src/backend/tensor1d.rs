use super::scalar::Scalar;
use crate::backend::Backend;
use std::marker::PhantomData;

/// Backend-typed 1D tensor.
///
/// Wraps a backend's native 1D representation (`B::Tensor1D`) and carries the
/// backend as a phantom type, so tensors from different backends cannot be
/// mixed.
///
/// Target vectors, weight vectors, scores, probabilities and predictions are
/// all `Tensor1D` values.
///
/// # Example
/// ```
/// use gradlogit::backend::{CpuBackend, Scalar, Tensor1D};
///
/// let x: Tensor1D<CpuBackend> = Tensor1D::new(vec![1.0, 2.0, 3.0]);
/// assert_eq!(x.len(), 3);
///
/// let y = x.scale(&Scalar::new(2.0));
/// assert_eq!(y.to_vec(), vec![2.0, 4.0, 6.0]);
/// ```
#[derive(Clone)]
pub struct Tensor1D<B: Backend> {
    pub(crate) data: B::Tensor1D,
    pub(crate) backend: PhantomData<B>,
}

impl<B: Backend> Tensor1D<B> {
    pub(crate) fn from_raw(data: B::Tensor1D) -> Self {
        Self {
            data,
            backend: PhantomData,
        }
    }

    /// Creates a new 1D tensor from host values.
    pub fn new(data: Vec<f64>) -> Self {
        Self::from_raw(B::from_vec_1d(data))
    }

    /// Creates a 1D tensor filled with zeros of specified length.
    ///
    /// # Example
    /// ```
    /// use gradlogit::backend::{CpuBackend, Tensor1D};
    ///
    /// let zeros: Tensor1D<CpuBackend> = Tensor1D::zeros(4);
    /// assert_eq!(zeros.to_vec(), vec![0.0, 0.0, 0.0, 0.0]);
    /// ```
    pub fn zeros(len: usize) -> Self {
        Self::from_raw(B::zeros_1d(len))
    }

    /// Element-wise `self + other`.
    ///
    /// # Panics
    /// Panics if tensors have different lengths.
    pub fn add(&self, other: &Self) -> Self {
        Self::from_raw(B::add_1d(&self.data, &other.data))
    }

    /// Element-wise `self - other`.
    ///
    /// # Panics
    /// Panics if tensors have different lengths.
    ///
    /// # Example
    /// ```
    /// use gradlogit::backend::{CpuBackend, Tensor1D};
    ///
    /// let a = Tensor1D::<CpuBackend>::new(vec![5.0, 7.0, 9.0]);
    /// let b = Tensor1D::<CpuBackend>::new(vec![2.0, 3.0, 4.0]);
    /// assert_eq!(a.sub(&b).to_vec(), vec![3.0, 4.0, 5.0]);
    /// ```
    pub fn sub(&self, other: &Self) -> Self {
        Self::from_raw(B::sub_1d(&self.data, &other.data))
    }

    /// Element-wise `self * other`.
    ///
    /// # Panics
    /// Panics if tensors have different lengths.
    pub fn mul(&self, other: &Self) -> Self {
        Self::from_raw(B::mul_1d(&self.data, &other.data))
    }

    /// Multiplies each element by a scalar.
    pub fn scale(&self, a: &Scalar<B>) -> Self {
        Self::from_raw(B::mul_scalar_1d(&self.data, &a.data))
    }

    /// Adds a scalar to each element.
    pub fn add_scalar(&self, a: &Scalar<B>) -> Self {
        Self::from_raw(B::add_scalar_1d(&self.data, &a.data))
    }

    /// Element-wise reciprocal `1 / x`.
    pub fn recip(&self) -> Self {
        Self::from_raw(B::recip_1d(&self.data))
    }

    /// Clamps every element into `[lo, hi]`.
    pub fn clamp(&self, lo: &Scalar<B>, hi: &Scalar<B>) -> Self {
        Self::from_raw(B::clamp_1d(&self.data, &lo.data, &hi.data))
    }

    /// Element-wise exponential `e^x`.
    ///
    /// # Numerical behavior
    /// Follows IEEE 754: large positive inputs return `INFINITY` on overflow.
    ///
    /// # Example
    /// ```
    /// use gradlogit::backend::{CpuBackend, Tensor1D};
    ///
    /// let t = Tensor1D::<CpuBackend>::new(vec![0.0, 1000.0]);
    /// let e = t.exp().to_vec();
    /// assert_eq!(e[0], 1.0);
    /// assert!(e[1].is_infinite());
    /// ```
    pub fn exp(&self) -> Self {
        Self::from_raw(B::exp_1d(&self.data))
    }

    /// Element-wise natural logarithm.
    pub fn log(&self) -> Self {
        Self::from_raw(B::log_1d(&self.data))
    }

    /// Rounds each element to the nearest integer, ties to even.
    ///
    /// # Example
    /// ```
    /// use gradlogit::backend::{CpuBackend, Tensor1D};
    ///
    /// let t = Tensor1D::<CpuBackend>::new(vec![0.49, 0.5, 0.51, 1.5, 2.5]);
    /// assert_eq!(t.round().to_vec(), vec![0.0, 0.0, 1.0, 2.0, 2.0]);
    /// ```
    pub fn round(&self) -> Self {
        Self::from_raw(B::round_1d(&self.data))
    }

    /// Arithmetic mean of all elements. NaN for an empty tensor.
    pub fn mean(&self) -> Scalar<B> {
        Scalar::from_raw(B::mean_all_1d(&self.data))
    }

    /// Copies the tensor into a host `Vec<f64>`.
    pub fn to_vec(&self) -> Vec<f64> {
        B::to_vec_1d(&self.data)
    }

    /// Returns the number of elements in the tensor.
    pub fn len(&self) -> usize {
        B::len_1d(&self.data)
    }

    /// Returns `true` if the tensor contains no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<B: Backend> std::fmt::Debug for Tensor1D<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Tensor1D").field(&self.to_vec()).finish()
    }
}

impl<B: Backend> From<Vec<f64>> for Tensor1D<B> {
    fn from(data: Vec<f64>) -> Self {
        Self::new(data)
    }
}

impl<B: Backend> From<&[f64]> for Tensor1D<B> {
    fn from(data: &[f64]) -> Self {
        Self::new(data.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::CpuBackend;

    #[test]
    fn test_tensor1d_elementwise() {
        let a = Tensor1D::<CpuBackend>::new(vec![1.0, 2.0, 3.0]);
        let b = Tensor1D::<CpuBackend>::new(vec![0.5, 0.5, 2.0]);

        assert_eq!(a.add(&b).to_vec(), vec![1.5, 2.5, 5.0]);
        assert_eq!(a.sub(&b).to_vec(), vec![0.5, 1.5, 1.0]);
        assert_eq!(a.mul(&b).to_vec(), vec![0.5, 1.0, 6.0]);
        assert_eq!(a.add_scalar(&Scalar::new(1.0)).to_vec(), vec![2.0, 3.0, 4.0]);
        assert_eq!(b.recip().to_vec(), vec![2.0, 2.0, 0.5]);
    }

    #[test]
    fn test_tensor1d_mean() {
        let t = Tensor1D::<CpuBackend>::new(vec![1.0, 2.0, 3.0, 4.0]);
        assert!((t.mean().to_f64() - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_tensor1d_round_ties_even() {
        let t = Tensor1D::<CpuBackend>::new(vec![-0.5, 0.5, 1.5, 2.5, 0.4999, 0.5001]);
        assert_eq!(t.round().to_vec(), vec![-0.0, 0.0, 2.0, 2.0, 0.0, 1.0]);
    }

    #[test]
    fn test_tensor1d_clamp() {
        let t = Tensor1D::<CpuBackend>::new(vec![-1.0, 0.5, 2.0]);
        let c = t.clamp(&Scalar::new(0.0), &Scalar::new(1.0));
        assert_eq!(c.to_vec(), vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_tensor1d_recip_of_infinity_is_zero() {
        let t = Tensor1D::<CpuBackend>::new(vec![f64::INFINITY]);
        assert_eq!(t.recip().to_vec(), vec![0.0]);
    }

    #[test]
    fn test_tensor1d_empty() {
        let t = Tensor1D::<CpuBackend>::zeros(0);
        assert!(t.is_empty());
        assert!(t.mean().to_f64().is_nan());
    }

    #[test]
    fn test_tensor1d_from_slice() {
        let data = [1.0, 0.0];
        let t: Tensor1D<CpuBackend> = data.as_slice().into();
        assert_eq!(t.to_vec(), vec![1.0, 0.0]);
    }
}
