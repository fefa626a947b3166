use crate::backend::Backend;
use std::marker::PhantomData;

/// Trait for the scalar type a backend computes in.
///
/// Implemented for `f64`.
///
/// # Example
/// ```
/// use gradlogit::backend::ScalarOps;
///
/// assert_eq!(2.5f64.to_f64(), 2.5);
/// ```
pub trait ScalarOps:
    Clone + Copy + Send + Sync + PartialOrd + std::fmt::Debug + std::ops::Neg<Output = Self>
{
    /// Converts this scalar to an `f64` value.
    fn to_f64(self) -> f64;
}

impl ScalarOps for f64 {
    fn to_f64(self) -> f64 {
        self
    }
}

/// Backend-typed scalar wrapper.
///
/// Wraps a backend's native scalar type (`B::Scalar`) while carrying phantom
/// type information about its originating backend.
///
/// # Example
/// ```
/// use gradlogit::backend::{CpuBackend, Scalar};
///
/// let a = Scalar::<CpuBackend>::new(3.0);
/// assert_eq!((-a).to_f64(), -3.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Scalar<B: Backend> {
    pub(crate) data: B::Scalar,
    pub(crate) backend: PhantomData<B>,
}

impl<B: Backend> Scalar<B> {
    /// Creates a scalar from an `f64` host value.
    pub fn new(value: f64) -> Self {
        Self::from_raw(B::scalar_f64(value))
    }

    pub(crate) fn from_raw(data: B::Scalar) -> Self {
        Self {
            data,
            backend: PhantomData,
        }
    }

    /// Converts to a host `f64`.
    pub fn to_f64(&self) -> f64 {
        self.data.to_f64()
    }
}

impl<B: Backend> std::ops::Neg for Scalar<B> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_raw(-self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::CpuBackend;

    #[test]
    fn test_scalar_new_round_trips_host_value() {
        let s: Scalar<CpuBackend> = Scalar::new(0.125);
        assert_eq!(s.data, 0.125);
        assert_eq!(s.to_f64(), 0.125);
    }

    #[test]
    fn test_scalar_neg() {
        let s: Scalar<CpuBackend> = Scalar::new(0.5);
        assert_eq!((-s).to_f64(), -0.5);
        assert_eq!((-Scalar::<CpuBackend>::new(-2.0)).to_f64(), 2.0);
    }
}
