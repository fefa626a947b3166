use crate::backend::{Backend, Scalar, Tensor1D};

/// Trait for gradient-based parameter updates.
///
/// Training logic (the fit loop) is decoupled from the update rule so the loop
/// only ever sees `params -> params`.
pub trait Optimizer<B: Backend> {
    /// Returns the updated parameters. Inputs are not mutated.
    fn step(&self, params: &Tensor1D<B>, gradients: &Tensor1D<B>) -> Tensor1D<B>;
}

/// Plain gradient descent with a fixed step size.
///
/// ```text
/// θ ← θ - η · ∇L(θ)
/// ```
///
/// Stateless: no momentum, no schedule. A non-positive `η` is accepted and
/// moves the parameters against (or not at all along) the descent direction.
///
/// # Example
/// ```rust
/// use gradlogit::backend::{CpuBackend, Tensor1D};
/// use gradlogit::optimizer::{GradientDescent, Optimizer};
///
/// let gd = GradientDescent::<CpuBackend>::new(0.5);
/// let w = Tensor1D::new(vec![1.0, -1.0]);
/// let g = Tensor1D::new(vec![2.0, -4.0]);
/// assert_eq!(gd.step(&w, &g).to_vec(), vec![0.0, 1.0]);
/// ```
#[derive(Clone, Debug)]
pub struct GradientDescent<B: Backend> {
    lr: Scalar<B>,
}

impl<B: Backend> GradientDescent<B> {
    /// Creates the optimizer with learning rate `lr`.
    pub fn new(lr: f64) -> Self {
        Self {
            lr: Scalar::new(lr),
        }
    }

    /// Returns the learning rate.
    pub fn learning_rate(&self) -> f64 {
        self.lr.to_f64()
    }
}

impl<B: Backend> Optimizer<B> for GradientDescent<B> {
    fn step(&self, params: &Tensor1D<B>, gradients: &Tensor1D<B>) -> Tensor1D<B> {
        params.sub(&gradients.scale(&self.lr))
    }
}
