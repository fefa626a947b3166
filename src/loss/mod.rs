use crate::backend::{Backend, Scalar, Tensor1D};

/// A differentiable loss over predicted probabilities.
///
/// Implementors define:
/// - the scalar loss value (diagnostics only),
/// - the gradient of the loss w.r.t. the predictions.
///
/// The gradient is what the model multiplies by the transposed augmented
/// design matrix to obtain the weight gradient.
pub trait Loss<B: Backend> {
    /// Computes the scalar loss value.
    fn loss(&self, prediction: &Tensor1D<B>, target: &Tensor1D<B>) -> Scalar<B>;

    /// Computes `∂L/∂pred`.
    fn grad_wrt_prediction(&self, prediction: &Tensor1D<B>, target: &Tensor1D<B>) -> Tensor1D<B>;
}

/// Binary cross-entropy on probabilities (log-loss).
///
/// `L = -(1/n) Σ [t·ln(p) + (1-t)·ln(1-p)]`
///
/// Combined with the logistic link, the gradient w.r.t. the linear scores is
/// `(p - t) / n`, which is what [`grad_wrt_prediction`](Loss::grad_wrt_prediction)
/// returns.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogLoss;

impl LogLoss {
    /// Probabilities are clamped into `[EPS, 1 - EPS]` before taking logs.
    pub const EPS: f64 = 1e-15;
}

impl<B: Backend> Loss<B> for LogLoss {
    fn loss(&self, p: &Tensor1D<B>, t: &Tensor1D<B>) -> Scalar<B> {
        let p = p.clamp(&Scalar::new(Self::EPS), &Scalar::new(1.0 - Self::EPS));
        let neg_one = Scalar::new(-1.0);
        let one = Scalar::new(1.0);

        let one_minus_p = p.scale(&neg_one).add_scalar(&one);
        let one_minus_t = t.scale(&neg_one).add_scalar(&one);

        let pos = t.mul(&p.log());
        let neg = one_minus_t.mul(&one_minus_p.log());
        -pos.add(&neg).mean()
    }

    fn grad_wrt_prediction(&self, p: &Tensor1D<B>, t: &Tensor1D<B>) -> Tensor1D<B> {
        let n = Scalar::new(1.0 / p.len() as f64);
        p.sub(t).scale(&n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::CpuBackend;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_log_loss_at_half() {
        let p = Tensor1D::<CpuBackend>::new(vec![0.5, 0.5]);
        let t = Tensor1D::<CpuBackend>::new(vec![0.0, 1.0]);

        let loss = LogLoss.loss(&p, &t);
        assert_abs_diff_eq!(loss.to_f64(), std::f64::consts::LN_2, epsilon = 1e-12);
    }

    #[test]
    fn test_log_loss_saturated_probabilities_are_finite() {
        let p = Tensor1D::<CpuBackend>::new(vec![0.0, 1.0]);
        let t = Tensor1D::<CpuBackend>::new(vec![1.0, 0.0]);

        let loss = LogLoss.loss(&p, &t);
        assert!(loss.to_f64().is_finite());
        assert!(loss.to_f64() > 30.0);
    }

    #[test]
    fn test_log_loss_gradient() {
        let p = Tensor1D::<CpuBackend>::new(vec![0.5, 0.9, 0.2, 0.6]);
        let t = Tensor1D::<CpuBackend>::new(vec![1.0, 1.0, 0.0, 0.0]);

        let grad = LogLoss.grad_wrt_prediction(&p, &t).to_vec();
        let expected = [-0.125, -0.025, 0.05, 0.15];
        for (g, e) in grad.iter().zip(expected) {
            assert_abs_diff_eq!(*g, e, epsilon = 1e-12);
        }
    }
}
