use super::Backend;

/// Pure-Rust backend over `Vec<f64>` storage.
#[derive(Clone, Debug, Copy)]
pub struct CpuBackend;

/// Row-major matrix: `(data, rows, cols)`.
#[derive(Debug, Clone)]
pub struct CpuTensor2D(pub Vec<f64>, pub usize, pub usize);

impl CpuTensor2D {
    pub fn new(data: Vec<f64>, rows: usize, cols: usize) -> Self {
        assert_eq!(data.len(), rows * cols, "Inconsistent shape");
        Self(data, rows, cols)
    }
}

fn zip_map(a: &[f64], b: &[f64], f: impl Fn(f64, f64) -> f64) -> Vec<f64> {
    assert_eq!(a.len(), b.len(), "Shapes must match");
    a.iter().zip(b.iter()).map(|(&x, &y)| f(x, y)).collect()
}

impl Backend for CpuBackend {
    type Scalar = f64;
    type Tensor1D = Vec<f64>;
    type Tensor2D = CpuTensor2D;

    // --- Constructors ---
    fn zeros_1d(len: usize) -> Self::Tensor1D {
        vec![0.; len]
    }

    fn from_vec_1d(data: Vec<f64>) -> Self::Tensor1D {
        data
    }

    fn from_vec_2d(data: Vec<f64>, rows: usize, cols: usize) -> Self::Tensor2D {
        CpuTensor2D::new(data, rows, cols)
    }

    // --- Element-wise ops ---
    fn add_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D {
        zip_map(a, b, |x, y| x + y)
    }

    fn sub_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D {
        zip_map(a, b, |x, y| x - y)
    }

    fn mul_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D {
        zip_map(a, b, |x, y| x * y)
    }

    fn mul_scalar_1d(t: &Self::Tensor1D, s: &Self::Scalar) -> Self::Tensor1D {
        t.iter().map(|x| x * s).collect()
    }

    fn add_scalar_1d(t: &Self::Tensor1D, s: &Self::Scalar) -> Self::Tensor1D {
        t.iter().map(|x| x + s).collect()
    }

    fn recip_1d(t: &Self::Tensor1D) -> Self::Tensor1D {
        t.iter().map(|x| 1.0 / x).collect()
    }

    fn clamp_1d(t: &Self::Tensor1D, lo: &Self::Scalar, hi: &Self::Scalar) -> Self::Tensor1D {
        t.iter().map(|x| x.clamp(*lo, *hi)).collect()
    }

    fn exp_1d(x: &Self::Tensor1D) -> Self::Tensor1D {
        x.iter().map(|&v| v.exp()).collect()
    }

    fn log_1d(x: &Self::Tensor1D) -> Self::Tensor1D {
        x.iter().map(|&v| v.ln()).collect()
    }

    fn round_1d(x: &Self::Tensor1D) -> Self::Tensor1D {
        x.iter().map(|&v| v.round_ties_even()).collect()
    }

    // --- Reductions ---
    fn mean_all_1d(t: &Self::Tensor1D) -> Self::Scalar {
        t.iter().sum::<f64>() / t.len() as f64
    }

    fn scalar_f64(value: f64) -> Self::Scalar {
        value
    }

    // --- Access ---
    fn to_vec_1d(t: &Self::Tensor1D) -> Vec<f64> {
        t.clone()
    }

    fn len_1d(t: &Self::Tensor1D) -> usize {
        t.len()
    }

    fn shape(t: &Self::Tensor2D) -> (usize, usize) {
        (t.1, t.2)
    }

    // --- Linear algebra ---
    fn matvec(a: &CpuTensor2D, x: &Vec<f64>) -> Vec<f64> {
        let CpuTensor2D(data, rows, cols) = a;
        assert_eq!(*cols, x.len(), "matvec: A.cols() must equal x.len()");
        if *cols == 0 {
            return vec![0.0; *rows];
        }
        data.chunks_exact(*cols)
            .map(|row| row.iter().zip(x.iter()).map(|(a, b)| a * b).sum())
            .collect()
    }

    fn transpose(a: &CpuTensor2D) -> Self::Tensor2D {
        let CpuTensor2D(inp, rows, cols) = a;
        let mut out = Vec::with_capacity(cols * rows);
        for col in 0..*cols {
            for row in 0..*rows {
                out.push(inp[row * cols + col]);
            }
        }
        CpuTensor2D::new(out, *cols, *rows)
    }

    fn prepend_ones_column(a: &CpuTensor2D) -> Self::Tensor2D {
        let CpuTensor2D(inp, rows, cols) = a;
        let mut out = Vec::with_capacity(rows * (cols + 1));
        for row in 0..*rows {
            out.push(1.0);
            out.extend_from_slice(&inp[row * cols..(row + 1) * cols]);
        }
        CpuTensor2D::new(out, *rows, cols + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matvec() {
        // X = [[1.0, 2.0],
        //      [3.0, 4.0],
        //      [5.0, 6.0]]
        let x = CpuTensor2D::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3, 2);
        let v = vec![1.0, -1.0];

        assert_eq!(CpuBackend::matvec(&x, &v), vec![-1.0, -1.0, -1.0]);
    }

    #[test]
    fn test_transpose_then_matvec() {
        // Xᵀ @ v = [1*1 + 3*0 + 5*2, 2*1 + 4*0 + 6*2] = [11.0, 14.0]
        let x = CpuTensor2D::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3, 2);
        let v = vec![1.0, 0.0, 2.0];

        let x_t = CpuBackend::transpose(&x);
        assert_eq!(CpuBackend::shape(&x_t), (2, 3));
        assert_eq!(CpuBackend::matvec(&x_t, &v), vec![11.0, 14.0]);

        // (4, 1) column: Xᵀ @ ones = [2+3+4+5]
        let x2 = CpuTensor2D::new(vec![2.0, 3.0, 4.0, 5.0], 4, 1);
        let x2_t = CpuBackend::transpose(&x2);
        assert_eq!(CpuBackend::matvec(&x2_t, &vec![1.0; 4]), vec![14.0]);
    }

    #[test]
    fn test_transpose_twice_is_identity() {
        let x = CpuTensor2D::new(vec![1.0, 0.0, 0.0, 0.0, 1.0, 0.0], 2, 3);
        let back = CpuBackend::transpose(&CpuBackend::transpose(&x));
        assert_eq!(back.0, x.0);
        assert_eq!((back.1, back.2), (2, 3));
    }

    #[test]
    fn test_prepend_ones_column() {
        let x = CpuTensor2D::new(vec![2.0, 3.0, 4.0, 5.0], 2, 2);
        let aug = CpuBackend::prepend_ones_column(&x);
        assert_eq!(aug.0, vec![1.0, 2.0, 3.0, 1.0, 4.0, 5.0]);
        assert_eq!((aug.1, aug.2), (2, 3));
    }

    #[test]
    fn test_round_ties_even() {
        let r = CpuBackend::round_1d(&vec![0.5, 1.5, 2.5, 3.5, 0.7]);
        assert_eq!(r, vec![0.0, 2.0, 2.0, 4.0, 1.0]);
    }

    #[test]
    #[should_panic(expected = "matvec")]
    fn test_matvec_shape_mismatch_panics() {
        let x = CpuTensor2D::new(vec![1.0, 2.0], 1, 2);
        CpuBackend::matvec(&x, &vec![1.0]);
    }
}
