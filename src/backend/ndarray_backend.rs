use super::Backend;
use ndarray::{Array1, Array2};

/// Backend storing tensors as `ndarray` arrays.
#[derive(Clone, Debug, Copy)]
pub struct NdarrayBackend;

#[derive(Debug, Clone)]
pub struct NdarrayTensor2D(pub Array2<f64>);

impl Backend for NdarrayBackend {
    type Scalar = f64;
    type Tensor1D = Array1<f64>;
    type Tensor2D = NdarrayTensor2D;

    fn zeros_1d(len: usize) -> Self::Tensor1D {
        Array1::zeros(len)
    }

    fn from_vec_1d(data: Vec<f64>) -> Self::Tensor1D {
        Array1::from_vec(data)
    }

    fn from_vec_2d(data: Vec<f64>, rows: usize, cols: usize) -> Self::Tensor2D {
        NdarrayTensor2D(
            Array2::from_shape_vec((rows, cols), data).expect("Inconsistent shape"),
        )
    }

    fn add_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D {
        a + b
    }

    fn sub_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D {
        a - b
    }

    fn mul_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D {
        a * b
    }

    fn mul_scalar_1d(t: &Self::Tensor1D, s: &Self::Scalar) -> Self::Tensor1D {
        t.mapv(|x| x * *s)
    }

    fn add_scalar_1d(t: &Self::Tensor1D, s: &Self::Scalar) -> Self::Tensor1D {
        t.mapv(|x| x + *s)
    }

    fn recip_1d(t: &Self::Tensor1D) -> Self::Tensor1D {
        t.mapv(f64::recip)
    }

    fn clamp_1d(t: &Self::Tensor1D, lo: &Self::Scalar, hi: &Self::Scalar) -> Self::Tensor1D {
        t.mapv(|x| x.clamp(*lo, *hi))
    }

    fn exp_1d(x: &Self::Tensor1D) -> Self::Tensor1D {
        x.mapv(f64::exp)
    }

    fn log_1d(x: &Self::Tensor1D) -> Self::Tensor1D {
        x.mapv(f64::ln)
    }

    fn round_1d(x: &Self::Tensor1D) -> Self::Tensor1D {
        x.mapv(f64::round_ties_even)
    }

    fn mean_all_1d(t: &Self::Tensor1D) -> Self::Scalar {
        t.mean().unwrap_or(f64::NAN)
    }

    fn scalar_f64(value: f64) -> Self::Scalar {
        value
    }

    fn to_vec_1d(t: &Self::Tensor1D) -> Vec<f64> {
        t.to_vec()
    }

    fn len_1d(t: &Self::Tensor1D) -> usize {
        t.len()
    }

    fn shape(t: &Self::Tensor2D) -> (usize, usize) {
        t.0.dim()
    }

    fn matvec(a: &Self::Tensor2D, x: &Self::Tensor1D) -> Self::Tensor1D {
        assert_eq!(a.0.ncols(), x.len(), "matvec: A.cols() must equal x.len()");
        a.0.dot(x)
    }

    fn transpose(a: &Self::Tensor2D) -> Self::Tensor2D {
        NdarrayTensor2D(a.0.t().as_standard_layout().to_owned())
    }

    fn prepend_ones_column(a: &Self::Tensor2D) -> Self::Tensor2D {
        let (rows, cols) = a.0.dim();
        NdarrayTensor2D(Array2::from_shape_fn((rows, cols + 1), |(i, j)| {
            if j == 0 {
                1.0
            } else {
                a.0[[i, j - 1]]
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{Tensor1D, Tensor2D};
    use ndarray::array;

    #[test]
    fn test_ndarray_matvec_and_transpose() {
        let x = NdarrayTensor2D(array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
        let v = array![1.0, 0.0, 2.0];

        let x_t = NdarrayBackend::transpose(&x);
        assert_eq!(NdarrayBackend::shape(&x_t), (2, 3));
        assert_eq!(NdarrayBackend::matvec(&x_t, &v).to_vec(), vec![11.0, 14.0]);
    }

    #[test]
    fn test_ndarray_from_vec_2d_is_row_major() {
        let x = NdarrayBackend::from_vec_2d(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3);
        assert_eq!(x.0, array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);

        let checked = Tensor2D::<NdarrayBackend>::new(vec![1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
        assert_eq!(checked.dot(&Tensor1D::new(vec![1.0, 0.0])).to_vec(), vec![1.0, 3.0]);
    }

    #[test]
    #[should_panic(expected = "Inconsistent shape")]
    fn test_ndarray_from_vec_2d_panics_on_bad_length() {
        NdarrayBackend::from_vec_2d(vec![1.0; 3], 2, 2);
    }

    #[test]
    fn test_ndarray_prepend_ones_column() {
        let x = NdarrayTensor2D(array![[2.0], [3.0]]);
        let aug = NdarrayBackend::prepend_ones_column(&x);
        assert_eq!(aug.0, array![[1.0, 2.0], [1.0, 3.0]]);
    }

    #[test]
    fn test_ndarray_round_ties_even() {
        let r = NdarrayBackend::round_1d(&array![0.5, 1.5, 2.5, 0.51]);
        assert_eq!(r.to_vec(), vec![0.0, 2.0, 2.0, 1.0]);
    }

    #[test]
    fn test_ndarray_matches_cpu_layout() {
        let x = Tensor2D::<NdarrayBackend>::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let w = Tensor1D::<NdarrayBackend>::new(vec![1.0, 1.0, 1.0]);
        assert_eq!(x.with_intercept().dot(&w).to_vec(), vec![4.0, 8.0]);
    }
}
