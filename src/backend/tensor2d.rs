use super::tensor1d::Tensor1D;
use crate::backend::Backend;
use crate::error::{LogitError, Result};
use std::marker::PhantomData;

/// Backend-typed 2D tensor, used for design matrices.
///
/// Rows are examples, columns are features. Construction validates that the
/// data is rectangular; once built, the shape is fixed.
#[derive(Clone)]
pub struct Tensor2D<B: Backend> {
    pub(crate) data: B::Tensor2D,
    pub(crate) backend: PhantomData<B>,
}

impl<B: Backend> Tensor2D<B> {
    pub(crate) fn from_raw(data: B::Tensor2D) -> Self {
        Self {
            data,
            backend: PhantomData,
        }
    }

    /// Builds a matrix from row-major data.
    ///
    /// # Errors
    /// [`LogitError::ShapeMismatch`] if `data.len() != rows * cols`, or if
    /// `rows * cols` overflows `usize`.
    ///
    /// # Example
    /// ```
    /// use gradlogit::backend::{CpuBackend, Tensor2D};
    ///
    /// let x = Tensor2D::<CpuBackend>::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3, 2).unwrap();
    /// assert_eq!(x.shape(), (3, 2));
    ///
    /// assert!(Tensor2D::<CpuBackend>::new(vec![1.0, 2.0, 3.0], 2, 2).is_err());
    /// ```
    pub fn new(data: Vec<f64>, rows: usize, cols: usize) -> Result<Self> {
        let Some(len) = rows.checked_mul(cols) else {
            return Err(LogitError::ShapeMismatch {
                expected: format!("a {}x{} matrix addressable in memory", rows, cols),
                got: format!("{} values", data.len()),
            });
        };
        if data.len() != len {
            return Err(LogitError::ShapeMismatch {
                expected: format!("{} values for a {}x{} matrix", len, rows, cols),
                got: format!("{} values", data.len()),
            });
        }
        Ok(Self::from_raw(B::from_vec_2d(data, rows, cols)))
    }

    /// Builds a matrix from a slice of rows.
    ///
    /// An empty slice yields a `0 x 0` matrix.
    ///
    /// # Errors
    /// [`LogitError::RaggedRows`] if any row length differs from the first.
    ///
    /// # Example
    /// ```
    /// use gradlogit::backend::{CpuBackend, Tensor2D};
    /// use gradlogit::LogitError;
    ///
    /// let x = Tensor2D::<CpuBackend>::from_rows(&[vec![0.0, 1.0], vec![2.0, 3.0]]).unwrap();
    /// assert_eq!(x.shape(), (2, 2));
    ///
    /// let err = Tensor2D::<CpuBackend>::from_rows(&[vec![0.0, 1.0], vec![2.0]]).unwrap_err();
    /// assert_eq!(err, LogitError::RaggedRows { row: 1, expected: 2, got: 1 });
    /// ```
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some((row, bad)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(LogitError::RaggedRows {
                row,
                expected: cols,
                got: bad.len(),
            });
        }
        let data: Vec<f64> = rows.iter().flat_map(|r| r.iter()).copied().collect();
        Ok(Self::from_raw(B::from_vec_2d(data, rows.len(), cols)))
    }

    /// Matrix-vector product `self · other`.
    ///
    /// # Panics
    /// Panics if `self.ncols() != other.len()`.
    pub fn dot(&self, other: &Tensor1D<B>) -> Tensor1D<B> {
        Tensor1D::from_raw(B::matvec(&self.data, &other.data))
    }

    /// Returns the transposed matrix.
    ///
    /// # Example
    /// ```
    /// use gradlogit::backend::{CpuBackend, Tensor1D, Tensor2D};
    ///
    /// let x = Tensor2D::<CpuBackend>::from_rows(&[vec![1.0, 2.0, 3.0]]).unwrap();
    /// let xt = x.transpose();
    /// assert_eq!(xt.shape(), (3, 1));
    /// assert_eq!(xt.dot(&Tensor1D::new(vec![2.0])).to_vec(), vec![2.0, 4.0, 6.0]);
    /// ```
    pub fn transpose(&self) -> Self {
        Self::from_raw(B::transpose(&self.data))
    }

    /// Returns the augmented matrix: a constant `1.0` column prepended as
    /// column 0 for the intercept term.
    pub fn with_intercept(&self) -> Self {
        Self::from_raw(B::prepend_ones_column(&self.data))
    }

    /// Returns `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        B::shape(&self.data)
    }

    /// Number of rows (examples).
    pub fn nrows(&self) -> usize {
        self.shape().0
    }

    /// Number of columns (features).
    pub fn ncols(&self) -> usize {
        self.shape().1
    }
}

impl<B: Backend> std::fmt::Debug for Tensor2D<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (rows, cols) = self.shape();
        f.debug_struct("Tensor2D")
            .field("rows", &rows)
            .field("cols", &cols)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::CpuBackend;

    #[test]
    fn test_tensor2d_matvec() {
        // A = [[1.0, 2.0],
        //      [3.0, 4.0]]
        let a = Tensor2D::<CpuBackend>::new(vec![1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
        let x = Tensor1D::<CpuBackend>::new(vec![1.0, 0.0]);

        assert_eq!(a.dot(&x).to_vec(), vec![1.0, 3.0]);
        // A^T @ x = [1.0, 2.0]
        assert_eq!(a.transpose().dot(&x).to_vec(), vec![1.0, 2.0]);
    }

    #[test]
    fn test_tensor2d_with_intercept() {
        let x = Tensor2D::<CpuBackend>::from_rows(&[vec![2.0], vec![3.0]]).unwrap();
        let aug = x.with_intercept();
        assert_eq!(aug.shape(), (2, 2));

        // [[1, 2], [1, 3]] @ [10, 1] = [12, 13]
        let w = Tensor1D::<CpuBackend>::new(vec![10.0, 1.0]);
        assert_eq!(aug.dot(&w).to_vec(), vec![12.0, 13.0]);
    }

    #[test]
    fn test_tensor2d_with_intercept_no_features() {
        let x = Tensor2D::<CpuBackend>::new(vec![], 3, 0).unwrap();
        let aug = x.with_intercept();
        assert_eq!(aug.shape(), (3, 1));
        assert_eq!(aug.dot(&Tensor1D::new(vec![0.25])).to_vec(), vec![0.25; 3]);
    }

    #[test]
    fn test_tensor2d_shape() {
        let t = Tensor2D::<CpuBackend>::new(vec![1.0, 2.0, 3.0], 3, 1).unwrap();
        assert_eq!(t.shape(), (3, 1));
        assert_eq!(t.nrows(), 3);
        assert_eq!(t.ncols(), 1);

        let empty = Tensor2D::<CpuBackend>::from_rows(&[]).unwrap();
        assert_eq!(empty.shape(), (0, 0));
    }

    #[test]
    fn test_tensor2d_new_rejects_bad_length() {
        let err = Tensor2D::<CpuBackend>::new(vec![1.0; 5], 2, 3).unwrap_err();
        assert!(matches!(err, LogitError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_tensor2d_new_rejects_overflowing_shape() {
        let err = Tensor2D::<CpuBackend>::new(vec![], 1 << (usize::BITS - 1), 2).unwrap_err();
        assert!(matches!(err, LogitError::ShapeMismatch { .. }));

        let err = Tensor2D::<CpuBackend>::new(vec![1.0; 4], usize::MAX, usize::MAX).unwrap_err();
        assert_eq!(
            err,
            LogitError::ShapeMismatch {
                expected: format!("a {}x{} matrix addressable in memory", usize::MAX, usize::MAX),
                got: "4 values".into(),
            }
        );
    }

    #[test]
    fn test_tensor2d_from_rows_reports_first_ragged_row() {
        let rows = vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0], vec![]];
        let err = Tensor2D::<CpuBackend>::from_rows(&rows).unwrap_err();
        assert_eq!(
            err,
            LogitError::RaggedRows {
                row: 2,
                expected: 2,
                got: 1
            }
        );
    }
}
