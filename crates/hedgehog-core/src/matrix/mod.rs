//! Dense row-major matrix of `f64` values.
//!
//! [`Matrix`] is the value type every decomposition consumes and produces.
//! It owns its data; cloning performs a deep copy. Decompositions only ever
//! read from their input and hand back freshly allocated factors.

mod approx_eq;
mod display;
mod ops;

use crate::error::{DecompError, Result};

/// A dense `rows x cols` matrix of `f64` stored contiguously in row-major
/// order.
#[derive(Debug, Clone)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Create a matrix from flat row-major data.
    ///
    /// Returns an error if `data.len() != rows * cols`.
    ///
    /// ```
    /// # use hedgehog_core::Matrix;
    /// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// assert_eq!(m[(1, 0)], 4.0);
    /// ```
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if rows * cols != data.len() {
            return Err(DecompError::InvalidShape {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Create a matrix from a slice of rows. All rows must have the same
    /// length.
    ///
    /// ```
    /// # use hedgehog_core::Matrix;
    /// let m = Matrix::from_rows(&[&[4.0, 3.0], &[6.0, 3.0]]).unwrap();
    /// assert_eq!(m.rows(), 2);
    /// assert_eq!(m.cols(), 2);
    /// ```
    pub fn from_rows(rows: &[&[f64]]) -> Result<Self> {
        let cols = rows.first().map_or(0, |r| r.len());
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            if row.len() != cols {
                return Err(DecompError::InvalidShape {
                    rows: rows.len(),
                    cols,
                    len: data.len() + row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            rows: rows.len(),
            cols,
        })
    }

    /// Create a `rows x cols` matrix filled with zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Create an `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        m
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Whether the matrix has zero elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// All elements in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Consume the matrix and return the underlying row-major `Vec<f64>`.
    ///
    /// ```
    /// # use hedgehog_core::Matrix;
    /// let m = Matrix::from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]).unwrap();
    /// assert_eq!(m.transpose().into_vec(), vec![1.0, 3.0, 2.0, 4.0]);
    /// ```
    #[inline]
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Row `i` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.rows()`.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    fn check_index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(DecompError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    /// Checked element read.
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        let flat = self.check_index(row, col)?;
        Ok(self.data[flat])
    }

    /// Checked element write.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        let flat = self.check_index(row, col)?;
        self.data[flat] = value;
        Ok(())
    }

    /// Return the transpose as a new matrix.
    pub fn transpose(&self) -> Self {
        let (rows, cols) = (self.rows, self.cols);
        let mut data = vec![0.0; self.data.len()];
        for r in 0..rows {
            for c in 0..cols {
                data[c * rows + r] = self.data[r * cols + c];
            }
        }
        Self {
            data,
            rows: cols,
            cols: rows,
        }
    }

    /// Fail with [`DecompError::NonFinite`] at the first `NaN` or infinite
    /// element.
    pub(crate) fn check_finite(&self) -> Result<()> {
        match self.data.iter().position(|x| !x.is_finite()) {
            Some(flat) => Err(DecompError::NonFinite {
                row: flat / self.cols,
                col: flat % self.cols,
            }),
            None => Ok(()),
        }
    }

    /// Largest absolute value of any element, or `0.0` for an empty matrix.
    pub(crate) fn max_abs(&self) -> f64 {
        self.data.iter().fold(0.0_f64, |acc, &x| acc.max(x.abs()))
    }
}

/// Exact element-wise equality. `NaN` never compares equal.
impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.data == other.data
    }
}

impl core::ops::Index<(usize, usize)> for Matrix {
    type Output = f64;

    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl core::ops::IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &mut self.data[row * self.cols + col]
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vec() {
        let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
        assert!(!m.is_square());
        assert_eq!(m.into_vec(), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_from_vec_shape_mismatch() {
        let r = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0]);
        assert_eq!(
            r.unwrap_err(),
            DecompError::InvalidShape {
                rows: 2,
                cols: 3,
                len: 3
            }
        );
    }

    #[test]
    fn test_from_rows_ragged() {
        assert!(Matrix::from_rows(&[&[1.0, 2.0], &[3.0]]).is_err());
    }

    #[test]
    fn test_from_rows_empty() {
        let m = Matrix::from_rows(&[]).unwrap();
        assert_eq!(m.shape(), (0, 0));
        assert!(m.is_empty());
    }

    #[test]
    fn test_zeros_and_identity() {
        let z = Matrix::zeros(2, 3);
        assert!(z.as_slice().iter().all(|&x| x == 0.0));
        let eye = Matrix::identity(3);
        assert_eq!(eye[(0, 0)], 1.0);
        assert_eq!(eye[(0, 1)], 0.0);
        assert_eq!(eye[(2, 2)], 1.0);
    }

    #[test]
    fn test_get_set() {
        let mut m = Matrix::zeros(2, 2);
        m.set(0, 1, 99.0).unwrap();
        assert_eq!(m.get(0, 1).unwrap(), 99.0);
        assert!(m.get(2, 0).is_err());
        assert!(m.set(0, 2, 1.0).is_err());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_out_of_bounds_panics() {
        let m = Matrix::zeros(2, 2);
        let _ = m[(0, 2)];
    }

    #[test]
    fn test_transpose() {
        let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let t = m.transpose();
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t.as_slice(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn test_partial_eq_exact() {
        let a = Matrix::from_rows(&[&[1.0, 2.0], &[2.0, 1.0]]).unwrap();
        let b = a.clone();
        let c = Matrix::from_rows(&[&[1.0, 2.0], &[2.0, 1.0 + 1e-15]]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        // same data, different shape
        let d = Matrix::from_vec(1, 4, vec![1.0, 2.0, 2.0, 1.0]).unwrap();
        assert_ne!(a, d);
    }

    #[test]
    fn test_nan_never_equal() {
        let a = Matrix::from_vec(1, 1, vec![f64::NAN]).unwrap();
        assert_ne!(a, a.clone());
    }

    #[test]
    fn test_check_finite() {
        let mut m = Matrix::zeros(2, 3);
        assert!(m.check_finite().is_ok());
        m[(1, 2)] = f64::INFINITY;
        assert_eq!(
            m.check_finite().unwrap_err(),
            DecompError::NonFinite { row: 1, col: 2 }
        );
    }

    #[test]
    fn test_max_abs() {
        let m = Matrix::from_rows(&[&[1.0, -7.0], &[3.0, 2.0]]).unwrap();
        assert_eq!(m.max_abs(), 7.0);
        assert_eq!(Matrix::zeros(0, 0).max_abs(), 0.0);
    }
}
