//! Matrix products.

use crate::error::{DecompError, Result};

use super::Matrix;

impl Matrix {
    /// Matrix-matrix multiply: returns `self * other` as a new matrix.
    ///
    /// `self` must be `m x k` and `other` must be `k x n`.
    ///
    /// ```
    /// # use hedgehog_core::Matrix;
    /// let a = Matrix::from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]).unwrap();
    /// let b = Matrix::from_rows(&[&[5.0, 6.0], &[7.0, 8.0]]).unwrap();
    /// let c = a.matmul(&b).unwrap();
    /// assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
    /// ```
    #[allow(clippy::many_single_char_names)]
    pub fn matmul(&self, other: &Matrix) -> Result<Matrix> {
        let (m, k) = self.shape();
        let n = other.cols;
        if other.rows != k {
            return Err(DecompError::DimensionMismatch {
                expected: (k, n),
                got: other.shape(),
            });
        }

        let a = &self.data;
        let b = &other.data;
        let mut c = vec![0.0; m * n];

        // ikj loop order keeps both B and C accesses sequential
        for i in 0..m {
            for p in 0..k {
                let aip = a[i * k + p];
                let b_row = &b[p * n..(p + 1) * n];
                let c_row = &mut c[i * n..(i + 1) * n];
                for (cij, &bpj) in c_row.iter_mut().zip(b_row) {
                    *cij += aip * bpj;
                }
            }
        }

        Ok(Matrix {
            data: c,
            rows: m,
            cols: n,
        })
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_matmul_rectangular() {
        // (2x3) * (3x2)
        let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let b = Matrix::from_vec(3, 2, vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0]).unwrap();
        let c = a.matmul(&b).unwrap();
        assert_eq!(c.shape(), (2, 2));
        assert_eq!(c.as_slice(), &[58.0, 64.0, 139.0, 154.0]);
    }

    #[test]
    fn test_matmul_identity() {
        let a = Matrix::from_rows(&[&[1.0, -2.0], &[0.5, 4.0]]).unwrap();
        let eye = Matrix::identity(2);
        assert_eq!(a.matmul(&eye).unwrap(), a);
        assert_eq!(eye.matmul(&a).unwrap(), a);
    }

    #[test]
    fn test_matmul_dimension_mismatch() {
        let a = Matrix::zeros(2, 3);
        let b = Matrix::zeros(2, 3);
        assert_eq!(
            a.matmul(&b).unwrap_err(),
            DecompError::DimensionMismatch {
                expected: (3, 3),
                got: (2, 3)
            }
        );
    }

    #[test]
    fn test_matmul_nan_propagates() {
        let a = Matrix::from_rows(&[&[0.0, 1.0]]).unwrap();
        let b = Matrix::from_rows(&[&[f64::NAN], &[1.0]]).unwrap();
        assert!(a.matmul(&b).unwrap()[(0, 0)].is_nan());
    }
}
