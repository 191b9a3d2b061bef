//! Cholesky decomposition for symmetric positive-definite matrices.
//!
//! Decomposes a symmetric positive-definite matrix `A` into `A = L L^T`
//! where `L` is lower triangular, using the row-by-row
//! Cholesky–Banachiewicz ordering.

use crate::error::{DecompError, Result};
use crate::matrix::Matrix;

use super::check_rhs;

/// Result of a Cholesky decomposition.
///
/// Owns the lower triangular factor `L` of `A = L L^T`.
#[derive(Debug, Clone)]
pub struct CholeskyDecomposition {
    l: Matrix,
}

impl CholeskyDecomposition {
    /// Compute the Cholesky decomposition of a symmetric positive-definite
    /// matrix.
    ///
    /// Fails with [`DecompError::Dimension`] for non-square or empty input,
    /// [`DecompError::NotHermitian`] if `A` is not exactly equal to its
    /// transpose, and [`DecompError::NotPositiveDefinite`] if elimination
    /// takes the square root of a negative number or divides by a zero
    /// pivot.
    ///
    /// ```
    /// # use hedgehog_core::Matrix;
    /// # use hedgehog_core::linalg::CholeskyDecomposition;
    /// let a = Matrix::from_rows(&[&[4.0, 2.0], &[2.0, 3.0]]).unwrap();
    /// let chol = CholeskyDecomposition::decompose(&a).unwrap();
    /// let l = chol.l();
    /// // Verify L L^T = A
    /// let prod = l.matmul(&l.transpose()).unwrap();
    /// assert!((prod[(0, 0)] - 4.0).abs() < 1e-10);
    /// ```
    #[allow(clippy::many_single_char_names)]
    pub fn decompose(a: &Matrix) -> Result<Self> {
        let (rows, cols) = a.shape();
        if rows != cols || rows == 0 {
            log::debug!("cholesky: rejecting {rows}x{cols} input");
            return Err(DecompError::Dimension {
                rows,
                cols,
                reason: "Cholesky decomposition requires a non-empty square matrix",
            });
        }

        if *a != a.transpose() {
            log::debug!("cholesky: input is not symmetric");
            return Err(DecompError::NotHermitian);
        }

        let n = rows;
        let mut l = Matrix::zeros(n, n);

        for i in 0..n {
            for k in 0..=i {
                let mut sum = 0.0;
                for j in 0..k {
                    sum += l[(i, j)] * l[(k, j)];
                }

                let value = if i == k {
                    (a[(i, i)] - sum).sqrt()
                } else {
                    let pivot = l[(k, k)];
                    if pivot == 0.0 {
                        log::debug!("cholesky: zero pivot at row {k}");
                        return Err(DecompError::NotPositiveDefinite { index: k });
                    }
                    (a[(i, k)] - sum) / pivot
                };

                if value.is_nan() {
                    log::debug!("cholesky: elimination produced NaN at ({i}, {k})");
                    return Err(DecompError::NotPositiveDefinite { index: i });
                }
                l[(i, k)] = value;
            }
        }

        Ok(Self { l })
    }

    /// The lower triangular factor `L`.
    pub fn l(&self) -> &Matrix {
        &self.l
    }

    /// Consume the decomposition, returning `L`.
    pub fn into_l(self) -> Matrix {
        self.l
    }

    /// Dimension `n` of the decomposed `n x n` matrix.
    pub fn dim(&self) -> usize {
        self.l.rows()
    }

    /// Solve `A X = B` using the factorization.
    ///
    /// Since `A = L L^T`, solves `L Y = B` (forward) then `L^T X = Y`
    /// (backward) for each column of `B`, which must have `n` rows.
    ///
    /// A positive semi-definite `A` can factor with a zero on the diagonal
    /// of `L`; solving against it yields [`DecompError::SingularMatrix`].
    pub fn solve(&self, b: &Matrix) -> Result<Matrix> {
        let n = self.dim();
        check_rhs(n, b)?;

        let l = &self.l;
        if let Some(column) = (0..n).find(|&i| l[(i, i)] == 0.0) {
            log::debug!("cholesky: solve against zero diagonal at {column}");
            return Err(DecompError::SingularMatrix { column });
        }
        let mut x = b.clone();

        for c in 0..x.cols() {
            // Forward substitution: L y = b
            for i in 0..n {
                let mut v = x[(i, c)];
                for j in 0..i {
                    v -= l[(i, j)] * x[(j, c)];
                }
                x[(i, c)] = v / l[(i, i)];
            }

            // Back substitution: L^T x = y
            for i in (0..n).rev() {
                let mut v = x[(i, c)];
                for j in (i + 1)..n {
                    v -= l[(j, i)] * x[(j, c)];
                }
                x[(i, c)] = v / l[(i, i)];
            }
        }

        Ok(x)
    }

    /// Compute the log-determinant (useful for avoiding overflow).
    ///
    /// `log(det(A)) = 2 * sum(log(diag(L)))`
    pub fn log_det(&self) -> f64 {
        let sum: f64 = (0..self.dim()).map(|i| self.l[(i, i)].ln()).sum();
        sum + sum
    }
}
