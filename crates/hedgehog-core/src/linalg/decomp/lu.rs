//! LU decomposition with partial pivoting.
//!
//! Decomposes an `m x n` matrix `A` into `PA = LU` where, with
//! `k = min(m, n)`:
//! - `P` is an `m x m` permutation matrix (stored as a pivot vector)
//! - `L` is `m x k` lower triangular with unit diagonal
//! - `U` is `k x n` upper triangular

use crate::error::{DecompError, Result};
use crate::linalg::config::DecompConfig;
use crate::matrix::Matrix;

use super::{check_factor_finite, check_rhs};

/// Result of an LU decomposition with partial pivoting.
///
/// Stores the factorization `PA = LU` in compact form: `L` and `U` are
/// packed into a single matrix (the unit diagonal of `L` is implicit),
/// and the permutation is stored as a pivot index vector.
#[derive(Debug, Clone)]
pub struct LuDecomposition {
    /// Packed LU matrix (`m x n`, row-major): below the diagonal holds L,
    /// the diagonal and above holds U.
    lu: Vec<f64>,
    /// Row `i` of `PA` is row `pivots[i]` of `A`.
    pivots: Vec<usize>,
    m: usize,
    n: usize,
    /// Sign of the permutation (+1 or -1), for determinant computation.
    sign: f64,
    /// Pivots at or below this magnitude count as zero.
    threshold: f64,
}

impl LuDecomposition {
    /// Perform LU decomposition with partial pivoting using the default
    /// [`DecompConfig`].
    ///
    /// ```
    /// # use hedgehog_core::Matrix;
    /// # use hedgehog_core::linalg::LuDecomposition;
    /// let a = Matrix::from_rows(&[&[4.0, 3.0], &[6.0, 3.0]]).unwrap();
    /// let lu = LuDecomposition::decompose(&a).unwrap();
    /// // 6 > 4, so the rows are swapped
    /// assert_eq!(lu.pivots(), &[1, 0]);
    /// assert!((lu.det().unwrap() - (-6.0)).abs() < 1e-10);
    /// ```
    pub fn decompose(a: &Matrix) -> Result<Self> {
        Self::decompose_with(a, &DecompConfig::default())
    }

    /// Perform LU decomposition with partial pivoting.
    ///
    /// In each column the remaining row with the largest magnitude becomes
    /// the pivot. A pivot no larger than `config.pivot_tolerance * max|A|`
    /// (by default: an exactly zero pivot) yields
    /// [`DecompError::SingularMatrix`], unless `config.allow_singular` is
    /// set, in which case the column is left uneliminated (zero
    /// multipliers) and `U` carries the pivot. Elimination that overflows
    /// yields [`DecompError::NonFinite`] at the offending packed entry.
    pub fn decompose_with(a: &Matrix, config: &DecompConfig) -> Result<Self> {
        let (m, n) = a.shape();
        if a.is_empty() {
            log::debug!("lu: rejecting empty {m}x{n} input");
            return Err(DecompError::Dimension {
                rows: m,
                cols: n,
                reason: "LU decomposition requires a non-empty matrix",
            });
        }
        a.check_finite()?;

        let threshold = config.pivot_threshold(a.max_abs());
        let mut lu: Vec<f64> = a.as_slice().to_vec();
        let mut pivots: Vec<usize> = (0..m).collect();
        let mut sign = 1.0;

        for k in 0..m.min(n) {
            // Find pivot: row with largest |lu[i, k]| for i >= k
            let mut max_val = lu[k * n + k].abs();
            let mut max_row = k;
            for i in (k + 1)..m {
                let val = lu[i * n + k].abs();
                if val > max_val {
                    max_val = val;
                    max_row = i;
                }
            }

            if max_row != k {
                log::trace!("lu: column {k}: swapping rows {k} and {max_row}");
                for j in 0..n {
                    lu.swap(k * n + j, max_row * n + j);
                }
                pivots.swap(k, max_row);
                sign = -sign;
            }

            let pivot = lu[k * n + k];
            if pivot.abs() <= threshold {
                if !config.allow_singular {
                    log::debug!("lu: no usable pivot in column {k} (|{pivot}| <= {threshold})");
                    return Err(DecompError::SingularMatrix { column: k });
                }
                log::trace!("lu: skipping singular column {k}");
                for i in (k + 1)..m {
                    lu[i * n + k] = 0.0;
                }
                continue;
            }

            // Eliminate below the pivot
            for i in (k + 1)..m {
                let factor = lu[i * n + k] / pivot;
                lu[i * n + k] = factor; // Store L factor

                for j in (k + 1)..n {
                    let ukj = lu[k * n + j];
                    lu[i * n + j] -= factor * ukj;
                }
            }
        }

        if let Err(err) = check_factor_finite(&lu, n) {
            log::debug!("lu: elimination overflowed ({err})");
            return Err(err);
        }

        Ok(Self {
            lu,
            pivots,
            m,
            n,
            sign,
            threshold,
        })
    }

    /// `(rows, cols)` of the decomposed matrix.
    pub fn shape(&self) -> (usize, usize) {
        (self.m, self.n)
    }

    /// Extract the `m x k` lower triangular matrix `L` (with unit diagonal).
    pub fn l(&self) -> Matrix {
        let (m, n) = (self.m, self.n);
        let k = m.min(n);
        let mut l = Matrix::zeros(m, k);
        for i in 0..m {
            for j in 0..i.min(k) {
                l[(i, j)] = self.lu[i * n + j];
            }
            if i < k {
                l[(i, i)] = 1.0; // Unit diagonal
            }
        }
        l
    }

    /// Extract the `k x n` upper triangular matrix `U`.
    pub fn u(&self) -> Matrix {
        let (m, n) = (self.m, self.n);
        let k = m.min(n);
        let mut u = Matrix::zeros(k, n);
        for i in 0..k {
            for j in i..n {
                u[(i, j)] = self.lu[i * n + j];
            }
        }
        u
    }

    /// Extract the `m x m` permutation matrix `P`.
    pub fn p(&self) -> Matrix {
        let m = self.m;
        let mut p = Matrix::zeros(m, m);
        for (i, &pi) in self.pivots.iter().enumerate() {
            p[(i, pi)] = 1.0;
        }
        p
    }

    /// The permutation pivot vector.
    pub fn pivots(&self) -> &[usize] {
        &self.pivots
    }

    fn require_square(&self) -> Result<()> {
        if self.m != self.n {
            return Err(DecompError::Dimension {
                rows: self.m,
                cols: self.n,
                reason: "operation requires a square matrix",
            });
        }
        Ok(())
    }

    /// Compute the determinant from the LU factorization.
    ///
    /// `det(A) = sign * product(diag(U))`
    ///
    /// Returns [`DecompError::Dimension`] if the decomposed matrix was not
    /// square.
    pub fn det(&self) -> Result<f64> {
        self.require_square()?;
        let n = self.n;
        Ok((0..n).fold(self.sign, |d, i| d * self.lu[i * n + i]))
    }

    /// Solve `A X = B` using the precomputed factorization.
    ///
    /// `A` must be square and `B` must have `n` rows; each column of `B` is
    /// solved independently. A pivot at or below the configured tolerance
    /// (only possible with `allow_singular`) yields
    /// [`DecompError::SingularMatrix`].
    pub fn solve(&self, b: &Matrix) -> Result<Matrix> {
        self.require_square()?;
        let n = self.n;
        check_rhs(n, b)?;

        if let Some(column) = (0..n).find(|&i| self.lu[i * n + i].abs() <= self.threshold) {
            return Err(DecompError::SingularMatrix { column });
        }

        let mut x = Matrix::zeros(n, b.cols());
        for c in 0..b.cols() {
            // Apply permutation: Pb
            for (i, &pi) in self.pivots.iter().enumerate() {
                x[(i, c)] = b[(pi, c)];
            }

            // Forward substitution: Ly = Pb
            for i in 1..n {
                let mut v = x[(i, c)];
                for j in 0..i {
                    v -= self.lu[i * n + j] * x[(j, c)];
                }
                x[(i, c)] = v;
            }

            // Back substitution: Ux = y
            for i in (0..n).rev() {
                let mut v = x[(i, c)];
                for j in (i + 1)..n {
                    v -= self.lu[i * n + j] * x[(j, c)];
                }
                x[(i, c)] = v / self.lu[i * n + i];
            }
        }

        Ok(x)
    }
}
