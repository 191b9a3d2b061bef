//! QR decomposition via Householder reflections.
//!
//! Decomposes an `m x n` matrix `A` (any shape) into `A = QR` where:
//! - `Q` is an orthogonal matrix (`m x m`) such that `Q^T Q = I`
//! - `R` is upper triangular (`m x n`)
//!
//! The reduced form (`Q` is `m x k`, `R` is `k x n`, `k = min(m, n)`) is
//! available through [`QrDecomposition::q_thin`] / [`QrDecomposition::r_thin`].

use crate::error::{DecompError, Result};
use crate::linalg::config::{DecompConfig, QrMode};
use crate::matrix::Matrix;

use super::{check_factor_finite, check_rhs};

/// Result of a QR decomposition via Householder reflections.
///
/// Stores the factorization `A = QR` in compact form: the Householder
/// vectors are stored on and below the diagonal of the working matrix,
/// and the strictly upper part of `R` above it.
#[derive(Debug, Clone)]
pub struct QrDecomposition {
    /// Working matrix (`m x n`, row-major). Column `c` on and below the
    /// diagonal holds Householder vector `c`; a zero at `(c, c)` marks a
    /// skipped (identity) reflection.
    qr: Vec<f64>,
    /// Diagonal of R stored separately (the Householder vectors overwrite
    /// the diagonal of the working matrix).
    r_diag: Vec<f64>,
    m: usize,
    n: usize,
    mode: QrMode,
    /// Diagonal entries of R at or below this magnitude count as zero.
    threshold: f64,
}

#[allow(clippy::many_single_char_names)]
impl QrDecomposition {
    /// Perform QR decomposition using the default [`DecompConfig`].
    ///
    /// ```
    /// # use hedgehog_core::Matrix;
    /// # use hedgehog_core::linalg::QrDecomposition;
    /// let a = Matrix::from_rows(&[&[1.0, 2.0], &[3.0, 4.0], &[5.0, 6.0]]).unwrap();
    /// let qr = QrDecomposition::decompose(&a).unwrap();
    /// let q = qr.q();
    /// // Verify Q is orthogonal: Q^T Q ≈ I
    /// let qtq = q.transpose().matmul(&q).unwrap();
    /// let eye = Matrix::identity(3);
    /// for (x, y) in qtq.as_slice().iter().zip(eye.as_slice()) {
    ///     assert!((x - y).abs() < 1e-10);
    /// }
    /// ```
    pub fn decompose(a: &Matrix) -> Result<Self> {
        Self::decompose_with(a, &DecompConfig::default())
    }

    /// Perform QR decomposition on an `m x n` matrix.
    ///
    /// Never fails on rank-deficient input: a column that is already zero
    /// on and below the diagonal gets an identity reflection, and rank
    /// deficiency shows up as (near-)zero diagonal entries of `R`, judged
    /// against `config.rank_tolerance`. A reflection that overflows yields
    /// [`DecompError::NonFinite`].
    pub fn decompose_with(a: &Matrix, config: &DecompConfig) -> Result<Self> {
        let (m, n) = a.shape();
        if a.is_empty() {
            log::debug!("qr: rejecting empty {m}x{n} input");
            return Err(DecompError::Dimension {
                rows: m,
                cols: n,
                reason: "QR decomposition requires a non-empty matrix",
            });
        }
        a.check_finite()?;

        let k = m.min(n);
        let mut qr: Vec<f64> = a.as_slice().to_vec();
        let mut r_diag = vec![0.0; k];

        for c in 0..k {
            // Norm of the c-th column on and below the diagonal
            let mut norm = (c..m).fold(0.0_f64, |acc, i| acc.hypot(qr[i * n + c]));

            if norm == 0.0 {
                log::trace!("qr: column {c} is already reduced, skipping reflection");
                continue;
            }

            // Choose sign to avoid cancellation
            if qr[c * n + c] > 0.0 {
                norm = -norm;
            }

            // Scale the Householder vector
            for i in c..m {
                qr[i * n + c] /= -norm;
            }
            qr[c * n + c] += 1.0;

            // Apply the Householder reflection to remaining columns
            for j in (c + 1)..n {
                let mut s = 0.0;
                for i in c..m {
                    s += qr[i * n + c] * qr[i * n + j];
                }
                s = -s / qr[c * n + c];
                for i in c..m {
                    let v = qr[i * n + c];
                    qr[i * n + j] += s * v;
                }
            }

            r_diag[c] = norm;
        }

        let finite = match r_diag.iter().position(|d| !d.is_finite()) {
            Some(c) => Err(DecompError::NonFinite { row: c, col: c }),
            None => check_factor_finite(&qr, n),
        };
        if let Err(err) = finite {
            log::debug!("qr: reflection overflowed ({err})");
            return Err(err);
        }

        Ok(Self {
            qr,
            r_diag,
            m,
            n,
            mode: config.qr_mode,
            threshold: config.rank_threshold(a.max_abs()),
        })
    }

    /// `(rows, cols)` of the decomposed matrix.
    pub fn shape(&self) -> (usize, usize) {
        (self.m, self.n)
    }

    /// Whether every diagonal entry of `R` is above the rank threshold,
    /// i.e. `A` has rank `min(m, n)`.
    pub fn is_full_rank(&self) -> bool {
        self.r_diag.iter().all(|d| d.abs() > self.threshold)
    }

    /// Extract the upper triangular matrix `R` (`m x n`).
    pub fn r(&self) -> Matrix {
        self.r_rows(self.m)
    }

    /// Extract the reduced upper triangular matrix `R` (`k x n`).
    pub fn r_thin(&self) -> Matrix {
        self.r_rows(self.m.min(self.n))
    }

    fn r_rows(&self, rows: usize) -> Matrix {
        let n = self.n;
        let mut r = Matrix::zeros(rows, n);
        for (i, &d) in self.r_diag.iter().enumerate() {
            r[(i, i)] = d;
            for j in (i + 1)..n {
                r[(i, j)] = self.qr[i * n + j];
            }
        }
        r
    }

    /// Extract the orthogonal matrix `Q` (`m x m`).
    pub fn q(&self) -> Matrix {
        self.q_cols(self.m)
    }

    /// Extract the "thin" Q matrix (`m x k`): only the first `k` columns.
    pub fn q_thin(&self) -> Matrix {
        self.q_cols(self.m.min(self.n))
    }

    fn q_cols(&self, cols: usize) -> Matrix {
        let (m, n) = (self.m, self.n);
        let mut q = Matrix::zeros(m, cols);
        for i in 0..cols {
            q[(i, i)] = 1.0;
        }

        // Apply Householder reflections in reverse order
        for c in (0..self.r_diag.len()).rev() {
            let vc = self.qr[c * n + c];
            if vc == 0.0 {
                continue;
            }
            // Apply H_c = I - v*v^T/v[c] to Q
            for j in 0..cols {
                let mut s = 0.0;
                for i in c..m {
                    s += self.qr[i * n + c] * q[(i, j)];
                }
                s = -s / vc;
                for i in c..m {
                    q[(i, j)] += s * self.qr[i * n + c];
                }
            }
        }

        q
    }

    /// `Q` in the shape selected by [`DecompConfig::qr_mode`].
    pub fn q_mode(&self) -> Matrix {
        match self.mode {
            QrMode::Full => self.q(),
            QrMode::Reduced => self.q_thin(),
        }
    }

    /// `R` in the shape selected by [`DecompConfig::qr_mode`].
    pub fn r_mode(&self) -> Matrix {
        match self.mode {
            QrMode::Full => self.r(),
            QrMode::Reduced => self.r_thin(),
        }
    }

    /// Solve the least-squares problem `min ||AX - B||_2`.
    ///
    /// For a full-rank system where `m == n`, this is equivalent to solving
    /// `AX = B`. For overdetermined systems (`m > n`), it returns the
    /// least-squares solution. `B` must have `m` rows; the result is
    /// `n x B.cols()`.
    pub fn solve(&self, b: &Matrix) -> Result<Matrix> {
        let (m, n) = (self.m, self.n);
        if m < n {
            return Err(DecompError::Dimension {
                rows: m,
                cols: n,
                reason: "QR solve requires m >= n (tall or square matrix)",
            });
        }
        if let Some(column) = self.r_diag.iter().position(|d| d.abs() <= self.threshold) {
            log::debug!("qr: solve on rank-deficient matrix (column {column})");
            return Err(DecompError::SingularMatrix { column });
        }
        check_rhs(m, b)?;

        let mut x = Matrix::zeros(n, b.cols());
        let mut y = vec![0.0; m];
        for col in 0..b.cols() {
            for (i, yi) in y.iter_mut().enumerate() {
                *yi = b[(i, col)];
            }

            // Compute Q^T b by applying Householder reflections
            for c in 0..n {
                let vc = self.qr[c * n + c];
                if vc == 0.0 {
                    continue;
                }
                let mut s = 0.0;
                for i in c..m {
                    s += self.qr[i * n + c] * y[i];
                }
                s = -s / vc;
                for i in c..m {
                    y[i] += s * self.qr[i * n + c];
                }
            }

            // Back substitution on the upper triangular part: Rx = Q^T b
            for i in (0..n).rev() {
                let mut v = y[i];
                for j in (i + 1)..n {
                    v -= self.qr[i * n + j] * x[(j, col)];
                }
                x[(i, col)] = v / self.r_diag[i];
            }
        }

        Ok(x)
    }
}
