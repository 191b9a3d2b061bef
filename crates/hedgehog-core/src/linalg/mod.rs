//! Dense matrix decompositions.
//!
//! All routines are implemented from scratch and operate on [`Matrix`].
//! Each decomposition borrows its input and owns freshly allocated factors.
//!
//! | Function | Type | Factorization |
//! |----------|------|---------------|
//! | [`cholesky`] | [`CholeskyDecomposition`] | `A = L L^T` |
//! | [`lu`] | [`LuDecomposition`] | `PA = LU` |
//! | [`qr`] | [`QrDecomposition`] | `A = QR` |

pub mod config;
pub mod decomp;

pub use config::{DecompConfig, QrMode};
pub use decomp::{CholeskyDecomposition, LuDecomposition, QrDecomposition};

use crate::error::Result;
use crate::matrix::Matrix;

/// Cholesky decomposition of a symmetric positive-definite matrix.
///
/// ```
/// # use hedgehog_core::Matrix;
/// # use hedgehog_core::linalg;
/// let a = Matrix::from_rows(&[
///     &[4.0, 12.0, -16.0],
///     &[12.0, 37.0, -43.0],
///     &[-16.0, -43.0, 98.0],
/// ]).unwrap();
/// let l = linalg::cholesky(&a).unwrap().into_l();
/// assert_eq!(l.row(2), &[-8.0, 5.0, 3.0]);
/// ```
pub fn cholesky(a: &Matrix) -> Result<CholeskyDecomposition> {
    CholeskyDecomposition::decompose(a)
}

/// LU decomposition with partial pivoting, `PA = LU`.
pub fn lu(a: &Matrix) -> Result<LuDecomposition> {
    LuDecomposition::decompose(a)
}

/// QR decomposition via Householder reflections, `A = QR`.
pub fn qr(a: &Matrix) -> Result<QrDecomposition> {
    QrDecomposition::decompose(a)
}

/// Solve the linear system `AX = B` for a square matrix `A`.
///
/// Uses LU decomposition with partial pivoting internally.
///
/// ```
/// # use hedgehog_core::Matrix;
/// # use hedgehog_core::linalg;
/// let a = Matrix::from_rows(&[&[2.0, 1.0], &[1.0, 4.0]]).unwrap();
/// let b = Matrix::from_vec(2, 1, vec![5.0, 6.0]).unwrap();
/// let x = linalg::solve(&a, &b).unwrap();
/// assert!((x[(0, 0)] - 2.0).abs() < 1e-10);
/// assert!((x[(1, 0)] - 1.0).abs() < 1e-10);
/// ```
pub fn solve(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    LuDecomposition::decompose(a)?.solve(b)
}

/// Compute the determinant of a square matrix.
///
/// Uses LU decomposition; a singular matrix has determinant `0.0`.
///
/// ```
/// # use hedgehog_core::Matrix;
/// # use hedgehog_core::linalg;
/// let a = Matrix::from_rows(&[&[2.0, 1.0], &[1.0, 4.0]]).unwrap();
/// let det = linalg::det(&a).unwrap();
/// assert!((det - 7.0).abs() < 1e-10);
/// ```
pub fn det(a: &Matrix) -> Result<f64> {
    let config = DecompConfig::default().with_allow_singular(true);
    LuDecomposition::decompose_with(a, &config)?.det()
}

/// Solve the least-squares problem `min ||AX - B||_2` via QR decomposition.
///
/// For square full-rank systems this is equivalent to [`solve`]. For
/// overdetermined systems (`m > n`), returns the least-squares solution.
///
/// ```
/// # use hedgehog_core::Matrix;
/// # use hedgehog_core::linalg;
/// // Overdetermined system: 3 equations, 2 unknowns
/// let a = Matrix::from_rows(&[&[1.0, 1.0], &[1.0, 2.0], &[1.0, 3.0]]).unwrap();
/// let b = Matrix::from_vec(3, 1, vec![6.0, 5.0, 7.0]).unwrap();
/// let x = linalg::lstsq(&a, &b).unwrap();
/// assert_eq!(x.shape(), (2, 1));
/// ```
pub fn lstsq(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    QrDecomposition::decompose(a)?.solve(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DecompError;

    #[test]
    fn test_det_singular_is_zero() {
        let a = Matrix::from_rows(&[&[1.0, 2.0], &[2.0, 4.0]]).unwrap();
        assert!(det(&a).unwrap().abs() < 1e-12);
    }

    #[test]
    fn test_det_not_square() {
        let a = Matrix::zeros(2, 3);
        assert!(matches!(det(&a), Err(DecompError::Dimension { .. })));
    }

    #[test]
    fn test_det_and_solve_agree_on_small_pivot() {
        let a = Matrix::from_rows(&[&[1.0, 0.0], &[0.0, 1e-13]]).unwrap();
        let b = Matrix::from_vec(2, 1, vec![2.0, 1e-13]).unwrap();
        assert!(det(&a).unwrap() > 0.0);
        let x = solve(&a, &b).unwrap();
        assert!((x[(0, 0)] - 2.0).abs() < 1e-12);
        assert!((x[(1, 0)] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_solve_singular() {
        let a = Matrix::from_rows(&[&[1.0, 2.0], &[2.0, 4.0]]).unwrap();
        let b = Matrix::from_vec(2, 1, vec![1.0, 1.0]).unwrap();
        assert!(matches!(
            solve(&a, &b),
            Err(DecompError::SingularMatrix { .. })
        ));
    }

    #[test]
    fn test_lstsq_4x3_numpy() {
        // >>> A = np.array([[1,1,1],[1,2,4],[1,3,9],[1,4,16]], dtype=float)
        // >>> b = np.array([2,3,5,8], dtype=float)
        // Normal equations solution: x = [2.0, -0.5, 0.5]
        let a = Matrix::from_rows(&[
            &[1.0, 1.0, 1.0],
            &[1.0, 2.0, 4.0],
            &[1.0, 3.0, 9.0],
            &[1.0, 4.0, 16.0],
        ])
        .unwrap();
        let b = Matrix::from_vec(4, 1, vec![2.0, 3.0, 5.0, 8.0]).unwrap();
        let x = lstsq(&a, &b).unwrap();
        let expected = [2.0, -0.5, 0.5];
        for (i, e) in expected.iter().enumerate() {
            assert!((x[(i, 0)] - e).abs() < 1e-10);
        }
    }
}
