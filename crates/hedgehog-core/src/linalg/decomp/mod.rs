//! Matrix decompositions.
//!
//! | Decomposition | Module       | Factorization           |
//! |---------------|-------------|-------------------------|
//! | LU            | [`lu`]      | `PA = LU`               |
//! | QR            | [`qr`]      | `A = QR`                |
//! | Cholesky      | [`cholesky`]| `A = L L^T`             |

pub mod cholesky;
pub mod lu;
pub mod qr;

pub use cholesky::CholeskyDecomposition;
pub use lu::LuDecomposition;
pub use qr::QrDecomposition;

use crate::error::{DecompError, Result};
use crate::matrix::Matrix;

/// Right-hand sides of a solve must have `rows` rows.
pub(crate) fn check_rhs(rows: usize, b: &Matrix) -> Result<()> {
    if b.rows() != rows {
        return Err(DecompError::DimensionMismatch {
            expected: (rows, b.cols()),
            got: b.shape(),
        });
    }
    Ok(())
}

/// Packed factors (`cols` wide, row-major) must not have overflowed.
pub(crate) fn check_factor_finite(data: &[f64], cols: usize) -> Result<()> {
    match data.iter().position(|x| !x.is_finite()) {
        Some(flat) => Err(DecompError::NonFinite {
            row: flat / cols,
            col: flat % cols,
        }),
        None => Ok(()),
    }
}
