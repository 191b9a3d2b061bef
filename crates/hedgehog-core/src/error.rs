use thiserror::Error;

/// All errors returned by `hedgehog-core`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecompError {
    /// The input matrix has the wrong shape for the requested decomposition
    /// (non-square where a square matrix is required, or empty).
    #[error("wrong dimension of matrix ({rows}x{cols}): {reason}")]
    Dimension {
        rows: usize,
        cols: usize,
        reason: &'static str,
    },

    /// The input matrix is not equal to its transpose.
    ///
    /// Only symmetry is checked; complex conjugate structure is out of scope.
    #[error("matrix is not hermitian; Cholesky decomposition does not apply")]
    NotHermitian,

    /// Elimination hit a negative radicand or a zero pivot at row `index`.
    #[error("matrix is not positive definite (failed at row {index})")]
    NotPositiveDefinite { index: usize },

    /// No usable pivot was found in `column`.
    #[error("singular matrix: no usable pivot in column {column}")]
    SingularMatrix { column: usize },

    /// The input, or a factor computed from it, holds `NaN` or an infinity
    /// at `(row, col)`.
    #[error("matrix contains a non-finite value at ({row}, {col})")]
    NonFinite { row: usize, col: usize },

    /// Flat data does not fill a `rows x cols` matrix.
    #[error("invalid shape {rows}x{cols} for {len} elements")]
    InvalidShape { rows: usize, cols: usize, len: usize },

    /// Operand shapes are incompatible.
    #[error("dimension mismatch: expected {expected:?}, got {got:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        got: (usize, usize),
    },

    /// Element index outside the matrix.
    #[error("index ({row}, {col}) out of bounds for {rows}x{cols} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

/// Convenience alias used throughout `hedgehog-core`.
pub type Result<T> = std::result::Result<T, DecompError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = DecompError::Dimension {
            rows: 2,
            cols: 3,
            reason: "Cholesky decomposition requires a square matrix",
        };
        assert_eq!(
            e.to_string(),
            "wrong dimension of matrix (2x3): Cholesky decomposition requires a square matrix"
        );
        assert_eq!(
            DecompError::NotPositiveDefinite { index: 1 }.to_string(),
            "matrix is not positive definite (failed at row 1)"
        );
        assert_eq!(
            DecompError::SingularMatrix { column: 2 }.to_string(),
            "singular matrix: no usable pivot in column 2"
        );
    }

    #[test]
    fn test_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&DecompError::NotHermitian);
    }
}
