//! `hedgehog-core` — dense matrices and their decompositions.
//!
//! Provides the [`Matrix`] value type and Cholesky, LU and QR
//! factorizations over real (`f64`) matrices.
//!
//! # Design
//!
//! - Every decomposition borrows its input and returns freshly allocated
//!   factors; the input is never mutated or aliased.
//! - Failures are returned as [`DecompError`] values; a decomposition never
//!   hands back factors containing `NaN` produced by its own arithmetic.
//! - All routines are synchronous and deterministic, and every type is
//!   `Send + Sync`.

pub mod error;
pub mod linalg;
pub mod matrix;

// Re-export key types at crate root for convenience.
pub use error::{DecompError, Result};
pub use matrix::Matrix;

/// Items intended for glob-import: `use hedgehog_core::prelude::*;`
pub mod prelude {
    pub use crate::error::{DecompError, Result};
    pub use crate::linalg::{
        CholeskyDecomposition, DecompConfig, LuDecomposition, QrDecomposition, QrMode,
    };
    pub use crate::matrix::Matrix;
}
