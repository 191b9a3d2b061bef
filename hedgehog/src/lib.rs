//! # Hedgehog
//!
//! Dense matrix decompositions in pure Rust.
//!
//! One `use hedgehog::prelude::*;` gives you the [`Matrix`](prelude::Matrix)
//! type and the Cholesky, LU and QR decompositions.
//!
//! ## Feature Flags
//!
//! | Feature | Enables |
//! |---------|---------|
//! | `core` *(default)* | Matrix type and decompositions |
//!
//! ```
//! use hedgehog::prelude::*;
//!
//! let a = Matrix::from_rows(&[&[4.0, 3.0], &[6.0, 3.0]]).unwrap();
//! let lu = LuDecomposition::decompose(&a).unwrap();
//! assert_eq!(lu.p(), Matrix::from_rows(&[&[0.0, 1.0], &[1.0, 0.0]]).unwrap());
//! ```

#[cfg(feature = "core")]
pub use hedgehog_core as core;

#[cfg(feature = "core")]
pub use hedgehog_core::linalg;

/// Glob-import convenience: `use hedgehog::prelude::*;`
#[cfg(feature = "core")]
pub mod prelude {
    pub use hedgehog_core::linalg::{cholesky, lu, qr};
    pub use hedgehog_core::prelude::*;
}
