//! Tunables shared by the decompositions.

use core::fmt;

/// Shape convention for the factors of a QR decomposition of an `m x n`
/// matrix, with `k = min(m, n)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QrMode {
    /// `Q` is `m x m`, `R` is `m x n`.
    #[default]
    Full,
    /// `Q` is `m x k`, `R` is `k x n`.
    Reduced,
}

impl fmt::Display for QrMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QrMode::Full => write!(f, "full"),
            QrMode::Reduced => write!(f, "reduced"),
        }
    }
}

/// Options for [`LuDecomposition`](crate::linalg::LuDecomposition) and
/// [`QrDecomposition`](crate::linalg::QrDecomposition).
///
/// ```
/// # use hedgehog_core::linalg::{DecompConfig, QrMode};
/// let config = DecompConfig::default()
///     .with_allow_singular(true)
///     .with_qr_mode(QrMode::Reduced);
/// assert!(config.allow_singular);
/// assert_eq!(config.pivot_tolerance, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecompConfig {
    /// LU pivots whose magnitude is at most `pivot_tolerance * max|A|`
    /// count as zero. The default `0.0` only rejects exactly zero pivots.
    pub pivot_tolerance: f64,

    /// Diagonal entries of `R` whose magnitude is at most
    /// `rank_tolerance * max|A|` count as zero in
    /// [`QrDecomposition::is_full_rank`](crate::linalg::QrDecomposition::is_full_rank)
    /// and [`QrDecomposition::solve`](crate::linalg::QrDecomposition::solve).
    pub rank_tolerance: f64,

    /// Let LU skip columns without a usable pivot instead of returning
    /// [`DecompError::SingularMatrix`](crate::DecompError::SingularMatrix).
    pub allow_singular: bool,

    /// Factor shape returned by
    /// [`QrDecomposition::q_mode`](crate::linalg::QrDecomposition::q_mode) and
    /// [`QrDecomposition::r_mode`](crate::linalg::QrDecomposition::r_mode).
    pub qr_mode: QrMode,
}

impl Default for DecompConfig {
    fn default() -> Self {
        Self {
            pivot_tolerance: 0.0,
            rank_tolerance: f64::EPSILON * 1e3,
            allow_singular: false,
            qr_mode: QrMode::Full,
        }
    }
}

impl DecompConfig {
    pub fn with_pivot_tolerance(mut self, pivot_tolerance: f64) -> Self {
        self.pivot_tolerance = pivot_tolerance;
        self
    }

    pub fn with_rank_tolerance(mut self, rank_tolerance: f64) -> Self {
        self.rank_tolerance = rank_tolerance;
        self
    }

    pub fn with_allow_singular(mut self, allow_singular: bool) -> Self {
        self.allow_singular = allow_singular;
        self
    }

    pub fn with_qr_mode(mut self, qr_mode: QrMode) -> Self {
        self.qr_mode = qr_mode;
        self
    }

    /// Magnitude at or below which an LU pivot counts as zero, for a
    /// matrix whose largest element magnitude is `max_abs`.
    pub(crate) fn pivot_threshold(&self, max_abs: f64) -> f64 {
        self.pivot_tolerance * max_abs
    }

    /// Magnitude at or below which a diagonal entry of `R` counts as zero.
    pub(crate) fn rank_threshold(&self, max_abs: f64) -> f64 {
        self.rank_tolerance * max_abs
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = DecompConfig::default();
        assert_eq!(c.qr_mode, QrMode::Full);
        assert!(!c.allow_singular);
        assert_eq!(c.pivot_tolerance, 0.0);
        assert!(c.rank_tolerance > 0.0 && c.rank_tolerance < 1e-10);
    }

    #[test]
    fn test_thresholds_scale_with_max_abs() {
        let c = DecompConfig::default().with_pivot_tolerance(1e-3);
        assert_eq!(c.pivot_threshold(2.0), 2e-3);
        assert_eq!(DecompConfig::default().pivot_threshold(1e300), 0.0);
        assert_eq!(c.rank_threshold(0.0), 0.0);
    }

    #[test]
    fn test_builders() {
        let c = DecompConfig::default()
            .with_pivot_tolerance(1e-6)
            .with_rank_tolerance(1e-8)
            .with_allow_singular(true)
            .with_qr_mode(QrMode::Reduced);
        assert_eq!(c.pivot_tolerance, 1e-6);
        assert_eq!(c.rank_tolerance, 1e-8);
        assert!(c.allow_singular);
        assert_eq!(c.qr_mode.to_string(), "reduced");
    }
}
