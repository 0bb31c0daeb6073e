//! Cross-cutting, shared constants.
//!
//! Prefer deriving secondary constants (e.g. grid lengths) from primary ones to avoid drift.
//!
//! # Threshold Grids
//!
//! Two grids coexist on purpose:
//!
//! 1. [`roc_curve`](crate::roc::roc_curve) without explicit thresholds derives an adaptive grid
//!    from the observed similarity range, stepping by [`THRESHOLD_STEP`].
//! 2. [`evaluate_pairs`](crate::evaluation::evaluate_pairs) always sweeps the fixed grid
//!    `[CV_THRESHOLD_START, CV_THRESHOLD_STOP)` so fold results are comparable across runs.

/// Step between consecutive thresholds in every derived grid.
pub const THRESHOLD_STEP: f64 = 0.001;

/// Inclusive lower bound of the cross-validation threshold grid.
pub const CV_THRESHOLD_START: f64 = 0.0;

/// Exclusive upper bound of the cross-validation threshold grid.
pub const CV_THRESHOLD_STOP: f64 = 4.0;

/// Number of thresholds in the cross-validation grid (0.000 ..= 3.999).
pub const CV_THRESHOLD_COUNT: usize = 4000;

/// Largest grid [`threshold_grid`](crate::roc::threshold_grid) will build. Distances span
/// `[0, 2]`, so a real adaptive grid holds at most 2000 values.
pub const MAX_GRID_THRESHOLDS: usize = 1_000_000;

/// Default fold count for [`evaluate_pairs`](crate::evaluation::evaluate_pairs).
pub const DEFAULT_KFOLD: usize = 10;

/// Default per-category count for [`top_pairs`](crate::selection::top_pairs).
pub const DEFAULT_TOP_K: usize = 5;

/// Cosine distance reported for zero-norm vectors under [`ZeroNormPolicy::Neutral`](crate::similarity::ZeroNormPolicy::Neutral).
pub const NEUTRAL_DISTANCE: f64 = 1.0;

/// Accuracies are reported as percentages by the cross-validated evaluator.
pub const ACCURACY_SCALE: f64 = 100.0;

/// Error returned when a feature dimension check fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DimValidationError {
    /// Feature dimension cannot be zero.
    ZeroDimension,
    /// Runtime dimension does not match expected dimension.
    DimensionMismatch { expected: usize, actual: usize },
}

impl std::fmt::Display for DimValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroDimension => write!(f, "feature dimension cannot be zero"),
            Self::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "dimension mismatch: expected {}, got {}",
                    expected, actual
                )
            }
        }
    }
}

impl std::error::Error for DimValidationError {}

/// Validates that a runtime feature dimension matches the expected dimension.
///
/// Use this at module boundaries (e.g. when pairing rows from two feature tables) so a
/// mismatch is reported up front instead of producing a meaningless distance.
///
/// # Example
///
/// ```
/// use pairval::constants::validate_feature_dim;
///
/// validate_feature_dim(512, 512).unwrap();
/// assert!(validate_feature_dim(128, 512).is_err());
/// ```
pub fn validate_feature_dim(actual: usize, expected: usize) -> Result<(), DimValidationError> {
    if expected == 0 {
        return Err(DimValidationError::ZeroDimension);
    }
    if actual != expected {
        return Err(DimValidationError::DimensionMismatch { expected, actual });
    }
    Ok(())
}
