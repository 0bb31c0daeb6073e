use thiserror::Error;

use crate::constants::DimValidationError;
use crate::features::FeatureError;

#[derive(Debug, Error)]
pub enum SimilarityError {
    #[error("sequence length mismatch: {left} left vectors vs {right} right vectors")]
    LengthMismatch { left: usize, right: usize },

    #[error("dimension mismatch at position {position}: expected {expected}, got {actual}")]
    DimensionMismatch {
        position: usize,
        expected: usize,
        actual: usize,
    },

    #[error("zero-norm vector at position {position}; cosine distance is undefined")]
    ZeroNorm { position: usize },

    #[error("unknown zero-norm policy '{0}' (expected reject or neutral)")]
    UnknownPolicy(String),

    #[error("feature table mismatch: {0}")]
    TableDimension(#[from] DimValidationError),

    #[error("feature lookup failed: {0}")]
    Feature(#[from] FeatureError),
}

pub type SimilarityResult<T> = Result<T, SimilarityError>;
