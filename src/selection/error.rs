use thiserror::Error;

use crate::similarity::SimilarityError;

#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("top-k must be positive")]
    ZeroK,

    #[error("length mismatch: {pairs} pairs vs {similarities} similarities")]
    LengthMismatch { pairs: usize, similarities: usize },

    #[error("similarity computation failed: {0}")]
    Similarity(#[from] SimilarityError),
}

pub type SelectionResult<T> = Result<T, SelectionError>;
