use thiserror::Error;

use crate::roc::RocError;
use crate::similarity::SimilarityError;

#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("fold count must be positive")]
    ZeroFolds,

    #[error("{pairs} pairs cannot be split into {kfold} equal folds")]
    UnevenFolds { pairs: usize, kfold: usize },

    #[error("no pairs to evaluate")]
    NoPairs,

    #[error("threshold grid is empty")]
    EmptyGrid,

    #[error("similarity computation failed: {0}")]
    Similarity(#[from] SimilarityError),

    #[error("threshold sweep failed: {0}")]
    Roc(#[from] RocError),
}

pub type EvaluationResult<T> = Result<T, EvaluationError>;
