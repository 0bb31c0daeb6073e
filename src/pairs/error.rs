use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PairError {
    #[error("failed to read pair list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: expected 3 columns, found {found}")]
    WrongColumnCount { line: usize, found: usize },

    #[error("line {line}: '{value}' is not an integer: {source}")]
    InvalidInteger {
        line: usize,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("row {row}: label must be 0 or 1, got {value}")]
    InvalidLabel { row: usize, value: i64 },

    #[error("row {row}: feature index must be non-negative, got {value}")]
    NegativeIndex { row: usize, value: i64 },
}

pub type PairResult<T> = Result<T, PairError>;
