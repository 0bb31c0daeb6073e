use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::constants::DimValidationError;

#[derive(Error, Debug)]
pub enum FeatureError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("feature file is empty: {path}")]
    EmptyFile { path: PathBuf },

    #[error("{0}")]
    Dimension(#[from] DimValidationError),

    #[error("buffer of {len} values is not a whole number of rows of dimension {dim}")]
    RaggedBuffer { len: usize, dim: usize },

    #[error("file size {bytes} is not a multiple of the row size {row_bytes}")]
    FileSizeMismatch { bytes: usize, row_bytes: usize },

    #[error("non-finite value at row {row}, column {column}")]
    NonFinite { row: usize, column: usize },

    #[error("feature index {index} out of range for table with {rows} rows")]
    IndexOutOfRange { index: usize, rows: usize },

    #[error("unknown feature dtype '{0}' (expected f32 or f16)")]
    UnknownDtype(String),
}

pub type FeatureResult<T> = Result<T, FeatureError>;
