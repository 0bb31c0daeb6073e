use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RocError {
    #[error("length mismatch: {labels} labels vs {similarities} similarities")]
    LengthMismatch { labels: usize, similarities: usize },

    #[error("cannot sweep thresholds over an empty pair set")]
    Empty,

    #[error("similarity at position {position} is not finite")]
    NonFiniteSimilarity { position: usize },

    #[error("threshold grid would hold {thresholds} values (limit {limit})")]
    GridTooLarge { thresholds: f64, limit: usize },
}

pub type RocResult<T> = Result<T, RocError>;
