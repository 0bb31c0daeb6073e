//! End-to-end evaluation run used by the `pairval` binary.
//!
//! Loads the configured pair list and feature tables, computes similarities once, then feeds
//! them to both the cross-validated evaluator and the top-pair ranking.

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::config::{Config, ConfigError};
use crate::evaluation::{CrossValidationSummary, EvaluationError, cross_validate, cv_threshold_grid};
use crate::features::{FeatureError, FeatureTable};
use crate::pairs::{PairError, PairList};
use crate::selection::{FlatTopPairs, SelectionError, TopPairs, rank_pairs};
use crate::similarity::{SimilarityError, pair_similarities};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("pair list error: {0}")]
    Pairs(#[from] PairError),

    #[error("feature table error: {0}")]
    Features(#[from] FeatureError),

    #[error("similarity error: {0}")]
    Similarity(#[from] SimilarityError),

    #[error("evaluation error: {0}")]
    Evaluation(#[from] EvaluationError),

    #[error("selection error: {0}")]
    Selection(#[from] SelectionError),
}

/// Everything a run produces, ready for serialization.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub pairs: usize,
    pub positives: usize,
    /// Hex-encoded [`PairList::fingerprint`].
    pub pairs_fingerprint: String,
    pub feature_dim: usize,
    pub kfold: usize,
    pub top_k: usize,
    pub evaluation: CrossValidationSummary,
    pub top_pairs: TopPairs,
    pub top_pairs_flat: FlatTopPairs,
}

/// Loads inputs named by `config` and evaluates them.
pub fn run(config: &Config) -> Result<Report, ReportError> {
    config.validate()?;

    let missing = |name| ConfigError::MissingEnvVar { name };
    let pairs_path = config
        .pairs_path
        .as_ref()
        .ok_or_else(|| missing(Config::ENV_PAIRS_PATH))?;
    let features_path = config
        .features_path
        .as_ref()
        .ok_or_else(|| missing(Config::ENV_FEATURES_PATH))?;
    let dim = config
        .feature_dim
        .ok_or_else(|| missing(Config::ENV_FEATURE_DIM))?;

    let pairs = PairList::load(pairs_path)?;
    let features1 = FeatureTable::open(features_path, dim, config.feature_dtype)?;
    let features2 = config
        .features2_path
        .as_ref()
        .map(|path| FeatureTable::open(path, dim, config.feature_dtype))
        .transpose()?;

    evaluate(&pairs, &features1, features2.as_ref(), config)
}

/// Evaluates in-memory inputs using the fold count, top-k and zero-norm policy from `config`.
pub fn evaluate(
    pairs: &PairList,
    features1: &FeatureTable,
    features2: Option<&FeatureTable>,
    config: &Config,
) -> Result<Report, ReportError> {
    let similarities = pair_similarities(pairs, features1, features2, config.zero_norm)?;
    let labels = pairs.labels();

    let evaluation = cross_validate(&labels, &similarities, config.kfold, &cv_threshold_grid())?;
    let top_pairs = rank_pairs(pairs, &similarities, config.top_k)?;
    let top_pairs_flat = top_pairs.flatten();

    info!(
        pairs = pairs.len(),
        accuracy = %evaluation,
        "Evaluation complete"
    );

    Ok(Report {
        pairs: pairs.len(),
        positives: pairs.positives(),
        pairs_fingerprint: format!("{:016x}", pairs.fingerprint()),
        feature_dim: features1.dim(),
        kfold: config.kfold,
        top_k: config.top_k,
        evaluation,
        top_pairs,
        top_pairs_flat,
    })
}
