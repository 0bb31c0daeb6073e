//! Pairval library crate (used by the `pairval` binary and integration tests).
//!
//! Evaluates a face/biometric verification model from labelled index pairs and per-sample
//! feature vectors. Pair similarity is cosine distance (`0` identical, `2` opposite), and a
//! pair is predicted "same" when its distance is at or below the threshold.
//!
//! # Public API Surface
//!
//! ## Inputs
//! - [`PairList`], [`Pair`], [`Label`] - Labelled comparisons
//! - [`FeatureTable`], [`FeatureDtype`] - Row-major feature vectors (raw f32/f16 files)
//!
//! ## Metrics
//! - [`cosine_distance`], [`pair_similarities`] - Pairwise distances
//! - [`roc_curve`], [`RocCurve`] - Threshold sweep
//! - [`evaluate_pairs`], [`CrossValidationSummary`] - K-fold accuracy
//! - [`top_pairs`], [`TopPairs`] - Best and worst examples per outcome
//!
//! ## Harness
//! - [`Config`], [`ConfigError`] - `PAIRVAL_*` environment configuration
//! - [`report::run`], [`Report`] - End-to-end evaluation run

pub mod config;
pub mod constants;
pub mod evaluation;
pub mod features;
pub mod hashing;
pub mod pairs;
pub mod report;
pub mod roc;
pub mod selection;
pub mod similarity;

pub use config::{Config, ConfigError};
pub use constants::{
    CV_THRESHOLD_COUNT, DEFAULT_KFOLD, DEFAULT_TOP_K, DimValidationError, MAX_GRID_THRESHOLDS,
    THRESHOLD_STEP, validate_feature_dim,
};
pub use evaluation::{
    AccuracyMatrix, CrossValidationSummary, EvaluationError, EvaluatorConfig, cross_validate,
    cv_threshold_grid, evaluate_pairs, evaluate_pairs_with,
};
pub use features::{FeatureDtype, FeatureError, FeatureTable};
pub use hashing::{hash_pairs, hash_to_u64};
pub use pairs::{Label, Pair, PairError, PairList};
pub use report::{Report, ReportError};
pub use roc::{
    ConfusionCounts, OperatingPoint, RocCurve, RocError, adaptive_grid, roc_curve, threshold_grid,
};
pub use selection::{
    FlatTopPairs, PairGroup, SelectionError, TopPairs, rank_pairs, top_pairs, top_pairs_with,
};
pub use similarity::{
    SimilarityError, ZeroNormPolicy, compare_pairs, cosine_distance, pair_similarities,
};
