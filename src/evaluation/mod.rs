//! K-fold verification accuracy.
//!
//! Folds are contiguous, equal slices of the pair list in input order (fold `i` covers
//! `pairs[i * size..(i + 1) * size]`). Each fold is swept over the same fixed grid, accuracies
//! are averaged per threshold, and the first threshold with the highest mean wins.
//!
//! The threshold is selected on the same folds it is reported on; this is a descriptive
//! summary of separability, not a held-out estimate.

pub mod error;
pub mod types;


pub use error::{EvaluationError, EvaluationResult};
pub use types::{AccuracyMatrix, CrossValidationSummary, EvaluatorConfig};

use tracing::{debug, info};

use crate::constants::{ACCURACY_SCALE, CV_THRESHOLD_COUNT, CV_THRESHOLD_START, THRESHOLD_STEP};
use crate::features::FeatureTable;
use crate::pairs::{Label, PairList};
use crate::roc::{RocError, first_argmax, roc_curve};
use crate::similarity::pair_similarities;

/// The fixed `0.000..=3.999` grid used for cross-validation.
pub fn cv_threshold_grid() -> Vec<f64> {
    (0..CV_THRESHOLD_COUNT)
        .map(|i| CV_THRESHOLD_START + i as f64 * THRESHOLD_STEP)
        .collect()
}

/// Evaluates `pairs` with `kfold` folds, rejecting zero-norm vectors.
pub fn evaluate_pairs(
    pairs: &PairList,
    features1: &FeatureTable,
    features2: Option<&FeatureTable>,
    kfold: usize,
) -> EvaluationResult<CrossValidationSummary> {
    evaluate_pairs_with(
        pairs,
        features1,
        features2,
        &EvaluatorConfig::with_kfold(kfold),
    )
}

/// Evaluates `pairs` with explicit options.
pub fn evaluate_pairs_with(
    pairs: &PairList,
    features1: &FeatureTable,
    features2: Option<&FeatureTable>,
    config: &EvaluatorConfig,
) -> EvaluationResult<CrossValidationSummary> {
    fold_size(pairs.len(), config.kfold)?;

    let similarities = pair_similarities(pairs, features1, features2, config.zero_norm)?;
    let labels = pairs.labels();

    cross_validate(&labels, &similarities, config.kfold, &cv_threshold_grid())
}

/// Fold/aggregate step over precomputed similarities.
pub fn cross_validate(
    labels: &[Label],
    similarities: &[f64],
    kfold: usize,
    grid: &[f64],
) -> EvaluationResult<CrossValidationSummary> {
    let matrix = accuracy_matrix(labels, similarities, kfold, grid)?;

    let means = matrix.column_means();
    let stds = matrix.column_stds();
    let best = first_argmax(&means).ok_or(EvaluationError::EmptyGrid)?;
    let fold_accuracies = matrix.column(best).ok_or(EvaluationError::EmptyGrid)?;

    let summary = CrossValidationSummary {
        mean_accuracy: means[best],
        std_accuracy: stds[best],
        threshold: grid[best],
        fold_accuracies,
    };

    info!(
        mean_accuracy = summary.mean_accuracy,
        std_accuracy = summary.std_accuracy,
        threshold = summary.threshold,
        kfold,
        "Selected cross-validated threshold"
    );

    Ok(summary)
}

/// Sweeps every fold over `grid` and returns accuracies in percent.
pub fn accuracy_matrix(
    labels: &[Label],
    similarities: &[f64],
    kfold: usize,
    grid: &[f64],
) -> EvaluationResult<AccuracyMatrix> {
    if labels.len() != similarities.len() {
        return Err(RocError::LengthMismatch {
            labels: labels.len(),
            similarities: similarities.len(),
        }
        .into());
    }
    if grid.is_empty() {
        return Err(EvaluationError::EmptyGrid);
    }
    let size = fold_size(labels.len(), kfold)?;

    debug!(
        pairs = labels.len(),
        kfold,
        fold_size = size,
        thresholds = grid.len(),
        "Running fold sweeps"
    );

    let rows = labels
        .chunks_exact(size)
        .zip(similarities.chunks_exact(size))
        .map(|(fold_labels, fold_sims)| {
            let curve = roc_curve(fold_labels, fold_sims, Some(grid))?;
            Ok(curve
                .accuracy
                .into_iter()
                .map(|acc| acc * ACCURACY_SCALE)
                .collect())
        })
        .collect::<EvaluationResult<Vec<Vec<f64>>>>()?;

    Ok(AccuracyMatrix::from_rows(rows, grid.len()))
}

fn fold_size(pairs: usize, kfold: usize) -> EvaluationResult<usize> {
    if kfold == 0 {
        return Err(EvaluationError::ZeroFolds);
    }
    if pairs == 0 {
        return Err(EvaluationError::NoPairs);
    }
    if !pairs.is_multiple_of(kfold) {
        return Err(EvaluationError::UnevenFolds { pairs, kfold });
    }
    Ok(pairs / kfold)
}
