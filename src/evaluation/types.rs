use serde::Serialize;

use crate::constants::DEFAULT_KFOLD;
use crate::similarity::ZeroNormPolicy;

#[derive(Debug, Clone, PartialEq)]
/// Options for [`evaluate_pairs_with`](super::evaluate_pairs_with).
pub struct EvaluatorConfig {
    /// Number of contiguous folds. Default: `10`.
    pub kfold: usize,
    /// Zero-norm handling for the similarity step.
    pub zero_norm: ZeroNormPolicy,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            kfold: DEFAULT_KFOLD,
            zero_norm: ZeroNormPolicy::default(),
        }
    }
}

impl EvaluatorConfig {
    pub fn with_kfold(kfold: usize) -> Self {
        Self {
            kfold,
            ..Default::default()
        }
    }
}

/// Folds x thresholds table of accuracies (percent), row-major by fold.
#[derive(Debug, Clone, PartialEq)]
pub struct AccuracyMatrix {
    folds: usize,
    thresholds: usize,
    values: Vec<f64>,
}

impl AccuracyMatrix {
    pub(crate) fn from_rows(rows: Vec<Vec<f64>>, thresholds: usize) -> Self {
        let folds = rows.len();
        let values = rows.into_iter().flatten().collect();
        Self {
            folds,
            thresholds,
            values,
        }
    }

    pub fn folds(&self) -> usize {
        self.folds
    }

    pub fn thresholds(&self) -> usize {
        self.thresholds
    }

    /// Accuracy row for one fold, or `None` past the last fold.
    pub fn fold(&self, fold: usize) -> Option<&[f64]> {
        if fold >= self.folds {
            return None;
        }
        let start = fold * self.thresholds;
        self.values.get(start..start + self.thresholds)
    }

    /// Accuracies of every fold at one threshold index, or `None` past the grid.
    pub fn column(&self, threshold: usize) -> Option<Vec<f64>> {
        (threshold < self.thresholds).then(|| self.column_at(threshold))
    }

    /// Per-threshold mean across folds.
    pub fn column_means(&self) -> Vec<f64> {
        (0..self.thresholds)
            .map(|t| mean(&self.column_at(t)))
            .collect()
    }

    /// Per-threshold population standard deviation across folds.
    pub fn column_stds(&self) -> Vec<f64> {
        (0..self.thresholds)
            .map(|t| population_std(&self.column_at(t)))
            .collect()
    }

    // `threshold` must be below `self.thresholds`.
    fn column_at(&self, threshold: usize) -> Vec<f64> {
        (0..self.folds)
            .map(|fold| self.values[fold * self.thresholds + threshold])
            .collect()
    }
}

pub(crate) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Divides by `n`, not `n - 1`.
pub(crate) fn population_std(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mu = mean(values);
    let variance = values.iter().map(|v| (v - mu).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Best cross-validated operating point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrossValidationSummary {
    /// Mean accuracy across folds, in percent.
    pub mean_accuracy: f64,
    /// Population standard deviation of fold accuracies, in percent.
    pub std_accuracy: f64,
    /// Threshold achieving `mean_accuracy`.
    pub threshold: f64,
    /// Accuracy of each fold at `threshold`, in fold order.
    pub fold_accuracies: Vec<f64>,
}

impl std::fmt::Display for CrossValidationSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.2}% +/- {:.2} @ threshold {:.3} ({} folds)",
            self.mean_accuracy,
            self.std_accuracy,
            self.threshold,
            self.fold_accuracies.len()
        )
    }
}
