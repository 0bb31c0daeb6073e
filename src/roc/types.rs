use serde::Serialize;

use crate::pairs::Label;

/// 2x2 confusion matrix at a single threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ConfusionCounts {
    pub true_positives: usize,
    pub false_positives: usize,
    pub true_negatives: usize,
    pub false_negatives: usize,
}

impl ConfusionCounts {
    /// Counts outcomes of the rule "predict same iff `similarity <= threshold`".
    ///
    /// `labels` and `similarities` are zipped; callers are expected to have checked lengths.
    pub fn at_threshold(labels: &[Label], similarities: &[f64], threshold: f64) -> Self {
        let mut counts = Self::default();
        for (label, &similarity) in labels.iter().zip(similarities) {
            let predicted = similarity <= threshold;
            match (predicted, label.is_positive()) {
                (true, true) => counts.true_positives += 1,
                (true, false) => counts.false_positives += 1,
                (false, false) => counts.true_negatives += 1,
                (false, true) => counts.false_negatives += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.true_positives + self.false_positives + self.true_negatives + self.false_negatives
    }

    /// `TP / (TP + FN)`, or `0.0` when there are no positives.
    pub fn tpr(&self) -> f64 {
        ratio(
            self.true_positives,
            self.true_positives + self.false_negatives,
        )
    }

    /// `FP / (FP + TN)`, or `0.0` when there are no negatives.
    pub fn fpr(&self) -> f64 {
        ratio(
            self.false_positives,
            self.false_positives + self.true_negatives,
        )
    }

    /// `(TP + TN) / total`, or `0.0` for an empty matrix.
    pub fn accuracy(&self) -> f64 {
        ratio(self.true_positives + self.true_negatives, self.total())
    }
}

#[inline]
fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// A threshold with its resulting rates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OperatingPoint {
    pub threshold: f64,
    pub fpr: f64,
    pub tpr: f64,
    pub accuracy: f64,
}

/// Per-threshold rates, all aligned with `thresholds`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RocCurve {
    pub thresholds: Vec<f64>,
    pub fpr: Vec<f64>,
    pub tpr: Vec<f64>,
    pub accuracy: Vec<f64>,
}

impl RocCurve {
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            thresholds: Vec::with_capacity(n),
            fpr: Vec::with_capacity(n),
            tpr: Vec::with_capacity(n),
            accuracy: Vec::with_capacity(n),
        }
    }

    pub(crate) fn push(&mut self, threshold: f64, counts: &ConfusionCounts) {
        self.thresholds.push(threshold);
        self.fpr.push(counts.fpr());
        self.tpr.push(counts.tpr());
        self.accuracy.push(counts.accuracy());
    }

    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }

    /// Rates at one grid index; `None` when any column is shorter than `index + 1`.
    pub fn operating_point(&self, index: usize) -> Option<OperatingPoint> {
        Some(OperatingPoint {
            threshold: *self.thresholds.get(index)?,
            fpr: *self.fpr.get(index)?,
            tpr: *self.tpr.get(index)?,
            accuracy: *self.accuracy.get(index)?,
        })
    }

    /// First threshold with the highest accuracy.
    pub fn best_accuracy(&self) -> Option<OperatingPoint> {
        let index = first_argmax(&self.accuracy)?;
        self.operating_point(index)
    }
}

/// Index of the first maximum; `None` for an empty slice.
pub(crate) fn first_argmax(values: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in values.iter().enumerate() {
        match best {
            Some((_, current)) if v <= current => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}
