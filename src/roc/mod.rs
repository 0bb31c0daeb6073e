//! Threshold sweep over distance-like similarities.
//!
//! For each threshold `t` a pair is predicted "same" iff its similarity is `<= t`. Raising `t`
//! can only move pairs from predicted-different to predicted-same, so TPR and FPR are both
//! non-decreasing along an ascending grid.

pub mod error;
pub mod types;


pub use error::{RocError, RocResult};
pub use types::{ConfusionCounts, OperatingPoint, RocCurve};

pub(crate) use types::first_argmax;

use tracing::trace;

use crate::constants::{MAX_GRID_THRESHOLDS, THRESHOLD_STEP};
use crate::pairs::Label;

/// `start, start + step, ...` strictly below `stop` (numpy `arange` semantics).
///
/// The length is `ceil((stop - start) / step)`, so floating-point stepping may include a value
/// that rounds to `stop`; callers needing exact endpoints should pass an explicit grid.
/// Non-finite bounds, a non-positive step or `stop <= start` give an empty grid.
///
/// # Errors
///
/// [`RocError::GridTooLarge`] when the grid would exceed [`MAX_GRID_THRESHOLDS`] values.
pub fn threshold_grid(start: f64, stop: f64, step: f64) -> RocResult<Vec<f64>> {
    let finite = start.is_finite() && stop.is_finite() && step.is_finite();
    if !finite || step <= 0.0 || stop <= start {
        return Ok(Vec::new());
    }

    let count = ((stop - start) / step).ceil();
    if count > MAX_GRID_THRESHOLDS as f64 {
        return Err(RocError::GridTooLarge {
            thresholds: count,
            limit: MAX_GRID_THRESHOLDS,
        });
    }

    let n = count as usize;
    Ok((0..n).map(|i| start + i as f64 * step).collect())
}

/// Adaptive grid from the observed similarity range, stepping by [`THRESHOLD_STEP`].
pub fn adaptive_grid(similarities: &[f64]) -> RocResult<Vec<f64>> {
    let (min, max) = similarities
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &s| {
            (lo.min(s), hi.max(s))
        });
    threshold_grid(min, max, THRESHOLD_STEP)
}

/// Sweeps `thresholds` (or the [`adaptive_grid`] when `None`) and reports FPR, TPR and accuracy
/// at each one, in grid order.
pub fn roc_curve(
    labels: &[Label],
    similarities: &[f64],
    thresholds: Option<&[f64]>,
) -> RocResult<RocCurve> {
    if labels.len() != similarities.len() {
        return Err(RocError::LengthMismatch {
            labels: labels.len(),
            similarities: similarities.len(),
        });
    }
    if labels.is_empty() {
        return Err(RocError::Empty);
    }
    if let Some(position) = similarities.iter().position(|s| !s.is_finite()) {
        return Err(RocError::NonFiniteSimilarity { position });
    }

    let derived;
    let thresholds = match thresholds {
        Some(grid) => grid,
        None => {
            derived = adaptive_grid(similarities)?;
            derived.as_slice()
        }
    };

    trace!(
        pairs = labels.len(),
        thresholds = thresholds.len(),
        "Sweeping thresholds"
    );

    let mut curve = RocCurve::with_capacity(thresholds.len());
    for &threshold in thresholds {
        let counts = ConfusionCounts::at_threshold(labels, similarities, threshold);
        curve.push(threshold, &counts);
    }

    Ok(curve)
}
