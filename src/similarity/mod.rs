//! Pairwise cosine distance.
//!
//! Values follow a distance convention: `0.0` for identical directions, `1.0` for orthogonal
//! vectors, `2.0` for opposite ones. Lower means more alike, and every consumer in this crate
//! (threshold sweeps, top-pair ranking) relies on that orientation.

pub mod error;


pub use error::{SimilarityError, SimilarityResult};

use tracing::warn;

use crate::constants::{DimValidationError, NEUTRAL_DISTANCE, validate_feature_dim};
use crate::features::FeatureTable;
use crate::pairs::PairList;

/// What to do when either vector of a pair has zero norm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZeroNormPolicy {
    /// Fail the whole computation.
    #[default]
    Reject,
    /// Score the pair as orthogonal ([`NEUTRAL_DISTANCE`]).
    Neutral,
}

impl std::str::FromStr for ZeroNormPolicy {
    type Err = SimilarityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reject" | "error" => Ok(Self::Reject),
            "neutral" | "orthogonal" => Ok(Self::Neutral),
            other => Err(SimilarityError::UnknownPolicy(other.to_string())),
        }
    }
}

/// Cosine distance `1 - a.b / (|a| |b|)`, accumulated in `f64` and clamped to `[0, 2]`.
///
/// Returns `None` when the distance is undefined: different lengths, empty input, or a
/// zero-norm operand.
#[inline]
pub fn cosine_distance(a: &[f32], b: &[f32]) -> Option<f64> {
    if a.len() != b.len() || a.is_empty() {
        return None;
    }

    let (dot, norm_a_sq, norm_b_sq) =
        a.iter()
            .zip(b.iter())
            .fold((0.0f64, 0.0f64, 0.0f64), |(dot, na, nb), (&av, &bv)| {
                let av = f64::from(av);
                let bv = f64::from(bv);
                (dot + av * bv, na + av * av, nb + bv * bv)
            });

    let norm_a = norm_a_sq.sqrt();
    let norm_b = norm_b_sq.sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        None
    } else {
        Some((1.0 - dot / (norm_a * norm_b)).clamp(0.0, 2.0))
    }
}

/// Distance for each position of two aligned vector sequences.
///
/// Every vector on both sides must share the dimensionality of `left[0]`, which must be
/// non-zero.
pub fn compare_pairs<A, B>(
    left: &[A],
    right: &[B],
    policy: ZeroNormPolicy,
) -> SimilarityResult<Vec<f64>>
where
    A: AsRef<[f32]>,
    B: AsRef<[f32]>,
{
    if left.len() != right.len() {
        return Err(SimilarityError::LengthMismatch {
            left: left.len(),
            right: right.len(),
        });
    }

    let Some(first) = left.first() else {
        return Ok(Vec::new());
    };
    let dim = first.as_ref().len();
    if dim == 0 {
        return Err(DimValidationError::ZeroDimension.into());
    }

    let mut scorer = DistanceScorer::new(policy, dim);
    let distances = left
        .iter()
        .zip(right.iter())
        .enumerate()
        .map(|(position, (a, b))| scorer.score(position, a.as_ref(), b.as_ref()))
        .collect::<SimilarityResult<Vec<_>>>()?;
    scorer.finish();

    Ok(distances)
}

/// Distance for every pair, in pair-list order.
///
/// `index_a` reads from `features1` and `index_b` from `features2`, falling back to `features1`
/// when no second table is supplied.
pub fn pair_similarities(
    pairs: &PairList,
    features1: &FeatureTable,
    features2: Option<&FeatureTable>,
    policy: ZeroNormPolicy,
) -> SimilarityResult<Vec<f64>> {
    let features2 = features2.unwrap_or(features1);
    validate_feature_dim(features2.dim(), features1.dim())?;

    let mut scorer = DistanceScorer::new(policy, features1.dim());
    let distances = pairs
        .iter()
        .enumerate()
        .map(|(position, pair)| {
            let a = features1.row(pair.index_a)?;
            let b = features2.row(pair.index_b)?;
            scorer.score(position, a, b)
        })
        .collect::<SimilarityResult<Vec<_>>>()?;
    scorer.finish();

    Ok(distances)
}

struct DistanceScorer {
    policy: ZeroNormPolicy,
    dim: usize,
    neutral_hits: usize,
}

impl DistanceScorer {
    fn new(policy: ZeroNormPolicy, dim: usize) -> Self {
        Self {
            policy,
            dim,
            neutral_hits: 0,
        }
    }

    fn score(&mut self, position: usize, a: &[f32], b: &[f32]) -> SimilarityResult<f64> {
        if let Some(actual) = [a.len(), b.len()].into_iter().find(|&len| len != self.dim) {
            return Err(SimilarityError::DimensionMismatch {
                position,
                expected: self.dim,
                actual,
            });
        }

        match cosine_distance(a, b) {
            Some(distance) => Ok(distance),
            None => match self.policy {
                ZeroNormPolicy::Reject => Err(SimilarityError::ZeroNorm { position }),
                ZeroNormPolicy::Neutral => {
                    self.neutral_hits += 1;
                    Ok(NEUTRAL_DISTANCE)
                }
            },
        }
    }

    fn finish(self) {
        if self.neutral_hits > 0 {
            warn!(
                count = self.neutral_hits,
                distance = NEUTRAL_DISTANCE,
                "Zero-norm vectors scored with neutral distance"
            );
        }
    }
}
