//! Ranked example pairs for inspection.
//!
//! Positives and negatives are ranked separately by ascending distance. The extremes of each
//! ranking are the clearest correct decisions and the hardest mistakes. A class smaller than
//! `k` is returned whole; nothing is padded.

pub mod error;
pub mod types;


pub use error::{SelectionError, SelectionResult};
pub use types::{FlatTopPairs, PairGroup, TopPairs};

use tracing::debug;

use crate::features::FeatureTable;
use crate::pairs::{Pair, PairList};
use crate::similarity::{ZeroNormPolicy, pair_similarities};

/// Top `k` pairs per category, rejecting zero-norm vectors.
pub fn top_pairs(
    pairs: &PairList,
    features1: &FeatureTable,
    features2: Option<&FeatureTable>,
    k: usize,
) -> SelectionResult<TopPairs> {
    top_pairs_with(pairs, features1, features2, k, ZeroNormPolicy::default())
}

pub fn top_pairs_with(
    pairs: &PairList,
    features1: &FeatureTable,
    features2: Option<&FeatureTable>,
    k: usize,
    zero_norm: ZeroNormPolicy,
) -> SelectionResult<TopPairs> {
    if k == 0 {
        return Err(SelectionError::ZeroK);
    }
    let similarities = pair_similarities(pairs, features1, features2, zero_norm)?;
    rank_pairs(pairs, &similarities, k)
}

/// Ranking step over precomputed similarities (aligned with `pairs`).
pub fn rank_pairs(pairs: &PairList, similarities: &[f64], k: usize) -> SelectionResult<TopPairs> {
    if k == 0 {
        return Err(SelectionError::ZeroK);
    }
    if pairs.len() != similarities.len() {
        return Err(SelectionError::LengthMismatch {
            pairs: pairs.len(),
            similarities: similarities.len(),
        });
    }

    let (mut positives, mut negatives): (Vec<(Pair, f64)>, Vec<(Pair, f64)>) = pairs
        .iter()
        .copied()
        .zip(similarities.iter().copied())
        .partition(|(pair, _)| pair.label.is_positive());

    // Stable: equal distances keep input order.
    positives.sort_by(|a, b| a.1.total_cmp(&b.1));
    negatives.sort_by(|a, b| a.1.total_cmp(&b.1));

    debug!(
        positives = positives.len(),
        negatives = negatives.len(),
        k,
        "Ranking pairs"
    );

    Ok(TopPairs {
        true_positives: PairGroup::from_ranked(lowest(&positives, k)),
        true_negatives: PairGroup::from_ranked(highest(&negatives, k)),
        false_positives: PairGroup::from_ranked(lowest(&negatives, k)),
        false_negatives: PairGroup::from_ranked(highest(&positives, k)),
    })
}

fn lowest<T>(ranked: &[T], k: usize) -> &[T] {
    &ranked[..k.min(ranked.len())]
}

fn highest<T>(ranked: &[T], k: usize) -> &[T] {
    &ranked[ranked.len() - k.min(ranked.len())..]
}
