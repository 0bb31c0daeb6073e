use serde::Serialize;

use crate::pairs::Pair;

/// One ranked category of pairs, stored column-wise.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PairGroup {
    pub index_a: Vec<usize>,
    pub index_b: Vec<usize>,
    pub similarities: Vec<f64>,
}

impl PairGroup {
    pub(crate) fn from_ranked(ranked: &[(Pair, f64)]) -> Self {
        let mut group = Self {
            index_a: Vec::with_capacity(ranked.len()),
            index_b: Vec::with_capacity(ranked.len()),
            similarities: Vec::with_capacity(ranked.len()),
        };
        for (pair, similarity) in ranked {
            group.index_a.push(pair.index_a);
            group.index_b.push(pair.index_b);
            group.similarities.push(*similarity);
        }
        group
    }

    pub fn len(&self) -> usize {
        self.similarities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.similarities.is_empty()
    }

    /// All `index_a` values followed by all `index_b` values.
    pub fn column_major_indices(&self) -> Vec<usize> {
        self.index_a
            .iter()
            .chain(self.index_b.iter())
            .copied()
            .collect()
    }
}

/// The four ranked categories returned by [`top_pairs`](super::top_pairs).
///
/// Categories are assigned by ground truth and rank, not by a decision threshold:
/// - `true_positives`: same-identity pairs with the lowest distance
/// - `false_negatives`: same-identity pairs with the highest distance
/// - `true_negatives`: different-identity pairs with the highest distance
/// - `false_positives`: different-identity pairs with the lowest distance
///
/// Each group is in ascending distance order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TopPairs {
    pub true_positives: PairGroup,
    pub true_negatives: PairGroup,
    pub false_positives: PairGroup,
    pub false_negatives: PairGroup,
}

impl TopPairs {
    /// Groups in output order: TP, TN, FP, FN.
    pub fn groups(&self) -> [&PairGroup; 4] {
        [
            &self.true_positives,
            &self.true_negatives,
            &self.false_positives,
            &self.false_negatives,
        ]
    }

    /// Flat `(indices, similarities)` in TP, TN, FP, FN order, each group column-major.
    pub fn flatten(&self) -> FlatTopPairs {
        let mut flat = FlatTopPairs::default();
        for group in self.groups() {
            flat.indices.extend(group.column_major_indices());
            flat.similarities.extend_from_slice(&group.similarities);
        }
        flat
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FlatTopPairs {
    pub indices: Vec<usize>,
    pub similarities: Vec<f64>,
}
