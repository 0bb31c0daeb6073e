//! Ordered verification pairs.
//!
//! A pair list is the `(index_a, index_b, label)` table that drives every evaluation. Row order
//! is significant: cross-validation folds are contiguous slices of this list, so nothing here
//! ever sorts, dedups, or shuffles rows.
//!
//! The text format is one pair per line with three whitespace-separated integers. Blank lines
//! and lines starting with `#` are ignored.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::{PairError, PairResult};

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::hashing::hash_pairs;

/// Ground truth for a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// Different identities (`0`).
    Different,
    /// Same identity (`1`).
    Same,
}

impl Label {
    /// Returns `true` for [`Label::Same`].
    #[inline]
    pub fn is_positive(self) -> bool {
        matches!(self, Label::Same)
    }

    /// Numeric encoding used by pair files.
    #[inline]
    pub fn as_u8(self) -> u8 {
        match self {
            Label::Different => 0,
            Label::Same => 1,
        }
    }
}

impl TryFrom<i64> for Label {
    type Error = i64;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Label::Different),
            1 => Ok(Label::Same),
            other => Err(other),
        }
    }
}

/// One row of a pair list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pair {
    /// Row in the first feature table.
    pub index_a: usize,
    /// Row in the second feature table (or the first, when only one is supplied).
    pub index_b: usize,
    /// Ground truth.
    pub label: Label,
}

impl Pair {
    pub fn new(index_a: usize, index_b: usize, label: Label) -> Self {
        Self {
            index_a,
            index_b,
            label,
        }
    }
}

/// Immutable, order-preserving list of pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairList {
    pairs: Vec<Pair>,
}

impl PairList {
    pub fn new(pairs: Vec<Pair>) -> Self {
        Self { pairs }
    }

    /// Builds a list from a row-major `N x 3` integer table.
    pub fn from_rows(rows: &[[i64; 3]]) -> PairResult<Self> {
        let pairs = rows
            .iter()
            .enumerate()
            .map(|(row, &[a, b, label])| {
                let index_a = to_index(row, a)?;
                let index_b = to_index(row, b)?;
                let label = Label::try_from(label)
                    .map_err(|value| PairError::InvalidLabel { row, value })?;
                Ok(Pair::new(index_a, index_b, label))
            })
            .collect::<PairResult<Vec<_>>>()?;

        Ok(Self { pairs })
    }

    /// Parses the whitespace-separated text format.
    pub fn parse(text: &str) -> PairResult<Self> {
        let mut rows = Vec::new();

        for (idx, raw) in text.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let columns: Vec<&str> = line.split_whitespace().collect();
            if columns.len() != 3 {
                return Err(PairError::WrongColumnCount {
                    line: line_no,
                    found: columns.len(),
                });
            }

            let mut row = [0i64; 3];
            for (slot, value) in row.iter_mut().zip(&columns) {
                *slot = value.parse().map_err(|e| PairError::InvalidInteger {
                    line: line_no,
                    value: (*value).to_string(),
                    source: e,
                })?;
            }
            rows.push(row);
        }

        Self::from_rows(&rows)
    }

    /// Reads and parses a pair file.
    pub fn load<P: AsRef<Path>>(path: P) -> PairResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| PairError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let list = Self::parse(&text)?;
        debug!(
            path = %path.display(),
            pairs = list.len(),
            positives = list.positives(),
            "Loaded pair list"
        );
        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn as_slice(&self) -> &[Pair] {
        &self.pairs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pair> {
        self.pairs.iter()
    }

    /// Labels in input order.
    pub fn labels(&self) -> Vec<Label> {
        self.pairs.iter().map(|p| p.label).collect()
    }

    /// Number of same-identity pairs.
    pub fn positives(&self) -> usize {
        self.pairs.iter().filter(|p| p.label.is_positive()).count()
    }

    /// Order-sensitive content fingerprint (see [`hash_pairs`]).
    pub fn fingerprint(&self) -> u64 {
        hash_pairs(&self.pairs)
    }
}

impl<'a> IntoIterator for &'a PairList {
    type Item = &'a Pair;
    type IntoIter = std::slice::Iter<'a, Pair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

fn to_index(row: usize, value: i64) -> PairResult<usize> {
    usize::try_from(value).map_err(|_| PairError::NegativeIndex { row, value })
}
