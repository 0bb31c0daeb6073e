//! Test fixtures for integration tests.
//!
//! Synthetic datasets put every identity on its own axis and add a per-identity amount of
//! noise along a per-sample axis, so genuine and impostor distances are well separated and
//! known in closed form.

use std::io::Write;

use pairval::features::FeatureTable;
use pairval::pairs::{Label, Pair, PairList};
use tempfile::NamedTempFile;

pub const DEFAULT_IDENTITIES: usize = 10;

pub const DEFAULT_SAMPLES: usize = 3;

pub const DEFAULT_MAX_NOISE: f32 = 0.3;

pub struct Dataset {
    pub table: FeatureTable,
    pub pairs: PairList,
}

#[derive(Default)]
pub struct DatasetBuilder {
    identities: Option<usize>,
    samples: Option<usize>,
    max_noise: Option<f32>,
    flipped: Vec<usize>,
}

impl DatasetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn identities(mut self, count: usize) -> Self {
        self.identities = Some(count);
        self
    }

    pub fn samples(mut self, count: usize) -> Self {
        self.samples = Some(count);
        self
    }

    pub fn max_noise(mut self, noise: f32) -> Self {
        self.max_noise = Some(noise);
        self
    }

    /// Inverts the label of the pair at `position`.
    pub fn flip_label(mut self, position: usize) -> Self {
        self.flipped.push(position);
        self
    }

    pub fn build(self) -> Dataset {
        let identities = self.identities.unwrap_or(DEFAULT_IDENTITIES);
        let samples = self.samples.unwrap_or(DEFAULT_SAMPLES);
        let max_noise = self.max_noise.unwrap_or(DEFAULT_MAX_NOISE);
        let dim = identities + samples;

        let mut rows = Vec::with_capacity(identities * samples);
        for identity in 0..identities {
            let noise = max_noise * (identity + 1) as f32 / identities as f32;
            for sample in 0..samples {
                let mut row = vec![0.0f32; dim];
                row[identity] = 1.0;
                row[identities + sample] = noise;
                rows.push(row);
            }
        }
        let table = FeatureTable::from_rows(&rows).expect("synthetic rows are valid");

        // Genuine and impostor pairs interleaved so every even-sized fold sees both.
        let row_of = |identity: usize, sample: usize| identity * samples + sample;
        let mut pairs = Vec::new();
        for identity in 0..identities {
            for sample in 0..samples.saturating_sub(1) {
                pairs.push(Pair::new(
                    row_of(identity, sample),
                    row_of(identity, sample + 1),
                    Label::Same,
                ));
                pairs.push(Pair::new(
                    row_of(identity, sample),
                    row_of((identity + 1) % identities, sample),
                    Label::Different,
                ));
            }
        }
        for position in self.flipped {
            let pair = pairs[position];
            let label = if pair.label.is_positive() {
                Label::Different
            } else {
                Label::Same
            };
            pairs[position] = Pair::new(pair.index_a, pair.index_b, label);
        }

        Dataset {
            table,
            pairs: PairList::new(pairs),
        }
    }
}

/// Writes pairs in the whitespace-separated text format.
pub fn write_pair_file(pairs: &PairList) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create pair file");
    writeln!(file, "# index_a index_b label").expect("write header");
    for pair in pairs {
        writeln!(file, "{} {} {}", pair.index_a, pair.index_b, pair.label.as_u8())
            .expect("write pair");
    }
    file.flush().expect("flush pair file");
    file
}

pub fn write_f32_features(table: &FeatureTable) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create feature file");
    for value in table.as_slice() {
        file.write_all(&value.to_le_bytes()).expect("write value");
    }
    file.flush().expect("flush feature file");
    file
}

pub fn write_f16_features(table: &FeatureTable) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create feature file");
    for value in table.as_slice() {
        file.write_all(&half::f16::from_f32(*value).to_le_bytes())
            .expect("write value");
    }
    file.flush().expect("flush feature file");
    file
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let dataset = DatasetBuilder::new().build();

        assert_eq!(dataset.table.len(), DEFAULT_IDENTITIES * DEFAULT_SAMPLES);
        assert_eq!(dataset.table.dim(), DEFAULT_IDENTITIES + DEFAULT_SAMPLES);
        assert_eq!(
            dataset.pairs.len(),
            DEFAULT_IDENTITIES * (DEFAULT_SAMPLES - 1) * 2
        );
        assert_eq!(dataset.pairs.positives(), dataset.pairs.len() / 2);
    }

    #[test]
    fn test_flip_label() {
        let dataset = DatasetBuilder::new().flip_label(0).build();
        assert_eq!(dataset.pairs.as_slice()[0].label, Label::Different);
    }
}
