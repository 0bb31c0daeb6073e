//! Feature tables: dense `rows x dim` matrices of `f32` embeddings.
//!
//! Tables are immutable once built. Every constructor validates shape and rejects non-finite
//! values so downstream distances never see NaN or infinity from the inputs themselves.
//!
//! Raw files are flat little-endian arrays (no header) of either `f32` or `f16`; the row count
//! is inferred from the file size and the configured dimension.

pub mod error;
mod raw;


pub use error::{FeatureError, FeatureResult};
pub use raw::{FeatureDtype, decode_f16_le, decode_f32_le};

use std::fs::File;
use std::path::Path;

use memmap2::Mmap;
use tracing::debug;

use crate::constants::{DimValidationError, validate_feature_dim};

#[derive(Debug, Clone, PartialEq)]
/// Row-major feature matrix.
pub struct FeatureTable {
    data: Vec<f32>,
    dim: usize,
}

impl FeatureTable {
    /// Wraps a flat row-major buffer.
    pub fn new(data: Vec<f32>, dim: usize) -> FeatureResult<Self> {
        if dim == 0 {
            return Err(DimValidationError::ZeroDimension.into());
        }
        if !data.len().is_multiple_of(dim) {
            return Err(FeatureError::RaggedBuffer {
                len: data.len(),
                dim,
            });
        }
        if let Some(pos) = data.iter().position(|v| !v.is_finite()) {
            return Err(FeatureError::NonFinite {
                row: pos / dim,
                column: pos % dim,
            });
        }

        Ok(Self { data, dim })
    }

    /// Builds a table from individual rows; every row must share the first row's length.
    pub fn from_rows<R: AsRef<[f32]>>(rows: &[R]) -> FeatureResult<Self> {
        let Some(first) = rows.first() else {
            return Err(DimValidationError::ZeroDimension.into());
        };
        let dim = first.as_ref().len();

        let mut data = Vec::with_capacity(dim * rows.len());
        for row in rows {
            let row = row.as_ref();
            validate_feature_dim(row.len(), dim)?;
            data.extend_from_slice(row);
        }

        Self::new(data, dim)
    }

    /// Decodes a raw little-endian buffer of `dtype` values.
    pub fn from_bytes(bytes: &[u8], dim: usize, dtype: FeatureDtype) -> FeatureResult<Self> {
        if dim == 0 {
            return Err(DimValidationError::ZeroDimension.into());
        }
        let row_bytes = dim * dtype.element_size();
        if !bytes.len().is_multiple_of(row_bytes) {
            return Err(FeatureError::FileSizeMismatch {
                bytes: bytes.len(),
                row_bytes,
            });
        }

        let data = match dtype {
            FeatureDtype::F32 => decode_f32_le(bytes),
            FeatureDtype::F16 => decode_f16_le(bytes),
        };

        Self::new(data, dim)
    }

    /// Memory-maps a raw feature file read-only and decodes it.
    pub fn open<P: AsRef<Path>>(path: P, dim: usize, dtype: FeatureDtype) -> FeatureResult<Self> {
        let path = path.as_ref();
        let io_err = |source| FeatureError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(io_err)?;
        let file_len = file.metadata().map_err(io_err)?.len();
        if file_len == 0 {
            return Err(FeatureError::EmptyFile {
                path: path.to_path_buf(),
            });
        }

        // SAFETY: The mapping is read-only and dropped before returning.
        // The caller must ensure no concurrent writers modify the file.
        let mmap = unsafe { Mmap::map(&file) }.map_err(io_err)?;
        let table = Self::from_bytes(&mmap, dim, dtype)?;

        debug!(
            path = %path.display(),
            rows = table.len(),
            dim = table.dim(),
            dtype = %dtype,
            "Loaded feature table"
        );

        Ok(table)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.data.len() / self.dim
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Vector dimensionality.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Bounds-checked row access.
    pub fn row(&self, index: usize) -> FeatureResult<&[f32]> {
        let start = index
            .checked_mul(self.dim)
            .filter(|&start| start < self.data.len())
            .ok_or(FeatureError::IndexOutOfRange {
                index,
                rows: self.len(),
            })?;
        Ok(&self.data[start..start + self.dim])
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}
