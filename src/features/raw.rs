use half::f16;

use super::error::FeatureError;

/// Element type of a raw feature file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeatureDtype {
    #[default]
    F32,
    F16,
}

impl FeatureDtype {
    /// Bytes per stored element.
    pub fn element_size(self) -> usize {
        match self {
            FeatureDtype::F32 => 4,
            FeatureDtype::F16 => 2,
        }
    }
}

impl std::fmt::Display for FeatureDtype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeatureDtype::F32 => write!(f, "f32"),
            FeatureDtype::F16 => write!(f, "f16"),
        }
    }
}

impl std::str::FromStr for FeatureDtype {
    type Err = FeatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "f32" | "float32" => Ok(Self::F32),
            "f16" | "float16" | "half" => Ok(Self::F16),
            other => Err(FeatureError::UnknownDtype(other.to_string())),
        }
    }
}

/// Decodes little-endian `f32` values. Trailing bytes that do not form a whole value are ignored.
///
/// On little-endian targets an aligned buffer (e.g. a page-aligned mmap) is reinterpreted in
/// place with bytemuck before copying; otherwise values are assembled byte by byte.
pub fn decode_f32_le(bytes: &[u8]) -> Vec<f32> {
    let whole = &bytes[..bytes.len() - bytes.len() % 4];
    if cfg!(target_endian = "little")
        && let Ok(values) = bytemuck::try_cast_slice::<u8, f32>(whole)
    {
        return values.to_vec();
    }

    whole
        .chunks_exact(4)
        .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect()
}

/// Decodes little-endian `f16` values into `f32`.
pub fn decode_f16_le(bytes: &[u8]) -> Vec<f32> {
    let whole = &bytes[..bytes.len() - bytes.len() % 2];
    if cfg!(target_endian = "little")
        && let Ok(values) = bytemuck::try_cast_slice::<u8, f16>(whole)
    {
        return values.iter().map(|v| v.to_f32()).collect();
    }

    whole
        .chunks_exact(2)
        .map(|c| f16::from_le_bytes([c[0], c[1]]).to_f32())
        .collect()
}
