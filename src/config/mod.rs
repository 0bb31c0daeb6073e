//! Environment-backed configuration for the evaluation harness.
//!
//! Most settings have defaults. Override with `PAIRVAL_*` environment variables. The input
//! paths and the feature dimension have no sensible default and are enforced by
//! [`Config::validate`].

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::env;
use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_KFOLD, DEFAULT_TOP_K};
use crate::evaluation::EvaluatorConfig;
use crate::features::FeatureDtype;
use crate::similarity::ZeroNormPolicy;

/// Harness configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `PAIRVAL_*` overrides on top of defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Pair list (`index_a index_b label` per line).
    pub pairs_path: Option<PathBuf>,

    /// Raw feature file indexed by `index_a` (and `index_b` when no second file is set).
    pub features_path: Option<PathBuf>,

    /// Optional second raw feature file indexed by `index_b`.
    pub features2_path: Option<PathBuf>,

    /// Values per feature vector.
    pub feature_dim: Option<usize>,

    /// Element type of the raw feature files. Default: `f32`.
    pub feature_dtype: FeatureDtype,

    /// Cross-validation folds. Default: `10`.
    pub kfold: usize,

    /// Pairs per top-pair category. Default: `5`.
    pub top_k: usize,

    /// Zero-norm handling. Default: `reject`.
    pub zero_norm: ZeroNormPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pairs_path: None,
            features_path: None,
            features2_path: None,
            feature_dim: None,
            feature_dtype: FeatureDtype::default(),
            kfold: DEFAULT_KFOLD,
            top_k: DEFAULT_TOP_K,
            zero_norm: ZeroNormPolicy::default(),
        }
    }
}

impl Config {
    pub const ENV_PAIRS_PATH: &'static str = "PAIRVAL_PAIRS_PATH";
    pub const ENV_FEATURES_PATH: &'static str = "PAIRVAL_FEATURES_PATH";
    pub const ENV_FEATURES2_PATH: &'static str = "PAIRVAL_FEATURES2_PATH";
    pub const ENV_FEATURE_DIM: &'static str = "PAIRVAL_FEATURE_DIM";
    pub const ENV_FEATURE_DTYPE: &'static str = "PAIRVAL_FEATURE_DTYPE";
    pub const ENV_KFOLD: &'static str = "PAIRVAL_KFOLD";
    pub const ENV_TOP_K: &'static str = "PAIRVAL_TOP_K";
    pub const ENV_ZERO_NORM: &'static str = "PAIRVAL_ZERO_NORM";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let pairs_path = Self::parse_optional_path_from_env(Self::ENV_PAIRS_PATH);
        let features_path = Self::parse_optional_path_from_env(Self::ENV_FEATURES_PATH);
        let features2_path = Self::parse_optional_path_from_env(Self::ENV_FEATURES2_PATH);
        let feature_dim = Self::parse_optional_positive_from_env(Self::ENV_FEATURE_DIM)?;
        let kfold =
            Self::parse_optional_positive_from_env(Self::ENV_KFOLD)?.unwrap_or(defaults.kfold);
        let top_k =
            Self::parse_optional_positive_from_env(Self::ENV_TOP_K)?.unwrap_or(defaults.top_k);

        let feature_dtype = match Self::read_trimmed(Self::ENV_FEATURE_DTYPE) {
            Some(value) => value.parse::<FeatureDtype>().map_err(|e| {
                ConfigError::InvalidChoice {
                    name: Self::ENV_FEATURE_DTYPE,
                    reason: e.to_string(),
                }
            })?,
            None => defaults.feature_dtype,
        };

        let zero_norm = match Self::read_trimmed(Self::ENV_ZERO_NORM) {
            Some(value) => value.parse::<ZeroNormPolicy>().map_err(|e| {
                ConfigError::InvalidChoice {
                    name: Self::ENV_ZERO_NORM,
                    reason: e.to_string(),
                }
            })?,
            None => defaults.zero_norm,
        };

        Ok(Self {
            pairs_path,
            features_path,
            features2_path,
            feature_dim,
            feature_dtype,
            kfold,
            top_k,
            zero_norm,
        })
    }

    /// Checks that the inputs needed for a run are present (does not read them).
    pub fn validate(&self) -> Result<(), ConfigError> {
        let pairs_path = self.pairs_path.as_ref().ok_or(ConfigError::MissingEnvVar {
            name: Self::ENV_PAIRS_PATH,
        })?;
        let features_path = self
            .features_path
            .as_ref()
            .ok_or(ConfigError::MissingEnvVar {
                name: Self::ENV_FEATURES_PATH,
            })?;
        if self.feature_dim.is_none() {
            return Err(ConfigError::MissingEnvVar {
                name: Self::ENV_FEATURE_DIM,
            });
        }

        Self::require_file(pairs_path)?;
        Self::require_file(features_path)?;
        if let Some(ref path) = self.features2_path {
            Self::require_file(path)?;
        }

        Ok(())
    }

    /// Options for the cross-validated evaluator.
    pub fn evaluator_config(&self) -> EvaluatorConfig {
        EvaluatorConfig {
            kfold: self.kfold,
            zero_norm: self.zero_norm,
        }
    }

    fn require_file(path: &Path) -> Result<(), ConfigError> {
        if !path.exists() {
            return Err(ConfigError::PathNotFound {
                path: path.to_path_buf(),
            });
        }
        if !path.is_file() {
            return Err(ConfigError::NotAFile {
                path: path.to_path_buf(),
            });
        }
        Ok(())
    }

    fn read_trimmed(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        Self::read_trimmed(var_name).map(PathBuf::from)
    }

    fn parse_optional_positive_from_env(
        var_name: &'static str,
    ) -> Result<Option<usize>, ConfigError> {
        let Some(value) = Self::read_trimmed(var_name) else {
            return Ok(None);
        };

        let parsed: usize = value.parse().map_err(|e| ConfigError::InvalidNumber {
            name: var_name,
            value: value.clone(),
            source: e,
        })?;

        if parsed == 0 {
            return Err(ConfigError::NotPositive {
                name: var_name,
                value,
            });
        }

        Ok(Some(parsed))
    }
}
