//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A numeric variable could not be parsed.
    #[error("failed to parse {name}='{value}': {source}")]
    InvalidNumber {
        name: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// A numeric variable parsed but must be positive.
    #[error("{name} must be a positive integer, got '{value}'")]
    NotPositive { name: &'static str, value: String },

    /// An enumerated variable (dtype, zero-norm policy) had an unknown value.
    #[error("invalid value for {name}: {reason}")]
    InvalidChoice { name: &'static str, reason: String },

    /// A variable the harness cannot run without was not set.
    #[error("missing required environment variable: {name}")]
    MissingEnvVar { name: &'static str },

    /// Specified path does not exist on the filesystem.
    #[error("path does not exist: {path}")]
    PathNotFound { path: PathBuf },

    /// Path exists but is not a file (when a file was expected).
    #[error("path is not a file: {path}")]
    NotAFile { path: PathBuf },
}
