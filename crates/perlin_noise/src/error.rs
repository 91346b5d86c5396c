//! # Noise Error Types
//!
//! All errors that can occur while building or configuring the noise engine.
//! Sampling itself never fails.

use thiserror::Error;

/// Errors that can occur in the noise engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NoiseError {
    /// Area or chunk dimensions were not positive.
    #[error("invalid dimension: width {width}, height {height}, chunk size {chunk_size} must all be positive")]
    InvalidDimension {
        /// Requested area width.
        width: u32,
        /// Requested area height.
        height: u32,
        /// Requested chunk size.
        chunk_size: u32,
    },

    /// An explicit gradient list does not cover the lattice.
    #[error("gradient count mismatch: lattice needs {expected}, got {actual}")]
    GradientCountMismatch {
        /// Number of lattice corners (`cols * rows`).
        expected: usize,
        /// Number of gradients supplied.
        actual: usize,
    },

    /// A parameter was outside its documented domain.
    #[error("invalid parameter {name}: {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// The rejected value.
        value: String,
    },

    /// Invalid configuration file.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be read.
    #[error("io error: {0}")]
    Io(String),
}

impl NoiseError {
    /// Builds an [`NoiseError::InvalidParameter`] from any displayable value.
    pub(crate) fn parameter(name: &'static str, value: impl ToString) -> Self {
        Self::InvalidParameter {
            name,
            value: value.to_string(),
        }
    }
}

/// Result type for noise engine operations.
pub type NoiseResult<T> = Result<T, NoiseError>;
