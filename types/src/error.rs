//! Top-level error type shared across crates.

use thiserror::Error;

/// Common error type for parsing and validating Cinder primitives.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CinderError {
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid ordinal: {0}")]
    InvalidOrdinal(String),
}
