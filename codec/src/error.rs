//! Codec parse errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("invalid hex word: {0}")]
    InvalidHex(String),

    #[error("word has {0} hex digits, at most 64 allowed")]
    TooLong(usize),

    #[error("word is empty")]
    Empty,
}
