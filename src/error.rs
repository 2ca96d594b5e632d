//! Error types shared by every codec in the crate.

use thiserror::Error;

/// Errors produced while sizing, encoding or decoding SECDED blocks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A length, parity position or block shape violated a precondition.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Input exceeded the configured maximum number of data bits.
    #[error("Input of {length} bits exceeds the maximum of {max_length} bits")]
    InputTooLarge { length: usize, max_length: usize },

    /// A nonzero syndrome was seen alongside a consistent overall parity bit,
    /// which is the signature of two flipped bits.
    #[error("Uncorrectable error detected (syndrome {syndrome})")]
    Uncorrectable { syndrome: usize },
}

impl Error {
    pub(crate) fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
