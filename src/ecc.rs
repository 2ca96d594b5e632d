//! Hamming SECDED error correction.
//!
//! This module provides:
//! - Bit indexing helpers for the power-of-two parity layout
//! - Parity sizing from the Hamming bound
//! - The coverage rule mapping each parity bit to the data it protects
//! - Encoding and decoding of single SECDED blocks
//! - A byte-oriented block codec built on top of them
//!
//! # Examples
//!
//! ```rust
//! use secded::ecc::{decode, encode};
//! use bitvec::prelude::*;
//!
//! let data = bitvec![u8, Msb0; 0, 1, 1, 0, 0, 1, 0, 0, 1, 1, 0];
//! let mut block = encode(&data).unwrap();
//!
//! // Flip one bit and decode anyway
//! let bit = block[10];
//! block.set(10, !bit);
//! assert_eq!(decode(&block).unwrap(), data);
//! ```

use bitvec::prelude::*;

pub use crate::error::Result;

/// Message bits, in order.
pub type DataBits = BitVec<u8, Msb0>;

/// A full SECDED block: overall parity at position 0, Hamming parity at the
/// power-of-two positions and data everywhere else.
pub type EncodedBlock = BitVec<u8, Msb0>;

/// Trait for error correction code implementations
pub trait ErrorCorrection {
    /// Encode data with error correction symbols
    fn encode(&self, data: &[u8]) -> Result<Vec<u8>>;

    /// Decode data and correct errors if possible
    fn decode(&self, data: &[u8]) -> Result<Vec<u8>>;
}

pub mod bits;
pub mod coverage;
pub mod decoder;
pub mod encoder;
pub mod hamming;
pub mod sizing;

pub use coverage::{covered_data_indices, CoveredIndices};
pub use decoder::{decode, decode_detailed, DecodeOutcome};
pub use encoder::encode;
pub use hamming::{
    create_hamming, create_hamming_72_64, secded_decode, secded_encode, HammingSecded,
};
pub use sizing::{parity_bits_from_block_length, parity_bits_needed};
