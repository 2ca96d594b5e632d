//! Hamming single-error-correction, double-error-detection (SECDED) codes for
//! bit sequences of any length.
//!
//! ```rust
//! use secded::{decode, encode, Error};
//! use bitvec::prelude::*;
//!
//! let block = encode(bits![u8, Msb0; 0, 0, 1, 1]).unwrap();
//!
//! // Two flipped bits are detected but not corrected
//! let mut corrupted = block.clone();
//! corrupted.set(1, !block[1]);
//! corrupted.set(2, !block[2]);
//! assert!(matches!(decode(&corrupted), Err(Error::Uncorrectable { .. })));
//! ```

pub mod convert;
pub mod ecc;
pub mod error;
#[cfg(feature = "parallel")]
pub mod parallel;

pub use convert::{bits_to_bytes, bytes_to_bits};
pub use ecc::{
    decode, decode_detailed, encode, DataBits, DecodeOutcome, EncodedBlock, ErrorCorrection,
    HammingSecded,
};
pub use error::{Error, Result};
