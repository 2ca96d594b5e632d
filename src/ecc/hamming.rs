//! Byte-oriented Hamming SECDED codec.
//!
//! Hamming codes are a family of linear error-correcting codes developed by Richard Hamming in 1950.
//! Extending a Hamming code with one overall parity bit gives SECDED: any single flipped bit is
//! corrected and any two flipped bits are detected. The most common memory layout protects 64
//! data bits with 7 Hamming parity bits and the overall bit, giving a 72-bit block.
//!
//! This implementation provides:
//! - Splitting byte streams into fixed-size SECDED blocks
//! - Decoding with per-block single-bit correction and double-error detection
//! - A configurable ceiling on the data bits a single block may carry
//!
//! # Applications
//!
//! - Computer memory (ECC RAM)
//! - Satellite communications
//! - Data storage systems

use crate::convert::{bytes_to_bits, BITS_PER_BYTE};
use crate::ecc::decoder::{decode_detailed, DecodeOutcome};
use crate::ecc::sizing::encoded_length;
use crate::ecc::{encoder, DataBits, EncodedBlock, ErrorCorrection, Result};
use crate::error::Error;
use bitvec::prelude::*;
use log::{debug, trace, warn};

/// Data bytes per block in the (72,64) layout
const ECC_72_64_BLOCK_BYTES: usize = 8;

/// Represents a Hamming SECDED codec configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HammingSecded {
    /// Number of data bytes per block
    block_bytes: usize,
    /// Encoded length of a full block in bits
    total_bits: usize,
}

impl HammingSecded {
    /// Creates a new SECDED codec configuration.
    ///
    /// # Arguments
    ///
    /// * `block_bytes` - Number of data bytes protected by each block
    ///
    /// # Returns
    ///
    /// A new `HammingSecded` instance or an error if invalid parameters
    pub fn new(block_bytes: usize) -> Result<Self> {
        if block_bytes == 0 {
            return Err(Error::InvalidInput(
                "Block size must be positive".to_string(),
            ));
        }

        let max_data_bits = block_bytes.checked_mul(BITS_PER_BYTE).ok_or_else(|| {
            Error::InvalidInput(format!("Block size of {} bytes is too large", block_bytes))
        })?;

        Ok(HammingSecded {
            block_bytes,
            total_bits: encoded_length(max_data_bits)?,
        })
    }

    /// Creates the (72,64) codec used by ECC memory
    pub fn ecc_72_64() -> Self {
        HammingSecded {
            block_bytes: ECC_72_64_BLOCK_BYTES,
            total_bits: 72,
        }
    }

    /// Gets the number of data bytes per block
    pub fn block_bytes(&self) -> usize {
        self.block_bytes
    }

    /// Gets the maximum number of data bits a single block may carry
    pub fn max_data_bits(&self) -> usize {
        self.block_bytes * BITS_PER_BYTE
    }

    /// Gets the length of a full encoded block in bits
    pub fn total_bits(&self) -> usize {
        self.total_bits
    }

    /// Gets the number of encoded bytes produced for a given number of input bytes
    pub fn encoded_bytes_needed(&self, input_bytes: usize) -> Result<usize> {
        let full_blocks = input_bytes / self.block_bytes;
        let remainder = input_bytes % self.block_bytes;

        let mut total_bits = full_blocks * self.total_bits;
        if remainder > 0 {
            total_bits += encoded_length(remainder * BITS_PER_BYTE)?;
        }

        Ok(total_bits.div_ceil(BITS_PER_BYTE))
    }

    /// Encodes a bit sequence as a single SECDED block
    ///
    /// # Errors
    ///
    /// Returns `InputTooLarge` if `data` holds more than [`max_data_bits`](Self::max_data_bits)
    /// bits, or `InvalidInput` if it is empty.
    pub fn encode_bits(&self, data: &BitSlice<u8, Msb0>) -> Result<EncodedBlock> {
        if data.len() > self.max_data_bits() {
            return Err(Error::InputTooLarge {
                length: data.len(),
                max_length: self.max_data_bits(),
            });
        }

        encoder::encode(data)
    }

    /// Decodes a single SECDED block produced by [`encode_bits`](Self::encode_bits)
    pub fn decode_bits(&self, block: &BitSlice<u8, Msb0>) -> Result<DataBits> {
        if block.len() > self.total_bits {
            return Err(Error::InputTooLarge {
                length: block.len(),
                max_length: self.total_bits,
            });
        }

        decode_detailed(block).map(|(data, _)| data)
    }

    /// Decodes one block of a stream, logging any correction
    fn decode_block(&self, index: usize, block: &BitSlice<u8, Msb0>) -> Result<DataBits> {
        match decode_detailed(block) {
            Ok((data, DecodeOutcome::Clean)) => Ok(data),
            Ok((data, outcome)) => {
                debug!("Block {}: {:?}", index, outcome);
                Ok(data)
            }
            Err(err @ Error::Uncorrectable { .. }) => {
                warn!("Block {} could not be recovered: {}", index, err);
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    /// Finds the length of the short final block hidden in `tail_bits`
    /// trailing bits, if there is one.
    fn short_block_length(&self, tail_bits: usize) -> Result<Option<usize>> {
        // Shorter than the smallest block, so it can only be padding
        if tail_bits < BITS_PER_BYTE {
            return Ok(None);
        }

        for data_bytes in 1..self.block_bytes {
            let block_len = encoded_length(data_bytes * BITS_PER_BYTE)?;
            if block_len > tail_bits {
                break;
            }
            if tail_bits - block_len < BITS_PER_BYTE {
                return Ok(Some(block_len));
            }
        }

        Err(Error::InvalidInput(format!(
            "Trailing {} bits do not form a SECDED block",
            tail_bits
        )))
    }
}

impl Default for HammingSecded {
    fn default() -> Self {
        Self::ecc_72_64()
    }
}

impl ErrorCorrection for HammingSecded {
    /// Encodes a byte slice block by block; the last block may be short
    fn encode(&self, data: &[u8]) -> Result<Vec<u8>> {
        if data.is_empty() {
            return Ok(Vec::new());
        }

        let out_bytes = self.encoded_bytes_needed(data.len())?;
        let mut encoded = BitVec::<u8, Msb0>::with_capacity(out_bytes * BITS_PER_BYTE);

        for chunk in data.chunks(self.block_bytes) {
            let block = encoder::encode(&bytes_to_bits(chunk))?;
            encoded.extend_from_bitslice(block.as_bitslice());
        }

        trace!(
            "Encoded {} bytes into {} bits ({} byte blocks)",
            data.len(),
            encoded.len(),
            self.block_bytes
        );

        // Zero-pad the final byte
        encoded.resize(out_bytes * BITS_PER_BYTE, false);
        Ok(encoded.into_vec())
    }

    /// Decodes a byte slice produced by [`encode`](ErrorCorrection::encode)
    fn decode(&self, encoded: &[u8]) -> Result<Vec<u8>> {
        if encoded.is_empty() {
            return Ok(Vec::new());
        }

        let encoded_bits = encoded.view_bits::<Msb0>();
        let full_blocks = encoded_bits.len() / self.total_bits;
        let (blocks, tail) = encoded_bits.split_at(full_blocks * self.total_bits);

        let mut decoded =
            BitVec::<u8, Msb0>::with_capacity((full_blocks + 1) * self.max_data_bits());

        for (index, block) in blocks.chunks_exact(self.total_bits).enumerate() {
            decoded.extend_from_bitslice(self.decode_block(index, block)?.as_bitslice());
        }

        if let Some(block_len) = self.short_block_length(tail.len())? {
            decoded.extend_from_bitslice(
                self.decode_block(full_blocks, &tail[..block_len])?
                    .as_bitslice(),
            );
        }

        trace!(
            "Decoded {} bytes from {} blocks",
            decoded.len() / BITS_PER_BYTE,
            full_blocks + usize::from(tail.len() >= BITS_PER_BYTE)
        );

        Ok(decoded.into_vec())
    }
}

/// Creates the (72,64) SECDED codec
pub fn create_hamming_72_64() -> HammingSecded {
    HammingSecded::ecc_72_64()
}

/// Creates a SECDED codec protecting `block_bytes` data bytes per block
pub fn create_hamming(block_bytes: usize) -> Result<HammingSecded> {
    HammingSecded::new(block_bytes)
}

/// Encodes data using the (72,64) SECDED codec
pub fn secded_encode(data: &[u8]) -> Result<Vec<u8>> {
    create_hamming_72_64().encode(data)
}

/// Decodes data using the (72,64) SECDED codec
pub fn secded_decode(encoded: &[u8]) -> Result<Vec<u8>> {
    create_hamming_72_64().decode(encoded)
}
