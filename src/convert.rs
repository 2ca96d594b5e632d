//! Conversions between byte buffers and bit sequences.
//!
//! Bytes expand most-significant bit first. Packing goes the other way, except
//! that a trailing group shorter than a byte lands in the least significant
//! bits of the last byte, so `100` packs to `0x04`.

use bitvec::prelude::*;

/// Bits per byte
pub const BITS_PER_BYTE: usize = 8;

/// Expands each byte into 8 bits, most significant first.
pub fn bytes_to_bits(bytes: &[u8]) -> BitVec<u8, Msb0> {
    BitVec::<u8, Msb0>::from_slice(bytes)
}

/// Packs bits into bytes, most significant first. A partial final group is
/// right-aligned in its byte.
pub fn bits_to_bytes(bits: &BitSlice<u8, Msb0>) -> Vec<u8> {
    bits.chunks(BITS_PER_BYTE)
        .map(|chunk| {
            chunk
                .iter()
                .by_vals()
                .fold(0u8, |byte, bit| (byte << 1) | bit as u8)
        })
        .collect()
}
