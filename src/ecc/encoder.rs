//! SECDED block assembly.

use crate::ecc::bits::powers_of_two;
use crate::ecc::coverage::{data_positions, overall_parity, parity};
use crate::ecc::sizing::parity_bits_needed;
use crate::ecc::EncodedBlock;
use crate::error::Result;
use bitvec::prelude::*;

/// Encodes `data` into a SECDED block of `len + parity_bits_needed(len) + 1`
/// bits.
///
/// Position 0 holds the overall parity bit, the power-of-two positions hold
/// the Hamming parity bits and the rest carry `data` in order. All parity is
/// even.
///
/// # Errors
/// Returns an error if `data` is empty.
///
/// # Example
/// ```
/// use secded::ecc::encode;
/// use bitvec::prelude::*;
///
/// let block = encode(bits![u8, Msb0; 0, 0, 1, 1]).unwrap();
/// assert_eq!(block, bitvec![u8, Msb0; 1, 1, 0, 0, 0, 0, 1, 1]);
/// ```
pub fn encode(data: &BitSlice<u8, Msb0>) -> Result<EncodedBlock> {
    let data_len = data.len();
    let parity_bits = parity_bits_needed(data_len)?;
    let block_len = data_len + parity_bits + 1;

    let mut block = bitvec![u8, Msb0; 0; block_len];

    for position in powers_of_two(parity_bits) {
        block.set(position, parity(data, position)?);
    }

    for (position, bit) in data_positions(block_len).zip(data.iter().by_vals()) {
        block.set(position, bit);
    }

    let overall = overall_parity(&block[1..]);
    block.set(0, overall);

    Ok(block)
}
