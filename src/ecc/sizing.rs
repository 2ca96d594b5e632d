//! Parity-bit sizing for Hamming SECDED blocks.

use crate::ecc::bits::next_power_of_two;
use crate::error::{Error, Result};

/// Length of the smallest valid block: one data bit, two Hamming parity bits
/// and the overall parity bit.
pub const MIN_BLOCK_LENGTH: usize = 4;

/// Number of Hamming parity bits needed to protect `data_len` data bits.
///
/// This is the smallest `m` with `2^m >= data_len + m + 1`. The overall
/// parity bit that upgrades the code to SECDED is not included.
///
/// # Errors
/// Returns an error if `data_len` is zero.
pub fn parity_bits_needed(data_len: usize) -> Result<usize> {
    let n = next_power_of_two(data_len)?;
    let lower = n.trailing_zeros() as usize;
    let data_bit_boundary = n - lower - 1;

    Ok(if data_len <= data_bit_boundary {
        lower
    } else {
        lower + 1
    })
}

/// Recovers the number of Hamming parity bits from a full encoded length,
/// including the overall parity bit.
///
/// # Errors
/// Returns an error if the block is shorter than [`MIN_BLOCK_LENGTH`].
pub fn parity_bits_from_block_length(block_len: usize) -> Result<usize> {
    if block_len < MIN_BLOCK_LENGTH {
        return Err(Error::invalid_input(format!(
            "Encoded block must be at least {} bits, got {}",
            MIN_BLOCK_LENGTH, block_len
        )));
    }

    Ok((block_len - 1).ilog2() as usize + 1)
}

/// Total block length for `data_len` data bits: data, Hamming parity and the
/// overall parity bit.
pub fn encoded_length(data_len: usize) -> Result<usize> {
    let parity_bits = parity_bits_needed(data_len)?;
    data_len
        .checked_add(parity_bits + 1)
        .ok_or_else(|| Error::invalid_input("Encoded length overflows a usize"))
}

/// Splits a block length into `(data_len, parity_bits)`, rejecting lengths
/// that no data length encodes to.
pub fn block_layout(block_len: usize) -> Result<(usize, usize)> {
    let parity_bits = parity_bits_from_block_length(block_len)?;
    let data_len = block_len - parity_bits - 1;

    if data_len == 0 || parity_bits_needed(data_len)? != parity_bits {
        return Err(Error::invalid_input(format!(
            "{} is not a valid SECDED block length",
            block_len
        )));
    }

    Ok((data_len, parity_bits))
}
