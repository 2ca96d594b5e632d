//! SECDED block decoding and single-bit correction.
//!
//! The decoder recomputes every Hamming parity bit from the data it finds in
//! the block and sums the positions of the ones that disagree into a
//! syndrome. The overall parity bit then separates the cases:
//!
//! | syndrome | overall parity | outcome                                  |
//! |----------|----------------|------------------------------------------|
//! | 0        | holds          | no error                                 |
//! | 0        | broken         | the overall parity bit itself flipped    |
//! | nonzero  | broken         | one flip at position `syndrome`, fixed   |
//! | nonzero  | holds          | two flips, reported as uncorrectable     |
//!
//! Three or more flips fall outside this contract and may be misreported.

use crate::ecc::bits::powers_of_two;
use crate::ecc::coverage::{data_positions, overall_parity, parity};
use crate::ecc::sizing::block_layout;
use crate::ecc::DataBits;
use crate::error::{Error, Result};
use bitvec::prelude::*;

/// Which row of the decode table a block landed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeOutcome {
    /// Every parity check held
    Clean,
    /// Only the overall parity bit was wrong; the data was untouched
    OverallParityRepaired,
    /// A single flipped bit at `position` was corrected
    Corrected { position: usize },
}

impl DecodeOutcome {
    /// Returns `true` if the block had any error at all.
    pub fn had_error(&self) -> bool {
        !matches!(self, DecodeOutcome::Clean)
    }
}

/// Decodes a SECDED block back into its data bits, correcting a single
/// flipped bit.
///
/// # Errors
/// Returns [`Error::InvalidInput`] if no data length encodes to a block of
/// this size, and [`Error::Uncorrectable`] if a double error is detected.
///
/// # Example
/// ```
/// use secded::ecc::decode;
/// use bitvec::prelude::*;
///
/// // Bit 5 was flipped in transit
/// let data = decode(bits![u8, Msb0; 0, 0, 1, 1, 0, 1, 1, 1]).unwrap();
/// assert_eq!(data, bitvec![u8, Msb0; 1, 0, 1, 1]);
/// ```
pub fn decode(block: &BitSlice<u8, Msb0>) -> Result<DataBits> {
    decode_detailed(block).map(|(data, _)| data)
}

/// Like [`decode`], but also reports what the decoder had to do.
///
/// The input block is never modified; a correction is applied to a copy.
pub fn decode_detailed(block: &BitSlice<u8, Msb0>) -> Result<(DataBits, DecodeOutcome)> {
    let (data_len, parity_bits) = block_layout(block.len())?;

    // Candidate data, still uncorrected
    let decoded = extract_data(block);
    debug_assert_eq!(decoded.len(), data_len);

    let overall_correct = overall_parity(&block[1..]) == block[0];

    let mut syndrome = 0;
    for position in powers_of_two(parity_bits) {
        if parity(&decoded, position)? != block[position] {
            syndrome += position;
        }
    }

    match (syndrome, overall_correct) {
        (0, true) => Ok((decoded, DecodeOutcome::Clean)),
        (0, false) => Ok((decoded, DecodeOutcome::OverallParityRepaired)),
        (position, false) if position < block.len() => {
            let mut corrected = block.to_bitvec();
            let flipped = !corrected[position];
            corrected.set(position, flipped);
            Ok((extract_data(&corrected), DecodeOutcome::Corrected { position }))
        }
        // Either two flips, or a syndrome pointing past the block
        (syndrome, _) => Err(Error::Uncorrectable { syndrome }),
    }
}

fn extract_data(block: &BitSlice<u8, Msb0>) -> DataBits {
    data_positions(block.len()).map(|position| block[position]).collect()
}
