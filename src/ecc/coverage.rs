//! Which data bits each Hamming parity bit protects.
//!
//! Blocks are numbered from 1 (position 0 holds the overall parity bit and
//! takes no part here). Parity bit `p` covers every position whose binary
//! representation has the bit `log2(p)` set. Since parity bits sit at the
//! power-of-two positions, the data bits live at 3, 5, 6, 7, 9, ... and this
//! module translates the rule into zero-based indices into the data itself.

use crate::ecc::bits::is_power_of_two;
use crate::error::{Error, Result};
use bitvec::prelude::*;
use std::iter::FusedIterator;

/// First position that can hold a data bit (1 and 2 are always parity).
const FIRST_DATA_POSITION: usize = 3;

/// Lazy, ordered sequence of the data indices covered by one parity bit.
///
/// Created by [`covered_data_indices`]. Cloning the iterator restarts the
/// walk from wherever the clone was taken.
#[derive(Debug, Clone)]
pub struct CoveredIndices {
    /// Power-of-two position of the parity bit
    parity: usize,
    /// Number of data bits in the message
    data_len: usize,
    /// Current position in the combined parity + data numbering
    total_position: usize,
    /// Current 1-based position within the data bits
    data_position: usize,
}

impl Iterator for CoveredIndices {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.data_position <= self.data_len {
            let position = self.total_position;
            self.total_position += 1;

            if is_power_of_two(position) {
                continue;
            }

            let data_index = self.data_position - 1;
            self.data_position += 1;

            if position % self.parity.saturating_mul(2) >= self.parity {
                return Some(data_index);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.data_len + 1 - self.data_position))
    }
}

impl FusedIterator for CoveredIndices {}

/// Enumerates the zero-based data indices protected by the parity bit at
/// position `parity`, for a message of `data_len` bits.
///
/// # Errors
/// Returns an error if `parity` is not a power of two.
///
/// # Example
/// ```
/// use secded::ecc::coverage::covered_data_indices;
///
/// let covered: Vec<usize> = covered_data_indices(2, 7).unwrap().collect();
/// assert_eq!(covered, vec![0, 2, 3, 5, 6]);
/// ```
pub fn covered_data_indices(parity: usize, data_len: usize) -> Result<CoveredIndices> {
    if !is_power_of_two(parity) {
        return Err(Error::invalid_input(format!(
            "Hamming parity bits sit at powers of two, got position {}",
            parity
        )));
    }

    Ok(CoveredIndices {
        parity,
        data_len,
        total_position: FIRST_DATA_POSITION,
        data_position: 1,
    })
}

/// Block positions that carry data bits, in order, for a block of
/// `block_len` bits.
pub fn data_positions(block_len: usize) -> impl Iterator<Item = usize> {
    (FIRST_DATA_POSITION..block_len).filter(|&position| !is_power_of_two(position))
}

/// Even parity of the data bits covered by the parity bit at `position`.
pub fn parity(data: &BitSlice<u8, Msb0>, position: usize) -> Result<bool> {
    Ok(covered_data_indices(position, data.len())?.fold(false, |acc, index| acc ^ data[index]))
}

/// Even parity over every bit in `bits`.
pub fn overall_parity(bits: &BitSlice<u8, Msb0>) -> bool {
    bits.count_ones() % 2 == 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecc::bits::powers_of_two;
    use crate::ecc::sizing::parity_bits_needed;

    fn covered(parity: usize, data_len: usize) -> Vec<usize> {
        covered_data_indices(parity, data_len).unwrap().collect()
    }

    #[test]
    fn test_covered_known_values() {
        assert_eq!(covered(1, 14), vec![0, 1, 3, 4, 6, 8, 10, 11, 13]);
        assert_eq!(covered(2, 7), vec![0, 2, 3, 5, 6]);
        assert_eq!(
            covered(1, 33),
            vec![0, 1, 3, 4, 6, 8, 10, 11, 13, 15, 17, 19, 21, 23, 25, 26, 28, 30, 32]
        );
        assert_eq!(covered(4, 15), vec![1, 2, 3, 7, 8, 9, 10, 14]);
        assert_eq!(covered(4, 14), vec![1, 2, 3, 7, 8, 9, 10]);
        assert_eq!(covered(8, 13), vec![4, 5, 6, 7, 8, 9, 10]);
        assert_eq!(
            covered(16, 24),
            vec![11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23]
        );
    }

    #[test]
    fn test_covered_short_messages() {
        assert_eq!(covered(1, 1), vec![0]);
        assert_eq!(covered(2, 1), vec![0]);
        assert!(covered(4, 1).is_empty());
        assert!(covered(8, 3).is_empty());
        assert!(covered(16, 11).is_empty());
        assert!(covered(1, 0).is_empty());
    }

    #[test]
    fn test_covered_rejects_non_power_of_two() {
        for parity in [0, 3, 5, 6, 12, 100] {
            assert!(matches!(
                covered_data_indices(parity, 10),
                Err(Error::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_covered_matches_bit_test_rule() {
        for data_len in 1..200usize {
            // Data positions in the 1-based combined numbering
            let positions: Vec<usize> = (FIRST_DATA_POSITION..)
                .filter(|&pos| !is_power_of_two(pos))
                .take(data_len)
                .collect();
            let block_len = data_len + parity_bits_needed(data_len).unwrap() + 1;
            assert_eq!(data_positions(block_len).collect::<Vec<_>>(), positions);

            for parity in powers_of_two(parity_bits_needed(data_len).unwrap()) {
                let expected: Vec<usize> = positions
                    .iter()
                    .enumerate()
                    .filter(|(_, pos)| **pos & parity != 0)
                    .map(|(index, _)| index)
                    .collect();
                let actual = covered(parity, data_len);

                assert_eq!(actual, expected, "parity {} over {} bits", parity, data_len);
                assert!(actual.windows(2).all(|w| w[0] < w[1]));
            }
        }
    }

    #[test]
    fn test_covered_is_restartable() {
        let first = covered(4, 15);
        let second = covered(4, 15);
        assert_eq!(first, second);

        let mut iter = covered_data_indices(1, 14).unwrap();
        assert_eq!(iter.next(), Some(0));
        let rest: Vec<usize> = iter.clone().collect();
        assert_eq!(iter.collect::<Vec<_>>(), rest);
    }

    #[test]
    fn test_parity() {
        let data = bitvec![u8, Msb0; 0, 0, 1, 1];
        assert!(parity(&data, 1).unwrap());
        assert!(!parity(&data, 2).unwrap());
        assert!(!parity(&data, 4).unwrap());
        assert!(parity(&data, 3).is_err());
    }

    #[test]
    fn test_overall_parity() {
        assert!(!overall_parity(&BitVec::<u8, Msb0>::new()));
        assert!(overall_parity(bits![u8, Msb0; 1, 0, 0]));
        assert!(!overall_parity(bits![u8, Msb0; 1, 0, 1, 1, 1]));
    }
}
