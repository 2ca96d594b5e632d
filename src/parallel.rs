//! Parallel batch encoding and decoding using Rayon.
//! Enable with the `parallel` feature flag.
//!
//! Every block is encoded or decoded independently, so a batch fans out
//! across the thread pool with no coordination. For a handful of short
//! messages the sequential functions are usually faster.

use crate::ecc::{decode, encode, DataBits, EncodedBlock};
use crate::error::Result;
use bitvec::prelude::*;
use rayon::prelude::*;

/// Encodes each message into its own SECDED block.
///
/// Output order matches input order. If any message fails to encode the
/// whole batch fails.
pub fn encode_batch(messages: &[&BitSlice<u8, Msb0>]) -> Result<Vec<EncodedBlock>> {
    messages.par_iter().map(|data| encode(data)).collect()
}

/// Decodes each block, correcting single-bit errors.
///
/// Output order matches input order. An uncorrectable block fails the whole
/// batch.
pub fn decode_batch(blocks: &[&BitSlice<u8, Msb0>]) -> Result<Vec<DataBits>> {
    blocks.par_iter().map(|block| decode(block)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_batch_round_trip() {
        let messages: Vec<BitVec<u8, Msb0>> = (1..64)
            .map(|len| (0..len).map(|i| (i * 31 + len) % 3 == 0).collect())
            .collect();
        let refs: Vec<&BitSlice<u8, Msb0>> = messages.iter().map(|m| m.as_bitslice()).collect();

        let blocks = encode_batch(&refs).unwrap();
        for (message, block) in messages.iter().zip(&blocks) {
            assert_eq!(*block, encode(message).unwrap());
        }

        let block_refs: Vec<&BitSlice<u8, Msb0>> = blocks.iter().map(|b| b.as_bitslice()).collect();
        assert_eq!(decode_batch(&block_refs).unwrap(), messages);
    }

    #[test]
    fn test_batch_errors() {
        let empty = BitVec::<u8, Msb0>::new();
        let one = bitvec![u8, Msb0; 1];
        assert!(matches!(
            encode_batch(&[one.as_bitslice(), empty.as_bitslice()]),
            Err(Error::InvalidInput(_))
        ));

        let mut corrupted = encode(&bitvec![u8, Msb0; 0, 0, 1, 1]).unwrap();
        let (first, last) = (corrupted[0], corrupted[7]);
        corrupted.set(0, !first);
        corrupted.set(7, !last);
        assert!(matches!(
            decode_batch(&[corrupted.as_bitslice()]),
            Err(Error::Uncorrectable { .. })
        ));
    }
}
