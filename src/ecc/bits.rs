//! Power-of-two arithmetic used to lay out Hamming parity positions.
//!
//! Parity bits occupy the power-of-two positions of a block (1, 2, 4, 8, ...),
//! so every other part of the codec leans on these helpers to tell parity
//! slots from data slots.

use crate::error::{Error, Result};

/// Returns `true` if `n` is a power of two. Zero is not.
#[inline]
pub fn is_power_of_two(n: usize) -> bool {
    n != 0 && (n & (n - 1)) == 0
}

/// Yields the first `count` powers of two: 1, 2, 4, ...
///
/// # Example
/// ```
/// use secded::ecc::bits::powers_of_two;
///
/// let powers: Vec<usize> = powers_of_two(5).collect();
/// assert_eq!(powers, vec![1, 2, 4, 8, 16]);
/// ```
pub fn powers_of_two(count: usize) -> impl Iterator<Item = usize> + Clone {
    (0..count).map(|exp| 1usize << exp)
}

/// Returns the smallest power of two strictly greater than `n`.
///
/// # Errors
/// Returns an error if `n` is zero or the result would not fit in a `usize`.
///
/// # Example
/// ```
/// use secded::ecc::bits::next_power_of_two;
///
/// assert_eq!(next_power_of_two(768).unwrap(), 1024);
/// assert_eq!(next_power_of_two(4).unwrap(), 8);
/// ```
pub fn next_power_of_two(n: usize) -> Result<usize> {
    if n == 0 {
        return Err(Error::invalid_input("Argument must be a positive integer"));
    }

    let next = if is_power_of_two(n) {
        n.checked_mul(2)
    } else {
        n.checked_next_power_of_two()
    };

    next.ok_or_else(|| {
        Error::invalid_input(format!("No power of two above {} fits in a usize", n))
    })
}
