//! Word and bit index arithmetic.
//!
//! All helpers are `const fn` so they can size arrays in type position,
//! e.g. `BinArray<100, { word_count(100) }>`.

use crate::binarray::{Word, BITS_PER_WORD, WORD_MAX};

/// Number of words needed to hold `bits` bits.
///
/// # Examples
///
/// ```
/// use binarray::utils::word_count;
///
/// assert_eq!(word_count(0), 0);
/// assert_eq!(word_count(1), 1);
/// assert_eq!(word_count(32), 1);
/// assert_eq!(word_count(33), 2);
/// ```
#[inline(always)]
pub const fn word_count(bits: usize) -> usize {
    bits.div_ceil(BITS_PER_WORD)
}

/// Number of bytes needed to hold `bits` bits.
#[inline(always)]
pub const fn byte_count(bits: usize) -> usize {
    bits.div_ceil(8)
}

/// Get word index from bit position.
#[inline(always)]
pub const fn word_index(bit_pos: usize) -> usize {
    bit_pos >> 5 // bit_pos / 32
}

/// Get bit index within word from bit position.
#[inline(always)]
pub const fn bit_offset(bit_pos: usize) -> usize {
    bit_pos & 31 // bit_pos % 32
}

/// Create bitmask with n bits set (from LSB).
#[inline(always)]
pub const fn bitmask(n: usize) -> Word {
    if n == 0 {
        0
    } else if n >= BITS_PER_WORD {
        WORD_MAX
    } else {
        WORD_MAX >> (BITS_PER_WORD - n)
    }
}

/// Mask of the valid bits in the last storage word of a `bits`-bit array.
///
/// Returns `WORD_MAX` when `bits` fills its last word exactly.
#[inline(always)]
pub const fn last_word_mask(bits: usize) -> Word {
    match bit_offset(bits) {
        0 => WORD_MAX,
        n => bitmask(n),
    }
}
