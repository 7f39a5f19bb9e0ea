//! BinaryArray - standard unsigned integers as statically sized bit arrays.
//!
//! Every unsigned integer is already a fixed-length bit array that lives in a
//! register or on the stack. This trait adds the missing single-bit accessors
//! and a padded binary string format. Bit `i` is the bit with numeric weight
//! `2^i` (LSB-first).
//!
//! The unchecked accessors perform no bounds check in release builds; callers
//! must keep `index < BITS`. Debug builds assert the bound. The `checked_*`
//! variants return [`BinArrayError::IndexOutOfBounds`] instead.
//!
//! Population counts, leading/trailing counts and byte conversions are not
//! duplicated here: `count_ones()`, `leading_zeros()`, `to_le_bytes()` and
//! friends are inherent on the integer types.
//!
//! # Examples
//!
//! ```
//! use binarray::BinaryArray;
//!
//! let mut flags = 0_u8;
//! flags.set_bit(2, true);
//! assert!(flags.get_bit(2));
//! assert_eq!(flags, 4);
//! assert_eq!(flags.to_bstring(), "00000100");
//! ```

use crate::error::{BinArrayError, Result};

/// Bit-level access to a fixed-width integer.
pub trait BinaryArray: Copy + Sized {
    /// Width of the array in bits.
    const BITS: usize;

    /// Retrieves the bit value at `index`.
    fn get_bit(&self, index: usize) -> bool;

    /// Sets the bit at `index` to `value`, returning the updated value.
    ///
    /// The write is branchless: the mask is combined with `0 - value`, which
    /// is either all zeros or all ones.
    fn set_bit(&mut self, index: usize, value: bool) -> Self;

    /// Clears the bit at `index`, returning the updated value.
    fn clear_bit(&mut self, index: usize) -> Self {
        self.set_bit(index, false)
    }

    /// Flips the bit at `index`, returning the updated value.
    fn toggle_bit(&mut self, index: usize) -> Self;

    /// Returns a copy with the bit at `index` set to `value`.
    #[must_use]
    fn with_bit(self, index: usize, value: bool) -> Self {
        let mut copy = self;
        copy.set_bit(index, value)
    }

    /// Bounds-checked [`get_bit`](BinaryArray::get_bit).
    fn checked_get_bit(&self, index: usize) -> Result<bool> {
        if index >= Self::BITS {
            return Err(BinArrayError::IndexOutOfBounds {
                index,
                length: Self::BITS,
            });
        }
        Ok(self.get_bit(index))
    }

    /// Bounds-checked [`set_bit`](BinaryArray::set_bit).
    fn checked_set_bit(&mut self, index: usize, value: bool) -> Result<Self> {
        if index >= Self::BITS {
            return Err(BinArrayError::IndexOutOfBounds {
                index,
                length: Self::BITS,
            });
        }
        Ok(self.set_bit(index, value))
    }

    /// Formats the array as a zero-padded binary string, most significant
    /// bit first.
    fn to_bstring(&self) -> String;

    /// Parses a string produced by [`to_bstring`](BinaryArray::to_bstring).
    ///
    /// The string must contain exactly `BITS` characters, each `0` or `1`.
    fn from_bstring(s: &str) -> Result<Self>;
}

macro_rules! impl_binary_array {
    ($($t:ty),* $(,)?) => {
        $(
            impl BinaryArray for $t {
                const BITS: usize = <$t>::BITS as usize;

                #[inline(always)]
                fn get_bit(&self, index: usize) -> bool {
                    debug_assert!(
                        index < <$t as BinaryArray>::BITS,
                        "bit index {} out of bounds (length: {})",
                        index,
                        <$t as BinaryArray>::BITS
                    );
                    (*self & (1 << index)) != 0
                }

                #[inline(always)]
                fn set_bit(&mut self, index: usize, value: bool) -> Self {
                    debug_assert!(
                        index < <$t as BinaryArray>::BITS,
                        "bit index {} out of bounds (length: {})",
                        index,
                        <$t as BinaryArray>::BITS
                    );
                    let mask: $t = 1 << index;
                    *self = *self & !mask | (mask & (0 as $t).wrapping_sub(value as $t));
                    *self
                }

                #[inline(always)]
                fn toggle_bit(&mut self, index: usize) -> Self {
                    debug_assert!(
                        index < <$t as BinaryArray>::BITS,
                        "bit index {} out of bounds (length: {})",
                        index,
                        <$t as BinaryArray>::BITS
                    );
                    let mask: $t = 1 << index;
                    *self ^= mask;
                    *self
                }

                fn to_bstring(&self) -> String {
                    format!("{:0width$b}", self, width = <$t as BinaryArray>::BITS)
                }

                fn from_bstring(s: &str) -> Result<Self> {
                    let len = s.chars().count();
                    if len != <$t as BinaryArray>::BITS {
                        return Err(BinArrayError::LengthMismatch {
                            expected: <$t as BinaryArray>::BITS,
                            actual: len,
                        });
                    }

                    let mut value: $t = 0;
                    for (position, digit) in s.chars().enumerate() {
                        let bit = match digit {
                            '0' => 0,
                            '1' => 1,
                            _ => return Err(BinArrayError::InvalidDigit { digit, position }),
                        };
                        value = (value << 1) | bit;
                    }
                    Ok(value)
                }
            }
        )*
    };
}

impl_binary_array!(u8, u16, u32, u64, u128);

// usize is included for completeness. Prefer a fixed-width type when the
// target's pointer width matters to the array size.
impl_binary_array!(usize);
