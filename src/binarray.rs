//! BinArray - statically sized bit array stored in 32-bit words.
//!
//! A `BinArray<BITS, WORDS>` holds exactly `BITS` bits in an inline
//! `[u32; WORDS]`. It never allocates, is `Copy`, and its size is part of the
//! type, so binary operators between arrays of different lengths do not
//! compile.
//!
//! # Design
//!
//! - Storage is `[Word; WORDS]` with `WORDS == word_count(BITS)`
//! - Bit indexing: word_idx = bit_idx / 32, bit_offset = bit_idx % 32 (LSB0,
//!   the same order as `bitvec::order::Lsb0`)
//! - Padding bits past `BITS` in the last word are always zero, so equality,
//!   hashing and popcount work on whole words
//! - Hot paths only `debug_assert!` their bounds; `checked_*` variants return
//!   [`BinArrayError`]
//!
//! # Examples
//!
//! ```
//! use binarray::{BinArray, BinArray1024};
//! use binarray::utils::word_count;
//!
//! let mut ba = BinArray1024::new();
//! ba.set_bit(5);
//! ba.set_bit(10);
//! assert_eq!(ba.num_set(), 2);
//! assert_eq!(ba.get_acts(), vec![5, 10]);
//!
//! // Sizes that are not a multiple of 32
//! let odd = BinArray::<100, { word_count(100) }>::from_acts(&[0, 99]);
//! assert_eq!(odd.num_set(), 2);
//! ```

use crate::binary_array::BinaryArray;
use crate::error::{BinArrayError, Result};
use crate::persist;
use crate::utils::{bit_offset, bitmask, byte_count, last_word_mask, word_count, word_index};
use bitvec::order::{BitOrder, Lsb0};
use bitvec::slice::BitSlice;
use bitvec::store::BitStore;
use bitvec::vec::BitVec;
use bitvec::view::BitView;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr,
    ShrAssign,
};
use std::path::Path;
use std::str::FromStr;

/// Word type for bit storage (32-bit unsigned integer)
pub type Word = u32;

/// Number of bits per word
pub const BITS_PER_WORD: usize = 32;

/// Maximum word value
pub const WORD_MAX: Word = Word::MAX;

/// Fixed-size bit array of `BITS` bits stored in `WORDS` inline words.
///
/// `WORDS` must equal [`word_count(BITS)`](crate::utils::word_count); any other
/// value fails to compile as soon as the array is constructed. The aliases in
/// the crate root ([`BinArray32`](crate::BinArray32),
/// [`BinArray1024`](crate::BinArray1024), ...) cover common sizes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BinArrayRepr", into = "BinArrayRepr")]
pub struct BinArray<const BITS: usize, const WORDS: usize> {
    /// Storage words, LSB0 ordering, padding bits zero
    words: [Word; WORDS],
}

/// Serialized form of a [`BinArray`]: the logical length and the raw words.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinArrayRepr {
    /// Logical length in bits
    pub bits: usize,
    /// Storage words, LSB0 ordering
    pub words: Vec<Word>,
}

impl<const BITS: usize, const WORDS: usize> BinArray<BITS, WORDS> {
    const LAYOUT_OK: () = assert!(
        WORDS == word_count(BITS),
        "BinArray<BITS, WORDS> requires WORDS == word_count(BITS)"
    );

    /// Create a new BinArray with all bits initialized to 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use binarray::BinArray1024;
    ///
    /// let ba = BinArray1024::new();
    /// assert_eq!(ba.num_bits(), 1024);
    /// assert_eq!(ba.num_set(), 0);
    /// ```
    #[inline]
    pub const fn new() -> Self {
        let () = Self::LAYOUT_OK;
        Self { words: [0; WORDS] }
    }

    /// Create a BinArray from raw storage words.
    ///
    /// Fails with [`BinArrayError::PaddingBitsSet`] if any bit past `BITS`
    /// is set.
    pub fn from_words(words: [Word; WORDS]) -> Result<Self> {
        let mut ba = Self::new();
        ba.words = words;
        if !ba.padding_clear() {
            return Err(BinArrayError::PaddingBitsSet { bits: BITS });
        }
        Ok(ba)
    }

    /// Create a BinArray with the bits at `idxs` set.
    ///
    /// Indices >= BITS are silently ignored.
    pub fn from_acts(idxs: &[usize]) -> Self {
        let mut ba = Self::new();
        ba.set_acts(idxs);
        ba
    }

    /// Create a BinArray from one boolean per bit.
    pub fn from_bools(vals: &[bool]) -> Result<Self> {
        if vals.len() != BITS {
            return Err(BinArrayError::LengthMismatch {
                expected: BITS,
                actual: vals.len(),
            });
        }
        let mut ba = Self::new();
        ba.set_bits(vals);
        Ok(ba)
    }

    /// Copy a `bitvec` slice of exactly `BITS` bits into a new BinArray.
    pub fn from_bitslice<T, O>(bits: &BitSlice<T, O>) -> Result<Self>
    where
        T: BitStore,
        O: BitOrder,
    {
        if bits.len() != BITS {
            return Err(BinArrayError::LengthMismatch {
                expected: BITS,
                actual: bits.len(),
            });
        }
        let mut ba = Self::new();
        for idx in bits.iter_ones() {
            ba.set_bit(idx);
        }
        Ok(ba)
    }

    /// Decode little-endian bytes as produced by [`to_le_bytes`](Self::to_le_bytes).
    pub fn from_le_bytes(bytes: &[u8]) -> Result<Self> {
        let expected = byte_count(BITS);
        if bytes.len() != expected {
            return Err(BinArrayError::LengthMismatch {
                expected,
                actual: bytes.len(),
            });
        }

        let mut ba = Self::new();
        for (i, &byte) in bytes.iter().enumerate() {
            ba.words[i / 4] |= Word::from(byte) << (8 * (i % 4));
        }
        if !ba.padding_clear() {
            return Err(BinArrayError::PaddingBitsSet { bits: BITS });
        }
        Ok(ba)
    }

    /// Parse an MSB-first binary string of exactly `BITS` characters.
    pub fn from_bstring(s: &str) -> Result<Self> {
        let len = s.chars().count();
        if len != BITS {
            return Err(BinArrayError::LengthMismatch {
                expected: BITS,
                actual: len,
            });
        }

        let mut ba = Self::new();
        for (position, digit) in s.chars().enumerate() {
            match digit {
                '0' => {}
                '1' => ba.set_bit(BITS - 1 - position),
                _ => return Err(BinArrayError::InvalidDigit { digit, position }),
            }
        }
        Ok(ba)
    }

    /// Get total number of bits.
    #[inline(always)]
    pub const fn num_bits(&self) -> usize {
        BITS
    }

    /// Get number of storage words.
    #[inline(always)]
    pub const fn num_words(&self) -> usize {
        WORDS
    }

    #[inline(always)]
    fn padding_clear(&self) -> bool {
        match self.words.last() {
            Some(&last) => last & !last_word_mask(BITS) == 0,
            None => true,
        }
    }

    #[inline(always)]
    fn mask_padding(&mut self) {
        if let Some(last) = self.words.last_mut() {
            *last &= last_word_mask(BITS);
        }
    }

    // =========================================================================
    // Single Bit Operations
    // =========================================================================

    /// Set bit at position `b` to 1.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `b >= BITS`.
    #[inline]
    pub fn set_bit(&mut self, b: usize) {
        debug_assert!(b < BITS, "bit index {} out of bounds (length: {})", b, BITS);
        BinaryArray::set_bit(&mut self.words[word_index(b)], bit_offset(b), true);
    }

    /// Get bit at position `b`.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `b >= BITS`.
    #[inline]
    pub fn get_bit(&self, b: usize) -> bool {
        debug_assert!(b < BITS, "bit index {} out of bounds (length: {})", b, BITS);
        BinaryArray::get_bit(&self.words[word_index(b)], bit_offset(b))
    }

    /// Clear bit at position `b` (set to 0).
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `b >= BITS`.
    #[inline]
    pub fn clear_bit(&mut self, b: usize) {
        debug_assert!(b < BITS, "bit index {} out of bounds (length: {})", b, BITS);
        BinaryArray::clear_bit(&mut self.words[word_index(b)], bit_offset(b));
    }

    /// Toggle bit at position `b` (0 -> 1, 1 -> 0).
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `b >= BITS`.
    #[inline]
    pub fn toggle_bit(&mut self, b: usize) {
        debug_assert!(b < BITS, "bit index {} out of bounds (length: {})", b, BITS);
        BinaryArray::toggle_bit(&mut self.words[word_index(b)], bit_offset(b));
    }

    /// Assign bit at position `b` to `val`.
    #[inline]
    pub fn assign_bit(&mut self, b: usize, val: bool) {
        debug_assert!(b < BITS, "bit index {} out of bounds (length: {})", b, BITS);
        BinaryArray::set_bit(&mut self.words[word_index(b)], bit_offset(b), val);
    }

    /// Bounds-checked [`get_bit`](Self::get_bit).
    pub fn checked_get_bit(&self, b: usize) -> Result<bool> {
        self.check_index(b)?;
        Ok(self.get_bit(b))
    }

    /// Bounds-checked [`assign_bit`](Self::assign_bit).
    pub fn checked_assign_bit(&mut self, b: usize, val: bool) -> Result<()> {
        self.check_index(b)?;
        self.assign_bit(b, val);
        Ok(())
    }

    fn check_index(&self, b: usize) -> Result<()> {
        if b >= BITS {
            return Err(BinArrayError::IndexOutOfBounds {
                index: b,
                length: BITS,
            });
        }
        Ok(())
    }

    // =========================================================================
    // Range Operations
    // =========================================================================

    /// Apply `op` to every word overlapping [beg, beg+len) with the mask of
    /// the bits inside the range.
    #[inline]
    fn apply_range(&mut self, beg: usize, len: usize, op: impl Fn(&mut Word, Word)) {
        debug_assert!(
            beg.checked_add(len).is_some_and(|end| end <= BITS),
            "range [{}, {}+{}) out of bounds (length: {})",
            beg,
            beg,
            len,
            BITS
        );
        if len == 0 {
            return;
        }

        let end = beg + len;
        let first = word_index(beg);
        let last = word_index(end - 1);

        for w in first..=last {
            let lo = if w == first { bit_offset(beg) } else { 0 };
            let hi = if w == last {
                bit_offset(end - 1) + 1
            } else {
                BITS_PER_WORD
            };
            op(&mut self.words[w], bitmask(hi) & !bitmask(lo));
        }
    }

    /// Set range of bits [beg, beg+len) to 1.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if beg + len > BITS.
    pub fn set_range(&mut self, beg: usize, len: usize) {
        self.apply_range(beg, len, |word, mask| *word |= mask);
    }

    /// Clear range of bits [beg, beg+len) to 0.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if beg + len > BITS.
    pub fn clear_range(&mut self, beg: usize, len: usize) {
        self.apply_range(beg, len, |word, mask| *word &= !mask);
    }

    /// Toggle range of bits [beg, beg+len).
    ///
    /// # Panics
    ///
    /// Panics in debug mode if beg + len > BITS.
    pub fn toggle_range(&mut self, beg: usize, len: usize) {
        self.apply_range(beg, len, |word, mask| *word ^= mask);
    }

    /// Bounds-checked [`set_range`](Self::set_range).
    pub fn checked_set_range(&mut self, beg: usize, len: usize) -> Result<()> {
        match beg.checked_add(len) {
            Some(end) if end <= BITS => {
                self.set_range(beg, len);
                Ok(())
            }
            _ => Err(BinArrayError::RangeOutOfBounds {
                beg,
                len,
                length: BITS,
            }),
        }
    }

    // =========================================================================
    // Bulk Operations
    // =========================================================================

    /// Set all bits to 1.
    pub fn set_all(&mut self) {
        self.words = [WORD_MAX; WORDS];
        self.mask_padding();
    }

    /// Clear all bits to 0.
    pub fn clear_all(&mut self) {
        self.words = [0; WORDS];
    }

    /// Toggle all bits (binary NOT operation).
    pub fn toggle_all(&mut self) {
        for word in self.words.iter_mut() {
            *word = !*word;
        }
        self.mask_padding();
    }

    // =========================================================================
    // Vector Operations
    // =========================================================================

    /// Set bits from a slice of booleans.
    ///
    /// Clears all bits first, then sets bits where vals[i] is true.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `vals.len() > BITS`. Release builds ignore the
    /// extra entries.
    pub fn set_bits(&mut self, vals: &[bool]) {
        debug_assert!(vals.len() <= BITS);
        self.clear_all();
        for (i, &val) in vals.iter().enumerate().take(BITS) {
            if val {
                self.set_bit(i);
            }
        }
    }

    /// Set bits from a slice of indices.
    ///
    /// Clears all bits first, then sets bits at indices in `idxs`.
    /// Indices >= BITS are silently ignored.
    pub fn set_acts(&mut self, idxs: &[usize]) {
        self.clear_all();
        for &idx in idxs {
            if idx < BITS {
                self.set_bit(idx);
            }
        }
    }

    /// Get all bit values, index 0 first.
    pub fn get_bits(&self) -> Vec<bool> {
        (0..BITS).map(|b| self.get_bit(b)).collect()
    }

    /// Get indices of all set bits, in ascending order.
    pub fn get_acts(&self) -> Vec<usize> {
        let mut acts = Vec::with_capacity(self.num_set());
        acts.extend(self.iter_ones());
        acts
    }

    /// Iterate over the indices of set bits in ascending order.
    ///
    /// Empty words are skipped whole.
    pub fn iter_ones(&self) -> IterOnes<'_> {
        IterOnes {
            words: &self.words,
            word_idx: 0,
            current: self.words.first().copied().unwrap_or(0),
        }
    }

    // =========================================================================
    // Counting Operations
    // =========================================================================

    /// Count number of set bits (population count).
    #[inline]
    pub fn num_set(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Count number of cleared bits.
    #[inline]
    pub fn num_cleared(&self) -> usize {
        BITS - self.num_set()
    }

    /// Count bits that are 1 in both arrays (bitwise AND + popcount).
    pub fn num_similar(&self, other: &Self) -> usize {
        self.words
            .iter()
            .zip(other.words.iter())
            .map(|(a, b)| (a & b).count_ones() as usize)
            .sum()
    }

    /// True if at least one bit is set.
    #[inline]
    pub fn any(&self) -> bool {
        self.words.iter().any(|&w| w != 0)
    }

    /// True if no bit is set.
    #[inline]
    pub fn none(&self) -> bool {
        !self.any()
    }

    /// True if every bit is set. Vacuously true when `BITS == 0`.
    #[inline]
    pub fn all(&self) -> bool {
        self.num_set() == BITS
    }

    // =========================================================================
    // Search Operations
    // =========================================================================

    /// Index of the lowest set bit.
    pub fn first_set_bit(&self) -> Option<usize> {
        self.iter_ones().next()
    }

    /// Find next set bit starting from position `beg`, with wrapping.
    ///
    /// Searches [beg, BITS) then wraps to [0, beg).
    /// Returns Some(index) if found, None if no set bits exist.
    ///
    /// # Panics
    ///
    /// Panics if `beg >= BITS` on a non-empty array.
    pub fn find_next_set_bit(&self, beg: usize) -> Option<usize> {
        if BITS == 0 {
            return None;
        }
        assert!(beg < BITS, "bit index {} out of bounds (length: {})", beg, BITS);

        let beg_word = word_index(beg);
        let beg_mask = bitmask(bit_offset(beg));
        let found = |w: usize, word: Word| w * BITS_PER_WORD + word.trailing_zeros() as usize;

        // High side of the first word
        let word = self.words[beg_word] & !beg_mask;
        if word != 0 {
            return Some(found(beg_word, word));
        }

        // Remaining words, wrapping around to the front
        for w in (beg_word + 1..WORDS).chain(0..beg_word) {
            if self.words[w] != 0 {
                return Some(found(w, self.words[w]));
            }
        }

        // Low side of the first word
        let word = self.words[beg_word] & beg_mask;
        if word != 0 {
            return Some(found(beg_word, word));
        }

        None
    }

    // =========================================================================
    // Shift Operations
    // =========================================================================

    /// Move every bit `n` positions toward the high end.
    ///
    /// Bits shifted past `BITS` are discarded; low bits are filled with 0.
    pub fn shift_left(&mut self, n: usize) {
        if n >= BITS {
            self.clear_all();
            return;
        }
        if n == 0 {
            return;
        }

        let word_shift = word_index(n);
        let bit_shift = bit_offset(n);

        for i in (0..WORDS).rev() {
            let mut value = 0;
            if i >= word_shift {
                let src = i - word_shift;
                value = self.words[src] << bit_shift;
                if bit_shift > 0 && src > 0 {
                    value |= self.words[src - 1] >> (BITS_PER_WORD - bit_shift);
                }
            }
            self.words[i] = value;
        }
        self.mask_padding();
    }

    /// Move every bit `n` positions toward index 0.
    ///
    /// Bits shifted below 0 are discarded; high bits are filled with 0.
    pub fn shift_right(&mut self, n: usize) {
        if n >= BITS {
            self.clear_all();
            return;
        }
        if n == 0 {
            return;
        }

        let word_shift = word_index(n);
        let bit_shift = bit_offset(n);

        for i in 0..WORDS {
            let src = i + word_shift;
            let mut value = 0;
            if src < WORDS {
                value = self.words[src] >> bit_shift;
                if bit_shift > 0 && src + 1 < WORDS {
                    value |= self.words[src + 1] << (BITS_PER_WORD - bit_shift);
                }
            }
            self.words[i] = value;
        }
    }

    // =========================================================================
    // Random Operations
    // =========================================================================

    /// Randomly shuffle all bits using Fisher-Yates algorithm.
    pub fn random_shuffle<R: Rng>(&mut self, rng: &mut R) {
        for i in (1..BITS).rev() {
            let j = rng.gen_range(0..=i);
            let temp = self.get_bit(i);
            self.assign_bit(i, self.get_bit(j));
            self.assign_bit(j, temp);
        }
    }

    /// Randomly set exactly `num` bits to 1.
    ///
    /// Clears all bits first. `num` is capped at `BITS`.
    pub fn random_set_num<R: Rng>(&mut self, rng: &mut R, num: usize) {
        self.clear_all();
        let num_actual = num.min(BITS);

        let mut count = 0;
        while count < num_actual {
            let idx = rng.gen_range(0..BITS);
            if !self.get_bit(idx) {
                self.set_bit(idx);
                count += 1;
            }
        }
    }

    /// Randomly set `round(pct * BITS)` bits to 1.
    ///
    /// `pct` should be in range [0.0, 1.0].
    pub fn random_set_pct<R: Rng>(&mut self, rng: &mut R, pct: f64) {
        debug_assert!((0.0..=1.0).contains(&pct));
        let num = ((BITS as f64) * pct).round() as usize;
        self.random_set_num(rng, num);
    }

    // =========================================================================
    // Word-Level Access
    // =========================================================================

    /// Get direct read-only access to word storage.
    #[inline(always)]
    pub fn words(&self) -> &[Word; WORDS] {
        &self.words
    }

    /// Borrow the array as a `bitvec` slice of exactly `BITS` bits.
    pub fn as_bitslice(&self) -> &BitSlice<Word, Lsb0> {
        &self.words[..].view_bits::<Lsb0>()[..BITS]
    }

    /// Copy the array into a heap-allocated `bitvec::BitVec`.
    pub fn to_bitvec(&self) -> BitVec<Word, Lsb0> {
        self.as_bitslice().to_bitvec()
    }

    /// Encode as `byte_count(BITS)` little-endian bytes; bit 0 is the lowest
    /// bit of byte 0.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        self.words
            .iter()
            .flat_map(|w| w.to_le_bytes())
            .take(byte_count(BITS))
            .collect()
    }

    // =========================================================================
    // Formatting and Serialization
    // =========================================================================

    /// Format as a binary string, most significant bit first, padded to
    /// `BITS` characters.
    pub fn to_bstring(&self) -> String {
        (0..BITS)
            .rev()
            .map(|b| if self.get_bit(b) { '1' } else { '0' })
            .collect()
    }

    /// Serialize to binary (bincode).
    pub fn to_binary(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Deserialize from binary (bincode).
    pub fn from_binary(data: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(data)?)
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write the array to `path` in bincode format.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        persist::save(self, path)
    }

    /// Read an array previously written with [`save`](Self::save).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        persist::load(path)
    }

    /// Memory used by the array in bytes. There is no heap component.
    pub const fn memory_usage(&self) -> usize {
        std::mem::size_of::<Self>()
    }
}

impl<const BITS: usize, const WORDS: usize> Default for BinArray<BITS, WORDS> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Set Bit Iterator
// =============================================================================

/// Iterator over the indices of set bits, created by [`BinArray::iter_ones`].
#[derive(Clone, Debug)]
pub struct IterOnes<'a> {
    words: &'a [Word],
    word_idx: usize,
    current: Word,
}

impl Iterator for IterOnes<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        loop {
            if self.current != 0 {
                let tz = self.current.trailing_zeros() as usize;
                self.current &= self.current - 1;
                return Some(self.word_idx * BITS_PER_WORD + tz);
            }
            if self.word_idx + 1 >= self.words.len() {
                return None;
            }
            self.word_idx += 1;
            self.current = self.words[self.word_idx];
        }
    }
}

// =============================================================================
// Bitwise Operators
// =============================================================================

macro_rules! impl_bitwise_op {
    ($op:ident, $method:ident, $assign_op:ident, $assign_method:ident) => {
        impl<const BITS: usize, const WORDS: usize> $assign_op for BinArray<BITS, WORDS> {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                for (a, b) in self.words.iter_mut().zip(rhs.words.iter()) {
                    a.$assign_method(*b);
                }
            }
        }

        impl<const BITS: usize, const WORDS: usize> $assign_op<&BinArray<BITS, WORDS>>
            for BinArray<BITS, WORDS>
        {
            #[inline]
            fn $assign_method(&mut self, rhs: &Self) {
                self.$assign_method(*rhs);
            }
        }

        impl<const BITS: usize, const WORDS: usize> $op for BinArray<BITS, WORDS> {
            type Output = BinArray<BITS, WORDS>;

            #[inline]
            fn $method(mut self, rhs: Self) -> Self::Output {
                self.$assign_method(rhs);
                self
            }
        }

        impl<const BITS: usize, const WORDS: usize> $op for &BinArray<BITS, WORDS> {
            type Output = BinArray<BITS, WORDS>;

            #[inline]
            fn $method(self, rhs: Self) -> Self::Output {
                (*self).$method(*rhs)
            }
        }
    };
}

impl_bitwise_op!(BitAnd, bitand, BitAndAssign, bitand_assign);
impl_bitwise_op!(BitOr, bitor, BitOrAssign, bitor_assign);
impl_bitwise_op!(BitXor, bitxor, BitXorAssign, bitxor_assign);

impl<const BITS: usize, const WORDS: usize> Not for BinArray<BITS, WORDS> {
    type Output = BinArray<BITS, WORDS>;

    fn not(mut self) -> Self::Output {
        self.toggle_all();
        self
    }
}

impl<const BITS: usize, const WORDS: usize> Not for &BinArray<BITS, WORDS> {
    type Output = BinArray<BITS, WORDS>;

    fn not(self) -> Self::Output {
        !*self
    }
}

impl<const BITS: usize, const WORDS: usize> ShlAssign<usize> for BinArray<BITS, WORDS> {
    fn shl_assign(&mut self, n: usize) {
        self.shift_left(n);
    }
}

impl<const BITS: usize, const WORDS: usize> Shl<usize> for BinArray<BITS, WORDS> {
    type Output = BinArray<BITS, WORDS>;

    fn shl(mut self, n: usize) -> Self::Output {
        self.shift_left(n);
        self
    }
}

impl<const BITS: usize, const WORDS: usize> ShrAssign<usize> for BinArray<BITS, WORDS> {
    fn shr_assign(&mut self, n: usize) {
        self.shift_right(n);
    }
}

impl<const BITS: usize, const WORDS: usize> Shr<usize> for BinArray<BITS, WORDS> {
    type Output = BinArray<BITS, WORDS>;

    fn shr(mut self, n: usize) -> Self::Output {
        self.shift_right(n);
        self
    }
}

// =============================================================================
// Formatting and Conversions
// =============================================================================

impl<const BITS: usize, const WORDS: usize> fmt::Display for BinArray<BITS, WORDS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_bstring())
    }
}

impl<const BITS: usize, const WORDS: usize> fmt::Binary for BinArray<BITS, WORDS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_bstring())
    }
}

impl<const BITS: usize, const WORDS: usize> fmt::Debug for BinArray<BITS, WORDS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinArray")
            .field("bits", &BITS)
            .field("acts", &self.get_acts())
            .finish()
    }
}

impl<const BITS: usize, const WORDS: usize> FromStr for BinArray<BITS, WORDS> {
    type Err = BinArrayError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_bstring(s)
    }
}

impl<const BITS: usize, const WORDS: usize> From<BinArray<BITS, WORDS>> for BinArrayRepr {
    fn from(ba: BinArray<BITS, WORDS>) -> Self {
        Self {
            bits: BITS,
            words: ba.words.to_vec(),
        }
    }
}

impl<const BITS: usize, const WORDS: usize> TryFrom<BinArrayRepr> for BinArray<BITS, WORDS> {
    type Error = BinArrayError;

    fn try_from(repr: BinArrayRepr) -> Result<Self> {
        if repr.bits != BITS {
            return Err(BinArrayError::LengthMismatch {
                expected: BITS,
                actual: repr.bits,
            });
        }
        let words: [Word; WORDS] =
            repr.words
                .try_into()
                .map_err(|w: Vec<Word>| BinArrayError::LengthMismatch {
                    expected: WORDS,
                    actual: w.len(),
                })?;
        Self::from_words(words)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Word-level copy between two arrays of any size.
///
/// Copies `num_words` words from `src` starting at `src_word_offset` into
/// `dst` starting at `dst_word_offset`. Padding bits of `dst` are cleared
/// afterwards.
///
/// # Panics
///
/// Panics if either word range is out of bounds.
#[inline]
pub fn binarray_copy_words<const DB: usize, const DW: usize, const SB: usize, const SW: usize>(
    dst: &mut BinArray<DB, DW>,
    src: &BinArray<SB, SW>,
    dst_word_offset: usize,
    src_word_offset: usize,
    num_words: usize,
) {
    let dst_end = dst_word_offset + num_words;
    let src_end = src_word_offset + num_words;

    debug_assert!(dst_end <= DW, "dst word overflow");
    debug_assert!(src_end <= SW, "src word overflow");

    dst.words[dst_word_offset..dst_end].copy_from_slice(&src.words[src_word_offset..src_end]);
    dst.mask_padding();
}
