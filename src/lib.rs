//! BinArray - Statically Sized Binary Arrays
//!
//! BinArray provides bit arrays whose length is fixed at compile time. The
//! bits live inline (on the stack or inside the owning struct), so there is no
//! heap allocation, no capacity bookkeeping and no length check on the hot
//! path. This makes them a faster alternative to a dynamically sized bit
//! vector such as `bitvec::BitVec` when the size is known up front.
//!
//! # Key Characteristics
//!
//! - Standard unsigned integers used directly as small bit arrays
//! - Arbitrary sizes through const generics, packed into 32-bit words
//! - `Copy` values with word-level bitwise operators
//! - `debug_assert!` bounds checks in hot paths, `checked_*` variants for
//!   untrusted indices
//!
//! # Architecture
//!
//! - **BinaryArray**: single-bit access on `u8`..`u128` and `usize`
//! - **BinArray**: `BinArray<BITS, WORDS>` over `[u32; WORDS]`
//! - **persist**: bincode save/load
//!
//! # Examples
//!
//! ## Integers as Bit Arrays
//!
//! ```
//! use binarray::BinaryArray;
//!
//! let mut mask = 0_u16;
//! mask.set_bit(3, true);
//! mask.set_bit(15, true);
//! assert!(mask.get_bit(15));
//! assert_eq!(mask.to_bstring(), "1000000000001000");
//! ```
//!
//! ## Fixed-Size Arrays
//!
//! ```
//! use binarray::BinArray1024;
//!
//! let mut ba = BinArray1024::new();
//! ba.set_bit(10);
//! ba.set_bit(20);
//! ba.set_bit(30);
//!
//! assert_eq!(ba.num_set(), 3);
//! assert_eq!(ba.get_acts(), vec![10, 20, 30]);
//!
//! // Bitwise operations
//! let mut ba2 = BinArray1024::new();
//! ba2.set_bit(20);
//! ba2.set_bit(40);
//!
//! let intersection = ba & ba2;
//! assert_eq!(intersection.num_set(), 1); // Only bit 20 is common
//! ```
//!
//! ## Random Pattern Generation
//!
//! ```
//! use binarray::BinArray2048;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let mut ba = BinArray2048::new();
//!
//! // Set 10% of bits randomly
//! ba.random_set_pct(&mut rng, 0.1);
//! assert_eq!(ba.num_set(), 205);
//! ```
//!
//! # Safety
//!
//! BinArray contains no `unsafe` code. Index bounds are checked with
//! `debug_assert!` in hot paths; in release builds an out-of-range index
//! still panics through slice indexing rather than corrupting memory.

pub mod binarray;
pub mod binary_array;
pub mod error;
pub mod persist;
pub mod utils;

// Re-exports for convenient access
pub use binarray::{
    binarray_copy_words, BinArray, BinArrayRepr, IterOnes, Word, BITS_PER_WORD, WORD_MAX,
};
pub use binary_array::BinaryArray;
pub use error::{BinArrayError, Result};

/// 8-bit array in one word
pub type BinArray8 = BinArray<8, 1>;
/// 16-bit array in one word
pub type BinArray16 = BinArray<16, 1>;
/// 32-bit array in one word
pub type BinArray32 = BinArray<32, 1>;
/// 64-bit array in two words
pub type BinArray64 = BinArray<64, 2>;
/// 128-bit array in four words
pub type BinArray128 = BinArray<128, 4>;
/// 256-bit array
pub type BinArray256 = BinArray<256, 8>;
/// 512-bit array
pub type BinArray512 = BinArray<512, 16>;
/// 1024-bit array
pub type BinArray1024 = BinArray<1024, 32>;
/// 2048-bit array
pub type BinArray2048 = BinArray<2048, 64>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = "BinArray";

/// Get version string
pub fn version() -> String {
    format!("{} v{}", NAME, VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(ver.contains("BinArray"));
        assert!(ver.contains(VERSION));
    }

    #[test]
    fn test_re_exports() {
        let _ba = BinArray32::new();
        let _result: Result<()> = Ok(());
        assert_eq!(BITS_PER_WORD, 32);
        assert_eq!(<u64 as BinaryArray>::BITS, 64);
    }

    #[test]
    fn test_alias_layouts() {
        assert_eq!(BinArray8::new().num_words(), 1);
        assert_eq!(BinArray64::new().num_words(), 2);
        assert_eq!(BinArray2048::new().num_words(), 64);
        assert_eq!(BinArray2048::new().memory_usage(), 256);
    }
}
