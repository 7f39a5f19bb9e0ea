//! Error types for BinArray.
//!
//! This module provides a unified error type for the fallible operations in the
//! crate, using the `thiserror` crate for ergonomic error handling. Hot-path bit
//! operations do not return errors; only the `checked_*` variants, the parsing
//! constructors and the serialization layer do.

use thiserror::Error;

/// The main error type for BinArray operations.
#[derive(Error, Debug)]
pub enum BinArrayError {
    /// Bit index out of bounds
    #[error("Index out of bounds: index {index}, length {length}")]
    IndexOutOfBounds {
        /// The index that was accessed
        index: usize,
        /// The valid length in bits
        length: usize,
    },

    /// Bit range out of bounds
    #[error("Range out of bounds: [{beg}, {beg}+{len}) exceeds length {length}")]
    RangeOutOfBounds {
        /// First bit of the range
        beg: usize,
        /// Number of bits in the range
        len: usize,
        /// The valid length in bits
        length: usize,
    },

    /// Input has the wrong number of bits, bytes or words
    #[error("Length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Expected length
        expected: usize,
        /// Actual length received
        actual: usize,
    },

    /// A binary string contained something other than `0` or `1`
    #[error("Invalid binary digit {digit:?} at position {position}")]
    InvalidDigit {
        /// The offending character
        digit: char,
        /// Character position in the string
        position: usize,
    },

    /// Storage bits past the logical length were non-zero
    #[error("Padding bits set beyond bit {bits}")]
    PaddingBitsSet {
        /// Logical length in bits
        bits: usize,
    },

    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Binary serialization error occurred
    #[error("Serialization error: {0}")]
    Serialization(#[from] bincode::Error),

    /// JSON serialization error occurred
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for BinArray operations.
pub type Result<T> = std::result::Result<T, BinArrayError>;
