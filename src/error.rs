use crate::encoder::Mode;
use thiserror::Error;

/// Errors raised by the encoding primitives.
///
/// Every variant is a local contract violation: a bad argument, a misuse of a
/// table, or input that cannot fit. Nothing here is transient, so callers should
/// surface these rather than retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QrError {
    /// A bit value other than 0 or 1
    #[error("bit value must be 0 or 1, got {0}")]
    InvalidBit(u8),

    /// `num_bits` outside 0..=32
    #[error("num_bits must be between 0 and 32, got {0}")]
    BitCountOutOfRange(usize),

    /// Reed-Solomon encode asked for zero EC codewords
    #[error("no error correction bytes requested")]
    NoErrorCorrectionBytes,

    /// Reed-Solomon encode left no room for data codewords
    #[error("no data bytes: {total} codewords with {ec_bytes} EC bytes")]
    NoDataBytes {
        /// Length of the codeword buffer
        total: usize,
        /// EC codewords requested
        ec_bytes: usize,
    },

    /// Reed-Solomon encoder bound to a field other than the QR field
    #[error("Reed-Solomon encoding only supports the QR code field")]
    UnsupportedField,

    /// Polynomial built from an empty coefficient list
    #[error("polynomial needs at least one coefficient")]
    EmptyCoefficients,

    /// Polynomial division by the zero polynomial
    #[error("division by the zero polynomial")]
    DivisionByZero,

    /// Discrete log of the zero element
    #[error("zero has no logarithm")]
    ZeroHasNoLogarithm,

    /// Multiplicative inverse of the zero element
    #[error("zero has no multiplicative inverse")]
    ZeroHasNoInverse,

    /// XOR of two bit vectors of different sizes
    #[error("size mismatch: {left} bits vs {right} bits")]
    SizeMismatch {
        /// Size of the vector being modified
        left: usize,
        /// Size of the other operand
        right: usize,
    },

    /// Matrix with a zero-length side
    #[error("matrix dimensions must be at least 1x1, got {width}x{height}")]
    InvalidDimensions {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },

    /// Region with a zero-length side
    #[error("region must be at least 1x1, got {width}x{height}")]
    EmptyRegion {
        /// Region width
        width: usize,
        /// Region height
        height: usize,
    },

    /// Region extending past the matrix
    #[error("region {left},{top} {width}x{height} does not fit the matrix")]
    RegionOutOfBounds {
        /// Left column of the region
        left: usize,
        /// Top row of the region
        top: usize,
        /// Region width
        width: usize,
        /// Region height
        height: usize,
    },

    /// Bit index past the logical end of a vector or array
    #[error("index {index} out of range for size {size}")]
    IndexOutOfRange {
        /// Requested bit index
        index: usize,
        /// Logical size in bits
        size: usize,
    },

    /// Module coordinate outside a matrix
    #[error("coordinate ({x}, {y}) out of range for {width}x{height} matrix")]
    CoordinateOutOfRange {
        /// Column
        x: usize,
        /// Row
        y: usize,
        /// Matrix width
        width: usize,
        /// Matrix height
        height: usize,
    },

    /// `dimension()` on a non-square matrix
    #[error("matrix is not square: {width}x{height}")]
    NotSquare {
        /// Matrix width
        width: usize,
        /// Matrix height
        height: usize,
    },

    /// 4-bit value that is not a QR mode indicator
    #[error("unknown mode indicator 0x{0:X}")]
    UnknownModeBits(u8),

    /// Character count requested for a mode without a count field
    #[error("mode {0} has no character count field")]
    NoCharacterCountTable(Mode),

    /// Character outside the set the chosen mode can carry
    #[error("character {0:?} cannot be encoded in this mode")]
    InvalidCharacter(char),

    /// Shift_JIS input that is not a sequence of QR Kanji pairs
    #[error("input is not valid QR Kanji (Shift_JIS double-byte) data")]
    InvalidKanji,

    /// Bits that do not fit the available capacity
    #[error("{bits} bits exceed capacity of {capacity_bits} bits")]
    CapacityExceeded {
        /// Bits already written
        bits: usize,
        /// Bits available
        capacity_bits: usize,
    },

    /// Inconsistent data/EC/block counts
    #[error("invalid block layout: {0}")]
    InvalidBlockLayout(String),

    /// Character count too large for the mode's count field
    #[error("count {count} does not fit in {bits} bits")]
    LengthOverflow {
        /// Character count to encode
        count: usize,
        /// Width of the count field
        bits: u8,
    },

    /// Mode that carries no payload data of its own
    #[error("mode {0} cannot carry payload data")]
    UnsupportedMode(Mode),
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, QrError>;
