//! qr_encode - QR Code symbol encoding primitives
//!
//! GF(256) arithmetic, Reed-Solomon error correction, bit containers and the
//! mode / character set tables a QR encoder is built from.
//!
//! ```
//! use qr_encode::{BitVector, Mode, interleave_with_ec_bytes};
//! use qr_encode::encoder::{append_bytes, append_length_info, append_mode_info, terminate_bits};
//!
//! let mut bits = BitVector::new();
//! append_mode_info(Mode::Numeric, &mut bits).unwrap();
//! append_length_info(8, 1, Mode::Numeric, &mut bits).unwrap();
//! append_bytes("01234567", Mode::Numeric, &mut bits).unwrap();
//! terminate_bits(16, &mut bits).unwrap();
//!
//! let codewords = interleave_with_ec_bytes(&bits, 26, 16, 1).unwrap();
//! assert_eq!(codewords.size_in_bytes(), 26);
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

mod config;
/// Payload assembly: modes, ECI, bit packing, block interleaving
pub mod encoder;
/// Error type shared by every module
pub mod error;
/// Bit and byte containers (BitVector, BitArray, BitMatrix, ByteMatrix)
pub mod models;
/// GF(256), polynomials and the Reed-Solomon encoder
pub mod reed_solomon;
/// Rendering helpers for matrices (PNG output, codeword dumps)
pub mod tools;

pub use encoder::{BlockPair, CharacterSetEci, Mode, interleave_with_ec_bytes};
pub use error::{QrError, Result};
pub use models::{BitArray, BitMatrix, BitVector, ByteMatrix};
pub use reed_solomon::{DATA_MATRIX_FIELD, Gf256, Gf256Poly, QR_CODE_FIELD, ReedSolomonEncoder};
