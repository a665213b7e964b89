//! Reed-Solomon error correction for QR codes
//!
//! - GF(256) arithmetic over the QR primitive polynomial
//! - Polynomials over that field
//! - The encoder that appends EC codewords to a block of data codewords

/// Reed-Solomon encoder with a cached generator table
pub mod encoder;
/// GF(256) field tables and element arithmetic
pub mod gf256;
/// Polynomial arithmetic over GF(256)
pub mod poly;

pub use encoder::ReedSolomonEncoder;
pub use gf256::{DATA_MATRIX_FIELD, Gf256, QR_CODE_FIELD};
pub use poly::Gf256Poly;
