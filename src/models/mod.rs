/// Packed fixed-size bit rows
pub mod bit_array;
/// Growable MSB-first bit buffer
pub mod bit_vector;
/// Grid of signed byte cells
pub mod byte_matrix;
/// Packed 2D module matrix
pub mod matrix;

pub use bit_array::BitArray;
pub use bit_vector::BitVector;
pub use byte_matrix::ByteMatrix;
pub use matrix::BitMatrix;
