/// Block split, Reed-Solomon encoding per block and codeword interleaving
pub mod blocks;
/// ECI character set registry
pub mod eci;
/// Data modes and character count widths
pub mod mode;
/// Payload bit assembly
pub mod payload;

pub use blocks::{BlockPair, encode_blocks, interleave_with_ec_bytes, num_data_and_ec_bytes_for_block};
pub use eci::CharacterSetEci;
pub use mode::Mode;
pub use payload::{
    alphanumeric_code, append_8bit_bytes, append_alphanumeric_bytes, append_bytes, append_eci,
    append_kanji_bytes, append_length_info, append_mode_info, append_numeric_bytes, choose_mode,
    terminate_bits,
};
