/// Payload bit assembly: mode headers, character counts, data segments, padding
use super::eci::CharacterSetEci;
use super::mode::Mode;
use crate::error::{QrError, Result};
use crate::models::BitVector;

/// Alphanumeric character set: 0-9, A-Z, space, $%*+-./:
const ALPHANUMERIC_TABLE: [char; 45] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I',
    'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', ' ', '$',
    '%', '*', '+', '-', '.', '/', ':',
];

/// Pad codewords appended alternately after the terminator
const PAD_BYTES: [u32; 2] = [0xEC, 0x11];

/// Value of `c` in the alphanumeric table
pub fn alphanumeric_code(c: char) -> Option<u32> {
    ALPHANUMERIC_TABLE
        .iter()
        .position(|&t| t == c)
        .map(|p| p as u32)
}

/// Most compact of numeric, alphanumeric and byte mode for `content`
pub fn choose_mode(content: &str) -> Mode {
    let mut has_numeric = false;
    let mut has_alphanumeric = false;
    for c in content.chars() {
        if c.is_ascii_digit() {
            has_numeric = true;
        } else if alphanumeric_code(c).is_some() {
            has_alphanumeric = true;
        } else {
            return Mode::Byte;
        }
    }
    if has_alphanumeric {
        Mode::Alphanumeric
    } else if has_numeric {
        Mode::Numeric
    } else {
        Mode::Byte
    }
}

/// 4-bit mode indicator
pub fn append_mode_info(mode: Mode, bits: &mut BitVector) -> Result<()> {
    bits.append_bits(mode.bits() as u32, 4)
}

/// Character count field for `num_letters` in `mode` at `version`
pub fn append_length_info(
    num_letters: usize,
    version: u32,
    mode: Mode,
    bits: &mut BitVector,
) -> Result<()> {
    let num_bits = mode.character_count_bits(version)?;
    if num_letters >= (1usize << num_bits) {
        return Err(QrError::LengthOverflow {
            count: num_letters,
            bits: num_bits,
        });
    }
    bits.append_bits(num_letters as u32, num_bits as usize)
}

/// ECI header: mode indicator then the 8-bit designator
pub fn append_eci(eci: &CharacterSetEci, bits: &mut BitVector) -> Result<()> {
    append_mode_info(Mode::Eci, bits)?;
    bits.append_bits(eci.value(), 8)
}

/// Encode `content` in the given data mode. Byte mode takes the UTF-8 bytes.
pub fn append_bytes(content: &str, mode: Mode, bits: &mut BitVector) -> Result<()> {
    match mode {
        Mode::Numeric => append_numeric_bytes(content, bits),
        Mode::Alphanumeric => append_alphanumeric_bytes(content, bits),
        Mode::Byte => append_8bit_bytes(content.as_bytes(), bits),
        _ => Err(QrError::UnsupportedMode(mode)),
    }
}

/// Digits in groups of three (10 bits), a trailing pair (7 bits) or single (4 bits)
pub fn append_numeric_bytes(content: &str, bits: &mut BitVector) -> Result<()> {
    let digits = content
        .chars()
        .map(|c| c.to_digit(10).ok_or(QrError::InvalidCharacter(c)))
        .collect::<Result<Vec<u32>>>()?;

    for group in digits.chunks(3) {
        match *group {
            [a, b, c] => bits.append_bits(a * 100 + b * 10 + c, 10)?,
            [a, b] => bits.append_bits(a * 10 + b, 7)?,
            [a] => bits.append_bits(a, 4)?,
            _ => unreachable!(),
        }
    }
    Ok(())
}

/// Character pairs as `45 * first + second` in 11 bits, a trailing single in 6 bits
pub fn append_alphanumeric_bytes(content: &str, bits: &mut BitVector) -> Result<()> {
    let codes = content
        .chars()
        .map(|c| alphanumeric_code(c).ok_or(QrError::InvalidCharacter(c)))
        .collect::<Result<Vec<u32>>>()?;

    for pair in codes.chunks(2) {
        match *pair {
            [a, b] => bits.append_bits(a * 45 + b, 11)?,
            [a] => bits.append_bits(a, 6)?,
            _ => unreachable!(),
        }
    }
    Ok(())
}

/// Raw bytes, 8 bits each
pub fn append_8bit_bytes(bytes: &[u8], bits: &mut BitVector) -> Result<()> {
    for &b in bytes {
        bits.append_bits(b as u32, 8)?;
    }
    Ok(())
}

/// Shift_JIS double-byte characters, 13 bits each
pub fn append_kanji_bytes(sjis: &[u8], bits: &mut BitVector) -> Result<()> {
    if sjis.len() % 2 != 0 {
        return Err(QrError::InvalidKanji);
    }
    for pair in sjis.chunks_exact(2) {
        let code = ((pair[0] as u32) << 8) | pair[1] as u32;
        let subtracted = match code {
            0x8140..=0x9ffc => code - 0x8140,
            0xe040..=0xebbf => code - 0xc140,
            _ => return Err(QrError::InvalidKanji),
        };
        let encoded = (subtracted >> 8) * 0xc0 + (subtracted & 0xff);
        bits.append_bits(encoded, 13)?;
    }
    Ok(())
}

/// Terminate and pad `bits` to exactly `num_data_bytes` codewords.
///
/// Up to four terminator zeros (fewer if capacity runs out), zero fill to the
/// next byte boundary, then alternating 0xEC / 0x11 pad codewords.
pub fn terminate_bits(num_data_bytes: usize, bits: &mut BitVector) -> Result<()> {
    let capacity = num_data_bytes * 8;
    if bits.size() > capacity {
        return Err(QrError::CapacityExceeded {
            bits: bits.size(),
            capacity_bits: capacity,
        });
    }
    for _ in 0..4 {
        if bits.size() >= capacity {
            break;
        }
        bits.append_bit(0)?;
    }
    let num_bits_in_last_byte = bits.size() & 0x07;
    if num_bits_in_last_byte > 0 {
        for _ in num_bits_in_last_byte..8 {
            bits.append_bit(0)?;
        }
    }
    let num_padding_bytes = num_data_bytes - bits.size_in_bytes();
    for i in 0..num_padding_bytes {
        bits.append_bits(PAD_BYTES[i % 2], 8)?;
    }
    if bits.size() != capacity {
        return Err(QrError::CapacityExceeded {
            bits: bits.size(),
            capacity_bits: capacity,
        });
    }
    Ok(())
}
