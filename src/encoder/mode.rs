/// QR data modes (ISO/IEC 18004 table 2)
use crate::error::{QrError, Result};
use std::fmt;

/// Mode indicator plus the version-banded width of its character count field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// End of message (0000)
    Terminator,
    /// Digits 0-9 (0001)
    Numeric,
    /// 45-character alphanumeric set (0010)
    Alphanumeric,
    /// Structured append header (0011), not supported for payloads
    StructuredAppend,
    /// 8-bit bytes (0100)
    Byte,
    /// Extended Channel Interpretation designator (0111)
    Eci,
    /// Shift_JIS double-byte characters (1000)
    Kanji,
    /// FNC1 in first position (0101)
    Fnc1FirstPosition,
    /// FNC1 in second position (1001)
    Fnc1SecondPosition,
}

impl Mode {
    /// Mode for a 4-bit indicator
    pub fn for_bits(bits: u8) -> Result<Self> {
        match bits {
            0x0 => Ok(Mode::Terminator),
            0x1 => Ok(Mode::Numeric),
            0x2 => Ok(Mode::Alphanumeric),
            0x3 => Ok(Mode::StructuredAppend),
            0x4 => Ok(Mode::Byte),
            0x5 => Ok(Mode::Fnc1FirstPosition),
            0x7 => Ok(Mode::Eci),
            0x8 => Ok(Mode::Kanji),
            0x9 => Ok(Mode::Fnc1SecondPosition),
            _ => Err(QrError::UnknownModeBits(bits)),
        }
    }

    /// 4-bit mode indicator
    pub fn bits(&self) -> u8 {
        match self {
            Mode::Terminator => 0x0,
            Mode::Numeric => 0x1,
            Mode::Alphanumeric => 0x2,
            Mode::StructuredAppend => 0x3,
            Mode::Byte => 0x4,
            Mode::Fnc1FirstPosition => 0x5,
            Mode::Eci => 0x7,
            Mode::Kanji => 0x8,
            Mode::Fnc1SecondPosition => 0x9,
        }
    }

    /// Upper-case mode name, e.g. `FNC1_FIRST_POSITION`
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Terminator => "TERMINATOR",
            Mode::Numeric => "NUMERIC",
            Mode::Alphanumeric => "ALPHANUMERIC",
            Mode::StructuredAppend => "STRUCTURED_APPEND",
            Mode::Byte => "BYTE",
            Mode::Eci => "ECI",
            Mode::Kanji => "KANJI",
            Mode::Fnc1FirstPosition => "FNC1_FIRST_POSITION",
            Mode::Fnc1SecondPosition => "FNC1_SECOND_POSITION",
        }
    }

    /// Count field widths for versions 1-9, 10-26 and 27-40.
    ///
    /// `None` for modes without a count field. Structured append is listed
    /// without one as well, since this crate does not encode it.
    pub fn character_count_table(&self) -> Option<&'static [u8; 3]> {
        match self {
            Mode::Terminator => Some(&[0, 0, 0]),
            Mode::Numeric => Some(&[10, 12, 14]),
            Mode::Alphanumeric => Some(&[9, 11, 13]),
            Mode::Byte => Some(&[8, 16, 16]),
            Mode::Kanji => Some(&[8, 10, 12]),
            Mode::StructuredAppend
            | Mode::Eci
            | Mode::Fnc1FirstPosition
            | Mode::Fnc1SecondPosition => None,
        }
    }

    /// Width of the character count field for a symbol version
    pub fn character_count_bits(&self, version: u32) -> Result<u8> {
        let table = self
            .character_count_table()
            .ok_or(QrError::NoCharacterCountTable(*self))?;
        let offset = if version <= 9 {
            0
        } else if version <= 26 {
            1
        } else {
            2
        };
        Ok(table[offset])
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
