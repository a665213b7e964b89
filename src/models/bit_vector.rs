use crate::config;
use crate::error::{QrError, Result};
use std::fmt;

/// Growable bit buffer, most-significant bit first within each byte.
///
/// The backing array is zero-filled and may be longer than the bits in use;
/// `size_in_bytes()` is the valid extent. Bits are only ever OR'd into fresh
/// zero bytes, so unused tail bits of the last byte stay zero.
#[derive(Debug, Clone)]
pub struct BitVector {
    size_in_bits: usize,
    array: Vec<u8>,
}

impl BitVector {
    /// Create an empty vector with the configured initial capacity
    pub fn new() -> Self {
        Self::with_capacity(config::bit_vector_capacity())
    }

    /// Create an empty vector backed by `bytes` zeroed bytes
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            size_in_bits: 0,
            array: vec![0; bytes.max(1)],
        }
    }

    /// Bit (0 or 1) at `index`
    pub fn at(&self, index: usize) -> Result<u8> {
        if index >= self.size_in_bits {
            return Err(QrError::IndexOutOfRange {
                index,
                size: self.size_in_bits,
            });
        }
        let value = self.array[index >> 3];
        Ok((value >> (7 - (index & 0x7))) & 1)
    }

    /// Logical length in bits
    pub fn size(&self) -> usize {
        self.size_in_bits
    }

    /// Number of bytes covering the used bits
    pub fn size_in_bytes(&self) -> usize {
        self.size_in_bits.div_ceil(8)
    }

    /// Byte at `index`, for byte-aligned readers
    pub fn byte_at(&self, index: usize) -> Result<u8> {
        if index >= self.size_in_bytes() {
            return Err(QrError::IndexOutOfRange {
                index,
                size: self.size_in_bytes(),
            });
        }
        Ok(self.array[index])
    }

    /// Append a single bit, 0 or 1
    pub fn append_bit(&mut self, bit: u8) -> Result<()> {
        if bit > 1 {
            return Err(QrError::InvalidBit(bit));
        }
        let num_bits_in_last_byte = self.size_in_bits & 0x7;
        // The last byte is full, so open a fresh one and step back into it
        if num_bits_in_last_byte == 0 {
            self.append_byte(0);
            self.size_in_bits -= 8;
        }
        self.array[self.size_in_bits >> 3] |= bit << (7 - num_bits_in_last_byte);
        self.size_in_bits += 1;
        Ok(())
    }

    /// Append the low `num_bits` bits of `value`, most-significant first.
    ///
    /// Examples:
    /// - `append_bits(0x00, 1)` adds 0.
    /// - `append_bits(0x00, 4)` adds 0000.
    /// - `append_bits(0xff, 8)` adds 11111111.
    pub fn append_bits(&mut self, value: u32, num_bits: usize) -> Result<()> {
        if num_bits > 32 {
            return Err(QrError::BitCountOutOfRange(num_bits));
        }
        let mut num_bits_left = num_bits;
        while num_bits_left > 0 {
            if self.size_in_bits & 0x7 == 0 && num_bits_left >= 8 {
                let new_byte = ((value >> (num_bits_left - 8)) & 0xff) as u8;
                self.append_byte(new_byte);
                num_bits_left -= 8;
            } else {
                let bit = ((value >> (num_bits_left - 1)) & 1) as u8;
                self.append_bit(bit)?;
                num_bits_left -= 1;
            }
        }
        Ok(())
    }

    /// Append every bit of `bits`
    pub fn append_bit_vector(&mut self, bits: &BitVector) -> Result<()> {
        for i in 0..bits.size() {
            self.append_bit(bits.at(i)?)?;
        }
        Ok(())
    }

    /// XOR in place against a vector of the same size
    pub fn xor(&mut self, other: &BitVector) -> Result<()> {
        if self.size_in_bits != other.size() {
            return Err(QrError::SizeMismatch {
                left: self.size_in_bits,
                right: other.size(),
            });
        }
        let size_in_bytes = self.size_in_bytes();
        for (dst, &src) in self.array[..size_in_bytes]
            .iter_mut()
            .zip(&other.array[..size_in_bytes])
        {
            *dst ^= src;
        }
        Ok(())
    }

    /// Backing array; only the first `size_in_bytes()` bytes are meaningful
    pub fn array(&self) -> &[u8] {
        &self.array
    }

    /// Add a whole byte at a byte-aligned cursor, doubling storage when full.
    fn append_byte(&mut self, value: u8) {
        let index = self.size_in_bits >> 3;
        if index == self.array.len() {
            let doubled = self.array.len() * 2;
            self.array.resize(doubled.max(1), 0);
        }
        self.array[index] = value;
        self.size_in_bits += 8;
    }
}

impl Default for BitVector {
    fn default() -> Self {
        Self::new()
    }
}

/// Equal when the used bits match, whatever the spare capacity.
impl PartialEq for BitVector {
    fn eq(&self, other: &Self) -> bool {
        self.size_in_bits == other.size_in_bits
            && self.array[..self.size_in_bytes()] == other.array[..other.size_in_bytes()]
    }
}

impl Eq for BitVector {}

impl fmt::Display for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.size_in_bits {
            let bit = (self.array[i >> 3] >> (7 - (i & 0x7))) & 1;
            f.write_str(if bit == 1 { "1" } else { "0" })?;
        }
        Ok(())
    }
}
