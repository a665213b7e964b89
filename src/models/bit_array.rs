use crate::error::{QrError, Result};

/// Fixed-size packed bit array, as returned by `BitMatrix::get_row`.
///
/// Bits live in 32-bit words; bit `i` is bit `i % 32` of word `i / 32`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitArray {
    size: usize,
    words: Vec<u32>,
}

impl BitArray {
    /// All-zero array of `size` bits
    pub fn new(size: usize) -> Self {
        Self {
            size,
            words: vec![0; size.div_ceil(32)],
        }
    }

    /// Length in bits
    pub fn size(&self) -> usize {
        self.size
    }

    /// Bit `i`
    pub fn get(&self, i: usize) -> Result<bool> {
        self.check(i)?;
        Ok((self.words[i >> 5] >> (i & 0x1f)) & 1 != 0)
    }

    /// Set bit `i`
    pub fn set(&mut self, i: usize) -> Result<()> {
        self.check(i)?;
        self.words[i >> 5] |= 1 << (i & 0x1f);
        Ok(())
    }

    /// Clear all bits
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    /// Backing words, bit `i` at `words[i / 32] >> (i % 32)`
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    pub(crate) fn words_mut(&mut self) -> &mut [u32] {
        &mut self.words
    }

    fn check(&self, i: usize) -> Result<()> {
        if i >= self.size {
            return Err(QrError::IndexOutOfRange {
                index: i,
                size: self.size,
            });
        }
        Ok(())
    }
}
