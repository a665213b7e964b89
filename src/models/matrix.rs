use super::bit_array::BitArray;
use crate::error::{QrError, Result};
use std::fmt;

/// Compact bit matrix of black (true) / white (false) modules
///
/// Rows are packed into 32-bit words, `row_size = ceil(width / 32)` words per
/// row; the least-significant bit of a word is the lowest x in that word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    width: usize,
    height: usize,
    row_size: usize,
    bits: Vec<u32>,
}

impl BitMatrix {
    /// Create a new bit matrix with given dimensions, all modules white
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width < 1 || height < 1 {
            return Err(QrError::InvalidDimensions { width, height });
        }
        let row_size = width.div_ceil(32);
        Ok(Self {
            width,
            height,
            row_size,
            bits: vec![0; row_size * height],
        })
    }

    /// Create a square matrix
    pub fn square(dimension: usize) -> Result<Self> {
        Self::new(dimension, dimension)
    }

    /// Get matrix width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get matrix height
    pub fn height(&self) -> usize {
        self.height
    }

    /// Side length of a square matrix
    pub fn dimension(&self) -> Result<usize> {
        if self.width != self.height {
            return Err(QrError::NotSquare {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.width)
    }

    /// Get bit at (x, y)
    pub fn get(&self, x: usize, y: usize) -> Result<bool> {
        let offset = self.offset(x, y)?;
        Ok((self.bits[offset] >> (x & 0x1f)) & 1 != 0)
    }

    /// Set bit at (x, y) to black
    pub fn set(&mut self, x: usize, y: usize) -> Result<()> {
        let offset = self.offset(x, y)?;
        self.bits[offset] |= 1 << (x & 0x1f);
        Ok(())
    }

    /// Toggle bit at (x, y)
    pub fn flip(&mut self, x: usize, y: usize) -> Result<()> {
        let offset = self.offset(x, y)?;
        self.bits[offset] ^= 1 << (x & 0x1f);
        Ok(())
    }

    /// Clear all bits to 0
    pub fn clear(&mut self) {
        self.bits.fill(0);
    }

    /// Set every module in the rectangle to black
    pub fn set_region(&mut self, left: usize, top: usize, width: usize, height: usize) -> Result<()> {
        if width < 1 || height < 1 {
            return Err(QrError::EmptyRegion { width, height });
        }
        let out_of_bounds = QrError::RegionOutOfBounds {
            left,
            top,
            width,
            height,
        };
        let (Some(right), Some(bottom)) = (left.checked_add(width), top.checked_add(height)) else {
            return Err(out_of_bounds);
        };
        if right > self.width || bottom > self.height {
            return Err(out_of_bounds);
        }
        for y in top..bottom {
            let row_offset = y * self.row_size;
            for x in left..right {
                self.bits[row_offset + (x >> 5)] |= 1 << (x & 0x1f);
            }
        }
        Ok(())
    }

    /// Copy row `y` into a bit array.
    ///
    /// `reuse` is recycled when it can hold `width` bits, otherwise a new
    /// array is allocated.
    pub fn get_row(&self, y: usize, reuse: Option<BitArray>) -> Result<BitArray> {
        if y >= self.height {
            return Err(QrError::CoordinateOutOfRange {
                x: 0,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let mut row = match reuse {
            Some(mut row) if row.size() >= self.width => {
                row.clear();
                row
            }
            _ => BitArray::new(self.width),
        };
        let offset = y * self.row_size;
        row.words_mut()[..self.row_size].copy_from_slice(&self.bits[offset..offset + self.row_size]);
        Ok(row)
    }

    fn offset(&self, x: usize, y: usize) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(QrError::CoordinateOutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y * self.row_size + (x >> 5))
    }
}

/// One text row per matrix row: `X ` for black, two spaces for white.
impl fmt::Display for BitMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            let row_offset = y * self.row_size;
            for x in 0..self.width {
                let black = (self.bits[row_offset + (x >> 5)] >> (x & 0x1f)) & 1 != 0;
                f.write_str(if black { "X " } else { "  " })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_matrix() {
        let mut matrix = BitMatrix::new(8, 8).unwrap();
        assert_eq!(matrix.width(), 8);
        assert_eq!(matrix.height(), 8);
        assert_eq!(matrix.dimension(), Ok(8));

        matrix.set(3, 4).unwrap();
        assert!(matrix.get(3, 4).unwrap());
        assert!(!matrix.get(3, 3).unwrap());

        matrix.flip(3, 4).unwrap();
        assert!(!matrix.get(3, 4).unwrap());
        matrix.flip(3, 4).unwrap();

        matrix.clear();
        assert!(!matrix.get(3, 4).unwrap());
    }

    #[test]
    fn test_out_of_bounds() {
        let mut matrix = BitMatrix::new(8, 8).unwrap();
        let err = QrError::CoordinateOutOfRange {
            x: 10,
            y: 10,
            width: 8,
            height: 8,
        };
        assert_eq!(matrix.set(10, 10), Err(err.clone()));
        assert_eq!(matrix.get(10, 10), Err(err.clone()));
        assert_eq!(matrix.flip(10, 10), Err(err));
    }

    #[test]
    fn test_invalid_dimensions() {
        assert_eq!(
            BitMatrix::new(0, 5),
            Err(QrError::InvalidDimensions {
                width: 0,
                height: 5
            })
        );
        let rect = BitMatrix::new(5, 3).unwrap();
        assert_eq!(
            rect.dimension(),
            Err(QrError::NotSquare {
                width: 5,
                height: 3
            })
        );
    }

    #[test]
    fn test_wide_rows_pack_into_words() {
        let mut matrix = BitMatrix::new(70, 3).unwrap();
        matrix.set(0, 1).unwrap();
        matrix.set(31, 1).unwrap();
        matrix.set(32, 1).unwrap();
        matrix.set(69, 1).unwrap();
        for x in 0..70 {
            let expected = matches!(x, 0 | 31 | 32 | 69);
            assert_eq!(matrix.get(x, 1).unwrap(), expected, "x={}", x);
            assert!(!matrix.get(x, 0).unwrap());
            assert!(!matrix.get(x, 2).unwrap());
        }
    }

    #[test]
    fn test_set_region() {
        let mut matrix = BitMatrix::square(10).unwrap();
        matrix.set_region(2, 2, 3, 3).unwrap();
        for y in 0..10 {
            for x in 0..10 {
                let inside = (2..5).contains(&x) && (2..5).contains(&y);
                assert_eq!(matrix.get(x, y).unwrap(), inside, "({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_set_region_errors() {
        let mut matrix = BitMatrix::square(10).unwrap();
        assert_eq!(
            matrix.set_region(0, 0, 0, 3),
            Err(QrError::EmptyRegion {
                width: 0,
                height: 3
            })
        );
        assert!(matches!(
            matrix.set_region(8, 8, 3, 1),
            Err(QrError::RegionOutOfBounds { .. })
        ));
        // Offsets near usize::MAX must not wrap back into the matrix
        assert!(matches!(
            matrix.set_region(usize::MAX, 0, 1, 1),
            Err(QrError::RegionOutOfBounds { .. })
        ));
        assert!(matches!(
            matrix.set_region(0, usize::MAX - 1, 1, 5),
            Err(QrError::RegionOutOfBounds { .. })
        ));
        assert!(!matrix.get(0, 0).unwrap());
        matrix.set_region(0, 0, 10, 10).unwrap();
        assert!(matrix.get(9, 9).unwrap());
    }

    #[test]
    fn test_get_row() {
        let mut matrix = BitMatrix::new(40, 2).unwrap();
        matrix.set(1, 1).unwrap();
        matrix.set(35, 1).unwrap();

        let row = matrix.get_row(1, None).unwrap();
        assert_eq!(row.size(), 40);
        assert!(row.get(1).unwrap());
        assert!(row.get(35).unwrap());
        assert!(!row.get(2).unwrap());

        // Large enough buffer is recycled and cleared
        let mut big = BitArray::new(64);
        big.set(60).unwrap();
        let row = matrix.get_row(0, Some(big)).unwrap();
        assert_eq!(row.size(), 64);
        assert!(!row.get(60).unwrap());

        // Too small buffer is replaced
        let row = matrix.get_row(1, Some(BitArray::new(8))).unwrap();
        assert_eq!(row.size(), 40);
        assert!(row.get(35).unwrap());

        assert!(matrix.get_row(2, None).is_err());
    }

    #[test]
    fn test_display() {
        let mut matrix = BitMatrix::new(3, 2).unwrap();
        matrix.set(0, 0).unwrap();
        matrix.set(2, 1).unwrap();
        assert_eq!(matrix.to_string(), "X     \n    X \n");
    }
}
