use std::fmt;

/// Module value not yet decided (reserved)
pub const EMPTY: i8 = -1;

/// Grid of signed module values used while laying out a symbol.
///
/// By convention -1 marks an undecided module, 0 white and 1 black.
/// Coordinates must lie inside the grid; accessors panic otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteMatrix {
    width: usize,
    height: usize,
    bytes: Vec<Vec<i8>>,
}

impl ByteMatrix {
    /// New grid filled with zeros
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            bytes: vec![vec![0; width]; height],
        }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell at column `x`, row `y`. Panics when out of range.
    pub fn get(&self, x: usize, y: usize) -> i8 {
        self.bytes[y][x]
    }

    /// Store `value` at column `x`, row `y`. Panics when out of range.
    pub fn set(&mut self, x: usize, y: usize, value: i8) {
        self.bytes[y][x] = value;
    }

    /// Store 1 for `true`, 0 for `false`
    pub fn set_bool(&mut self, x: usize, y: usize, value: bool) {
        self.bytes[y][x] = value as i8;
    }

    /// Fill the whole grid with `value`
    pub fn clear(&mut self, value: i8) {
        for row in &mut self.bytes {
            row.fill(value);
        }
    }

    /// Rows, top to bottom
    pub fn array(&self) -> &[Vec<i8>] {
        &self.bytes
    }
}

impl fmt::Display for ByteMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.bytes {
            for &value in row {
                f.write_str(match value {
                    0 => " 0",
                    1 => " 1",
                    _ => "  ",
                })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
