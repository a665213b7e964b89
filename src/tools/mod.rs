use crate::error::Result;
use crate::models::{BitMatrix, BitVector, ByteMatrix};
use image::{GrayImage, Luma};
use std::path::Path;

const DARK: Luma<u8> = Luma([0]);
const LIGHT: Luma<u8> = Luma([255]);
/// Cells that are neither 0 nor 1 (unset ByteMatrix entries)
const UNSET: Luma<u8> = Luma([160]);

/// Summary statistics for a module matrix.
#[derive(Debug, Clone, Copy)]
pub struct MatrixStats {
    /// Count of dark modules.
    pub dark_modules: usize,
    /// Total modules in the matrix.
    pub total_modules: usize,
    /// Ratio of dark modules to total modules.
    pub dark_ratio: f64,
}

/// Count dark modules in a bit matrix.
pub fn matrix_stats(matrix: &BitMatrix) -> MatrixStats {
    let mut dark = 0usize;
    for y in 0..matrix.height() {
        for x in 0..matrix.width() {
            if matches!(matrix.get(x, y), Ok(true)) {
                dark += 1;
            }
        }
    }
    let total = matrix.width() * matrix.height();
    let ratio = if total == 0 {
        0.0
    } else {
        dark as f64 / total as f64
    };
    MatrixStats {
        dark_modules: dark,
        total_modules: total,
        dark_ratio: ratio,
    }
}

fn render_cells(
    width: usize,
    height: usize,
    scale: u32,
    quiet_zone: u32,
    cell: impl Fn(usize, usize) -> Luma<u8>,
) -> GrayImage {
    let scale = scale.max(1);
    let img_w = (width as u32 + 2 * quiet_zone) * scale;
    let img_h = (height as u32 + 2 * quiet_zone) * scale;
    GrayImage::from_fn(img_w, img_h, |px, py| {
        let mx = (px / scale).checked_sub(quiet_zone).map(|v| v as usize);
        let my = (py / scale).checked_sub(quiet_zone).map(|v| v as usize);
        match (mx, my) {
            (Some(x), Some(y)) if x < width && y < height => cell(x, y),
            _ => LIGHT,
        }
    })
}

/// Render a bit matrix, `scale` pixels per module, with `quiet_zone` light modules around it.
pub fn render_bit_matrix(matrix: &BitMatrix, scale: u32, quiet_zone: u32) -> GrayImage {
    render_cells(matrix.width(), matrix.height(), scale, quiet_zone, |x, y| {
        if matches!(matrix.get(x, y), Ok(true)) {
            DARK
        } else {
            LIGHT
        }
    })
}

/// Render a byte matrix. Cells other than 0 and 1 are drawn mid-gray.
pub fn render_byte_matrix(matrix: &ByteMatrix, scale: u32, quiet_zone: u32) -> GrayImage {
    render_cells(matrix.width(), matrix.height(), scale, quiet_zone, |x, y| {
        match matrix.get(x, y) {
            1 => DARK,
            0 => LIGHT,
            _ => UNSET,
        }
    })
}

/// Save a rendered image as PNG.
pub fn save_png<P: AsRef<Path>>(img: &GrayImage, path: P) -> std::result::Result<(), image::ImageError> {
    img.save_with_format(path, image::ImageFormat::Png)
}

/// One 8-module row per codeword, most significant bit on the left.
pub fn codewords_to_matrix(codewords: &[u8]) -> Result<BitMatrix> {
    let mut matrix = BitMatrix::new(8, codewords.len())?;
    for (y, &byte) in codewords.iter().enumerate() {
        for x in 0..8 {
            if byte & (0x80 >> x) != 0 {
                matrix.set(x, y)?;
            }
        }
    }
    Ok(matrix)
}

/// Whole bytes of a bit vector. A trailing partial byte is included zero-padded.
pub fn bit_vector_bytes(bits: &BitVector) -> Vec<u8> {
    bits.array()[..bits.size_in_bytes()].to_vec()
}

/// Space-separated uppercase hex.
pub fn to_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse hex bytes, ignoring whitespace. `None` on odd length or a non-hex digit.
pub fn parse_hex(input: &str) -> Option<Vec<u8>> {
    let digits: Vec<char> = input.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.len() % 2 != 0 {
        return None;
    }
    digits
        .chunks(2)
        .map(|pair| {
            let hi = pair[0].to_digit(16)?;
            let lo = pair[1].to_digit(16)?;
            Some((hi * 16 + lo) as u8)
        })
        .collect()
}
