/// GF(256) arithmetic for QR codes
/// QR codes use the primitive polynomial x^8 + x^4 + x^3 + x^2 + 1 with generator 2
use super::poly::Gf256Poly;
use crate::error::{QrError, Result};
use std::fmt;

/// The QR code field: primitive polynomial 0x11D, generator 2.
pub static QR_CODE_FIELD: Gf256 = Gf256::new(0x011D, 2);

/// The Data Matrix field: primitive polynomial 0x12D, generator 2.
pub static DATA_MATRIX_FIELD: Gf256 = Gf256::new(0x012D, 2);

/// GF(256) field operations using log/exp tables
///
/// Tables are built at compile time, so a field is read-only from the first
/// instruction and can be shared across threads freely.
pub struct Gf256 {
    primitive: u32,
    generator_base: u8,
    exp_table: [u8; 256],
    log_table: [u8; 256],
}

/// Carry-less multiply reduced by `primitive`, used only to build the tables.
const fn mul_no_table(a: u8, b: u8, primitive: u32) -> u8 {
    let mut a = a as u32;
    let mut b = b;
    let mut result = 0u32;
    while b != 0 {
        if b & 1 != 0 {
            result ^= a;
        }
        a <<= 1;
        if a & 0x100 != 0 {
            a ^= primitive;
        }
        b >>= 1;
    }
    result as u8
}

impl Gf256 {
    /// Build a field from its primitive polynomial and generator element.
    ///
    /// The generator must be primitive for the polynomial; the exp table then
    /// cycles with period 255 and `exp_table[255] == exp_table[0] == 1`.
    pub const fn new(primitive: u32, generator_base: u8) -> Self {
        let mut exp_table = [0u8; 256];
        let mut log_table = [0u8; 256];

        let mut x: u8 = 1;
        let mut i = 0usize;
        while i < 256 {
            exp_table[i] = x;
            x = mul_no_table(x, generator_base, primitive);
            i += 1;
        }

        // log_table[0] stays 0 and is never read
        let mut i = 0usize;
        while i < 255 {
            log_table[exp_table[i] as usize] = i as u8;
            i += 1;
        }

        Self {
            primitive,
            generator_base,
            exp_table,
            log_table,
        }
    }

    /// Primitive polynomial, including the x^8 term
    pub fn primitive(&self) -> u32 {
        self.primitive
    }

    /// Generator element whose powers fill the exp table
    pub fn generator_base(&self) -> u8 {
        self.generator_base
    }

    /// Addition and subtraction are both XOR in a characteristic-2 field.
    pub fn add_or_subtract(a: u8, b: u8) -> u8 {
        a ^ b
    }

    /// `generator^i`; exponents reduce modulo 255.
    pub fn exp(&self, i: usize) -> u8 {
        self.exp_table[i % 255]
    }

    /// Discrete log of a non-zero element.
    pub fn log(&self, a: u8) -> Result<u8> {
        if a == 0 {
            return Err(QrError::ZeroHasNoLogarithm);
        }
        Ok(self.log_table[a as usize])
    }

    /// Multiplicative inverse of a non-zero element.
    pub fn inverse(&self, a: u8) -> Result<u8> {
        if a == 0 {
            return Err(QrError::ZeroHasNoInverse);
        }
        Ok(self.exp_table[255 - self.log_table[a as usize] as usize])
    }

    /// Product of two elements
    pub fn multiply(&self, a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        let log_a = self.log_table[a as usize] as usize;
        let log_b = self.log_table[b as usize] as usize;
        self.exp_table[(log_a + log_b) % 255]
    }

    /// `a / b`; fails when `b` is zero
    pub fn divide(&self, a: u8, b: u8) -> Result<u8> {
        let inverse = self.inverse(b)?;
        Ok(self.multiply(a, inverse))
    }

    /// The zero polynomial `[0]` over this field.
    pub fn zero(&'static self) -> Gf256Poly {
        Gf256Poly::from_coefficients(self, vec![0])
    }

    /// The constant polynomial `[1]` over this field.
    pub fn one(&'static self) -> Gf256Poly {
        Gf256Poly::from_coefficients(self, vec![1])
    }

    /// `coefficient * x^degree`, or the zero polynomial if `coefficient` is 0.
    pub fn build_monomial(&'static self, degree: usize, coefficient: u8) -> Gf256Poly {
        if coefficient == 0 {
            return self.zero();
        }
        let mut coefficients = vec![0u8; degree + 1];
        coefficients[0] = coefficient;
        Gf256Poly::from_coefficients(self, coefficients)
    }
}

impl PartialEq for Gf256 {
    fn eq(&self, other: &Self) -> bool {
        self.primitive == other.primitive && self.generator_base == other.generator_base
    }
}

impl Eq for Gf256 {}

impl fmt::Debug for Gf256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GF(0x{:X}, {})",
            self.primitive, self.generator_base
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gf256_basic() {
        let field = &QR_CODE_FIELD;
        // 0 * anything = 0
        assert_eq!(field.multiply(0, 5), 0);
        assert_eq!(field.multiply(5, 0), 0);

        // 0 / anything = 0
        assert_eq!(field.divide(0, 5), Ok(0));

        // x / x = 1 (for x != 0)
        assert_eq!(field.divide(7, 7), Ok(1));
        assert_eq!(field.divide(123, 123), Ok(1));
        assert_eq!(field.divide(7, 0), Err(QrError::ZeroHasNoInverse));
    }

    #[test]
    fn test_exp_table_matches_qr_antilog() {
        let field = &QR_CODE_FIELD;
        let expected = [1, 2, 4, 8, 16, 32, 64, 128, 29, 58, 116, 232, 205, 135, 19, 38];
        for (i, &value) in expected.iter().enumerate() {
            assert_eq!(field.exp(i), value);
        }
        assert_eq!(field.exp(25), 3);
        assert_eq!(field.exp(254), 142);
        // alpha^255 = 1 (order of the multiplicative group)
        assert_eq!(field.exp(255), 1);
        assert_eq!(field.exp(256), 2);
    }

    #[test]
    fn test_log_inverts_exp() {
        let field = &QR_CODE_FIELD;
        for x in 1..=255u8 {
            let log = field.log(x).unwrap();
            assert_eq!(field.exp(log as usize), x);
        }
        assert_eq!(field.log(0), Err(QrError::ZeroHasNoLogarithm));
    }

    #[test]
    fn test_inverse() {
        let field = &QR_CODE_FIELD;
        for x in 1..=255u8 {
            let inv = field.inverse(x).unwrap();
            assert_eq!(field.multiply(x, inv), 1);
        }
        assert_eq!(field.inverse(1), Ok(1));
        assert_eq!(field.inverse(0), Err(QrError::ZeroHasNoInverse));
    }

    #[test]
    fn test_add_or_subtract() {
        assert_eq!(Gf256::add_or_subtract(0x53, 0x53), 0);
        assert_eq!(Gf256::add_or_subtract(0x53, 0), 0x53);
        assert_eq!(Gf256::add_or_subtract(0x0F, 0xF0), 0xFF);
    }

    #[test]
    fn test_multiply_matches_slow_path() {
        let field = &QR_CODE_FIELD;
        for a in [1u8, 2, 3, 29, 128, 200, 255] {
            for b in [1u8, 2, 7, 64, 142, 255] {
                assert_eq!(field.multiply(a, b), mul_no_table(a, b, 0x011D));
            }
        }
    }

    #[test]
    fn test_data_matrix_field_differs() {
        assert_ne!(QR_CODE_FIELD, DATA_MATRIX_FIELD);
        assert_eq!(DATA_MATRIX_FIELD.exp(8), 0x2D);
        assert_eq!(QR_CODE_FIELD.exp(8), 0x1D);
    }

    #[test]
    fn test_build_monomial() {
        let field = &QR_CODE_FIELD;
        let mono = field.build_monomial(3, 7);
        assert_eq!(mono.coefficients(), &[7, 0, 0, 0]);
        assert_eq!(mono.degree(), 3);
        assert!(field.build_monomial(5, 0).is_zero());
        assert!(field.zero().is_zero());
    }
}
