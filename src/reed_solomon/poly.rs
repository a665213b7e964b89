//! Polynomials with coefficients in GF(256)
//!
//! Coefficients are stored most-significant term first: `[a, b, c]` is
//! `a*x^2 + b*x + c`. Construction strips leading zeros, so the leading
//! coefficient is non-zero unless the polynomial is the canonical zero `[0]`.
//!
//! Polynomials over different fields never mix. Combining them is a bug in the
//! caller and panics.

use super::gf256::Gf256;
use crate::error::{QrError, Result};
use std::fmt;

/// Immutable polynomial over a GF(256) field
#[derive(Clone)]
pub struct Gf256Poly {
    field: &'static Gf256,
    coefficients: Vec<u8>,
}

impl Gf256Poly {
    /// Build a polynomial from coefficients, most-significant first.
    pub fn new(field: &'static Gf256, coefficients: Vec<u8>) -> Result<Self> {
        if coefficients.is_empty() {
            return Err(QrError::EmptyCoefficients);
        }
        Ok(Self::from_coefficients(field, coefficients))
    }

    /// Normalizing constructor for callers that already hold a non-empty list.
    pub(crate) fn from_coefficients(field: &'static Gf256, mut coefficients: Vec<u8>) -> Self {
        debug_assert!(!coefficients.is_empty());
        if coefficients.len() > 1 && coefficients[0] == 0 {
            match coefficients.iter().position(|&c| c != 0) {
                Some(first_non_zero) => {
                    coefficients.drain(..first_non_zero);
                }
                None => coefficients = vec![0],
            }
        }
        Self {
            field,
            coefficients,
        }
    }

    /// Field the coefficients live in
    pub fn field(&self) -> &'static Gf256 {
        self.field
    }

    /// Coefficients, highest degree first
    pub fn coefficients(&self) -> &[u8] {
        &self.coefficients
    }

    /// Degree of the highest non-zero term
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// True for the zero polynomial
    pub fn is_zero(&self) -> bool {
        self.coefficients[0] == 0
    }

    /// Coefficient of `x^degree`; zero past the polynomial's degree.
    pub fn coefficient(&self, degree: usize) -> u8 {
        if degree > self.degree() {
            return 0;
        }
        self.coefficients[self.coefficients.len() - 1 - degree]
    }

    /// Coefficient of the highest-degree term
    pub fn leading_coefficient(&self) -> u8 {
        self.coefficients[0]
    }

    /// Evaluate at `a` using Horner's rule.
    pub fn evaluate_at(&self, a: u8) -> u8 {
        if a == 0 {
            return self.coefficient(0);
        }
        if a == 1 {
            // Sum of all coefficients
            return self.coefficients.iter().fold(0, |acc, &c| acc ^ c);
        }
        self.coefficients
            .iter()
            .fold(0, |acc, &c| Gf256::add_or_subtract(self.field.multiply(a, acc), c))
    }

    fn check_same_field(&self, other: &Gf256Poly) {
        assert!(
            self.field == other.field,
            "Gf256Poly operands must come from the same field ({:?} vs {:?})",
            self.field,
            other.field
        );
    }

    /// Sum (equivalently difference) of two polynomials
    pub fn add_or_subtract(&self, other: &Gf256Poly) -> Gf256Poly {
        self.check_same_field(other);
        if self.is_zero() {
            return other.clone();
        }
        if other.is_zero() {
            return self.clone();
        }

        let (smaller, larger) = if self.coefficients.len() > other.coefficients.len() {
            (&other.coefficients, &self.coefficients)
        } else {
            (&self.coefficients, &other.coefficients)
        };

        let length_diff = larger.len() - smaller.len();
        let mut sum_diff = Vec::with_capacity(larger.len());
        // High-order terms of the longer polynomial pass through unchanged
        sum_diff.extend_from_slice(&larger[..length_diff]);
        sum_diff.extend(
            smaller
                .iter()
                .zip(&larger[length_diff..])
                .map(|(&a, &b)| Gf256::add_or_subtract(a, b)),
        );

        Gf256Poly::from_coefficients(self.field, sum_diff)
    }

    /// Product of two polynomials
    pub fn multiply(&self, other: &Gf256Poly) -> Gf256Poly {
        self.check_same_field(other);
        if self.is_zero() || other.is_zero() {
            return self.field.zero();
        }

        let a = &self.coefficients;
        let b = &other.coefficients;
        let mut product = vec![0u8; a.len() + b.len() - 1];
        for (i, &a_coeff) in a.iter().enumerate() {
            for (j, &b_coeff) in b.iter().enumerate() {
                product[i + j] ^= self.field.multiply(a_coeff, b_coeff);
            }
        }

        Gf256Poly::from_coefficients(self.field, product)
    }

    /// Every coefficient multiplied by `scalar`
    pub fn multiply_scalar(&self, scalar: u8) -> Gf256Poly {
        match scalar {
            0 => self.field.zero(),
            1 => self.clone(),
            _ => {
                let product = self
                    .coefficients
                    .iter()
                    .map(|&c| self.field.multiply(c, scalar))
                    .collect();
                Gf256Poly::from_coefficients(self.field, product)
            }
        }
    }

    /// `self * coefficient * x^degree`
    pub fn multiply_by_monomial(&self, degree: usize, coefficient: u8) -> Gf256Poly {
        if coefficient == 0 {
            return self.field.zero();
        }
        let mut product = Vec::with_capacity(self.coefficients.len() + degree);
        product.extend(
            self.coefficients
                .iter()
                .map(|&c| self.field.multiply(c, coefficient)),
        );
        product.resize(self.coefficients.len() + degree, 0);
        Gf256Poly::from_coefficients(self.field, product)
    }

    /// Long division, returning `(quotient, remainder)`.
    ///
    /// Guarantees `other * quotient + remainder == self` with the remainder
    /// either zero or of lower degree than `other`.
    pub fn divide(&self, other: &Gf256Poly) -> Result<(Gf256Poly, Gf256Poly)> {
        self.check_same_field(other);
        if other.is_zero() {
            return Err(QrError::DivisionByZero);
        }

        let mut quotient = self.field.zero();
        let mut remainder = self.clone();

        let denominator_leading_term = other.leading_coefficient();
        let inverse_denominator_leading_term = self.field.inverse(denominator_leading_term)?;

        while remainder.degree() >= other.degree() && !remainder.is_zero() {
            let degree_difference = remainder.degree() - other.degree();
            let scale = self
                .field
                .multiply(remainder.leading_coefficient(), inverse_denominator_leading_term);
            let term = other.multiply_by_monomial(degree_difference, scale);
            let iteration_quotient = self.field.build_monomial(degree_difference, scale);
            quotient = quotient.add_or_subtract(&iteration_quotient);
            remainder = remainder.add_or_subtract(&term);
        }

        Ok((quotient, remainder))
    }
}

impl PartialEq for Gf256Poly {
    fn eq(&self, other: &Self) -> bool {
        self.field == other.field && self.coefficients == other.coefficients
    }
}

impl Eq for Gf256Poly {}

impl fmt::Debug for Gf256Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gf256Poly")
            .field("field", self.field)
            .field("coefficients", &self.coefficients)
            .finish()
    }
}

/// Renders terms as powers of the generator, e.g. `a^25x^2 + x + 1`.
impl fmt::Display for Gf256Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        let mut first = true;
        for degree in (0..=self.degree()).rev() {
            let coefficient = self.coefficient(degree);
            if coefficient == 0 {
                continue;
            }
            if !first {
                f.write_str(" + ")?;
            }
            first = false;
            if degree == 0 || coefficient != 1 {
                match self.field.log(coefficient).map_err(|_| fmt::Error)? {
                    0 => f.write_str("1")?,
                    1 => f.write_str("a")?,
                    power => write!(f, "a^{}", power)?,
                }
            }
            match degree {
                0 => {}
                1 => f.write_str("x")?,
                _ => write!(f, "x^{}", degree)?,
            }
        }
        Ok(())
    }
}
