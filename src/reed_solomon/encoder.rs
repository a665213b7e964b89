/// Reed-Solomon encoder for QR code error correction codewords
use super::gf256::{Gf256, QR_CODE_FIELD};
use super::poly::Gf256Poly;
use crate::error::{QrError, Result};
use log::trace;

/// Computes EC codewords by polynomial division against a generator.
///
/// Generators are cached by degree and only ever appended to. Building or
/// encoding needs `&mut self`; threads that encode concurrently should each own
/// an encoder, or share one behind a `Mutex`.
pub struct ReedSolomonEncoder {
    field: &'static Gf256,
    cached_generators: Vec<Gf256Poly>,
}

impl ReedSolomonEncoder {
    /// Bind an encoder to the QR field. Any other field is rejected.
    pub fn new(field: &'static Gf256) -> Result<Self> {
        if *field != QR_CODE_FIELD {
            return Err(QrError::UnsupportedField);
        }
        Ok(Self {
            field,
            cached_generators: vec![field.one()],
        })
    }

    /// Encoder over [`QR_CODE_FIELD`].
    pub fn qr() -> Self {
        Self {
            field: &QR_CODE_FIELD,
            cached_generators: vec![QR_CODE_FIELD.one()],
        }
    }

    /// Number of generators currently cached (degrees `0..len`).
    pub fn cached_degrees(&self) -> usize {
        self.cached_generators.len()
    }

    /// Generator polynomial of the given degree: `(x + a^0)(x + a^1)...(x + a^(degree-1))`.
    pub fn build_generator(&mut self, degree: usize) -> &Gf256Poly {
        if degree >= self.cached_generators.len() {
            trace!(
                "extending RS generator cache from degree {} to {}",
                self.cached_generators.len() - 1,
                degree
            );
            for d in self.cached_generators.len()..=degree {
                let factor = Gf256Poly::from_coefficients(self.field, vec![1, self.field.exp(d - 1)]);
                let next = self.cached_generators[d - 1].multiply(&factor);
                self.cached_generators.push(next);
            }
        }
        &self.cached_generators[degree]
    }

    /// Fill the last `ec_bytes` entries of `to_encode` with EC codewords.
    ///
    /// The leading `to_encode.len() - ec_bytes` entries are the data codewords
    /// and are left untouched. The tail is overwritten in place, high-order
    /// EC bytes zero-filled when the remainder is shorter than `ec_bytes`.
    pub fn encode(&mut self, to_encode: &mut [u8], ec_bytes: usize) -> Result<()> {
        if ec_bytes == 0 {
            return Err(QrError::NoErrorCorrectionBytes);
        }
        let data_bytes = to_encode.len().saturating_sub(ec_bytes);
        if data_bytes == 0 {
            return Err(QrError::NoDataBytes {
                total: to_encode.len(),
                ec_bytes,
            });
        }

        let field = self.field;
        let generator = self.build_generator(ec_bytes);
        let info = Gf256Poly::from_coefficients(field, to_encode[..data_bytes].to_vec())
            .multiply_by_monomial(ec_bytes, 1);
        let (_, remainder) = info.divide(generator)?;

        let coefficients = remainder.coefficients();
        let num_zero_coefficients = ec_bytes - coefficients.len();
        let ec_start = data_bytes + num_zero_coefficients;
        to_encode[data_bytes..ec_start].fill(0);
        to_encode[ec_start..].copy_from_slice(coefficients);
        Ok(())
    }
}

impl Default for ReedSolomonEncoder {
    fn default() -> Self {
        Self::qr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reed_solomon::gf256::DATA_MATRIX_FIELD;

    fn assert_divisible(codewords: &[u8], ec_bytes: usize) {
        let mut encoder = ReedSolomonEncoder::qr();
        let generator = encoder.build_generator(ec_bytes).clone();
        let received = Gf256Poly::new(&QR_CODE_FIELD, codewords.to_vec()).unwrap();
        let (_, remainder) = received.divide(&generator).unwrap();
        assert!(remainder.is_zero(), "remainder {:?}", remainder);
    }

    #[test]
    fn test_rejects_other_fields() {
        assert!(ReedSolomonEncoder::new(&QR_CODE_FIELD).is_ok());
        assert!(matches!(
            ReedSolomonEncoder::new(&DATA_MATRIX_FIELD),
            Err(QrError::UnsupportedField)
        ));
    }

    #[test]
    fn test_generator_degrees() {
        let mut encoder = ReedSolomonEncoder::qr();
        assert_eq!(encoder.build_generator(0).coefficients(), &[1]);
        // x + 1
        assert_eq!(encoder.build_generator(1).coefficients(), &[1, 1]);
        // (x + 1)(x + 2) = x^2 + 3x + 2
        assert_eq!(encoder.build_generator(2).coefficients(), &[1, 3, 2]);
        assert_eq!(encoder.cached_degrees(), 3);
    }

    #[test]
    fn test_generator_cache_grows_monotonically() {
        let mut encoder = ReedSolomonEncoder::qr();
        let g10 = encoder.build_generator(10).clone();
        assert_eq!(encoder.cached_degrees(), 11);
        encoder.build_generator(4);
        assert_eq!(encoder.cached_degrees(), 11);
        assert_eq!(encoder.build_generator(10), &g10);
        assert_eq!(g10.degree(), 10);
        // Known QR generator for 10 EC codewords: exponents 0,251,67,46,61,118,70,64,94,32,45
        let exponents: Vec<u8> = g10
            .coefficients()
            .iter()
            .map(|&c| QR_CODE_FIELD.log(c).unwrap())
            .collect();
        assert_eq!(exponents, vec![0, 251, 67, 46, 61, 118, 70, 64, 94, 32, 45]);
    }

    #[test]
    fn test_encode_iso_example() {
        let mut codewords = vec![
            0x10, 0x20, 0x0C, 0x56, 0x61, 0x80, 0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11,
            0xEC, 0x11, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        ];
        let mut encoder = ReedSolomonEncoder::qr();
        encoder.encode(&mut codewords, 10).unwrap();
        assert_eq!(
            &codewords[16..],
            &[0xA5, 0x24, 0xD4, 0xC1, 0xED, 0x36, 0xC7, 0x87, 0x2C, 0x55]
        );
        assert_divisible(&codewords, 10);
    }

    #[test]
    fn test_encode_overwrites_stale_tail() {
        let mut codewords = vec![0u8; 12];
        codewords[8..].fill(0xFF);
        let mut encoder = ReedSolomonEncoder::qr();
        encoder.encode(&mut codewords, 4).unwrap();
        assert_eq!(codewords, vec![0u8; 12]);
    }

    #[test]
    fn test_encode_argument_errors() {
        let mut encoder = ReedSolomonEncoder::qr();
        let mut codewords = vec![1u8; 5];
        assert_eq!(
            encoder.encode(&mut codewords, 0),
            Err(QrError::NoErrorCorrectionBytes)
        );
        assert_eq!(
            encoder.encode(&mut codewords, 5),
            Err(QrError::NoDataBytes {
                total: 5,
                ec_bytes: 5
            })
        );
        assert_eq!(
            encoder.encode(&mut codewords, 9),
            Err(QrError::NoDataBytes {
                total: 5,
                ec_bytes: 9
            })
        );
        assert_eq!(codewords, vec![1u8; 5]);
    }

    #[test]
    fn test_codeword_vanishes_at_generator_roots() {
        let data = [0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88];
        let num_ecc = 10;
        let mut codeword = data.to_vec();
        codeword.resize(data.len() + num_ecc, 0);
        ReedSolomonEncoder::qr().encode(&mut codeword, num_ecc).unwrap();
        assert_eq!(&codeword[..data.len()], &data);
        assert_divisible(&codeword, num_ecc);

        let received = Gf256Poly::new(&QR_CODE_FIELD, codeword).unwrap();
        for i in 0..num_ecc {
            assert_eq!(received.evaluate_at(QR_CODE_FIELD.exp(i)), 0);
        }
    }
}
