use proptest::prelude::*;
use qr_encode::{BitVector, Gf256, Gf256Poly, QR_CODE_FIELD, ReedSolomonEncoder};

fn poly(coefficients: Vec<u8>) -> Gf256Poly {
    Gf256Poly::new(&QR_CODE_FIELD, coefficients).unwrap()
}

proptest! {
    #[test]
    fn field_addition_is_self_inverse(a: u8, b: u8) {
        prop_assert_eq!(Gf256::add_or_subtract(Gf256::add_or_subtract(a, b), b), a);
    }

    #[test]
    fn field_multiplication_commutes(a: u8, b: u8) {
        let field = &QR_CODE_FIELD;
        prop_assert_eq!(field.multiply(a, b), field.multiply(b, a));
    }

    #[test]
    fn field_inverse_is_multiplicative_identity(a in 1u8..=255) {
        let field = &QR_CODE_FIELD;
        prop_assert_eq!(field.multiply(a, field.inverse(a).unwrap()), 1);
        prop_assert_eq!(field.exp(field.log(a).unwrap() as usize), a);
    }

    #[test]
    fn field_distributes(a: u8, b: u8, c: u8) {
        let field = &QR_CODE_FIELD;
        prop_assert_eq!(
            field.multiply(a, Gf256::add_or_subtract(b, c)),
            Gf256::add_or_subtract(field.multiply(a, b), field.multiply(a, c))
        );
    }

    #[test]
    fn poly_division_law(
        dividend in prop::collection::vec(any::<u8>(), 1..24),
        mut divisor in prop::collection::vec(any::<u8>(), 1..8),
    ) {
        divisor[0] |= 1;
        let a = poly(dividend);
        let b = poly(divisor);
        let (quotient, remainder) = a.divide(&b).unwrap();
        prop_assert!(remainder.is_zero() || remainder.degree() < b.degree());
        prop_assert_eq!(quotient.multiply(&b).add_or_subtract(&remainder), a);
    }

    #[test]
    fn poly_evaluation_respects_multiplication(
        x in prop::collection::vec(any::<u8>(), 1..10),
        y in prop::collection::vec(any::<u8>(), 1..10),
        at in any::<u8>(),
    ) {
        let field = &QR_CODE_FIELD;
        let (x, y) = (poly(x), poly(y));
        prop_assert_eq!(
            x.multiply(&y).evaluate_at(at),
            field.multiply(x.evaluate_at(at), y.evaluate_at(at))
        );
    }

    #[test]
    fn rs_codeword_is_divisible_by_generator(
        data in prop::collection::vec(any::<u8>(), 1..60),
        ec_bytes in 1usize..40,
    ) {
        let mut encoder = ReedSolomonEncoder::qr();
        let mut codewords = data.clone();
        codewords.resize(data.len() + ec_bytes, 0xAA);
        encoder.encode(&mut codewords, ec_bytes).unwrap();
        prop_assert_eq!(&codewords[..data.len()], &data[..]);

        let generator = encoder.build_generator(ec_bytes).clone();
        let (_, remainder) = poly(codewords).divide(&generator).unwrap();
        prop_assert!(remainder.is_zero());
    }

    #[test]
    fn bit_vector_round_trips_appended_bits(
        chunks in prop::collection::vec((any::<u32>(), 0usize..=32), 0..40),
    ) {
        let mut bits = BitVector::new();
        let mut expected = String::new();
        for &(value, num_bits) in &chunks {
            bits.append_bits(value, num_bits).unwrap();
            for i in (0..num_bits).rev() {
                expected.push(if (value >> i) & 1 == 1 { '1' } else { '0' });
            }
        }
        prop_assert_eq!(bits.size(), expected.len());
        prop_assert_eq!(bits.to_string(), expected.clone());
        for (i, c) in expected.chars().enumerate() {
            prop_assert_eq!(bits.at(i).unwrap(), if c == '1' { 1 } else { 0 });
        }
    }

    #[test]
    fn bit_vector_xor_with_self_is_zero(bytes in prop::collection::vec(any::<u8>(), 0..32)) {
        let mut bits = BitVector::new();
        for &b in &bytes {
            bits.append_bits(b as u32, 8).unwrap();
        }
        let copy = bits.clone();
        bits.xor(&copy).unwrap();
        prop_assert!((0..bits.size()).all(|i| bits.at(i) == Ok(0)));
    }
}
