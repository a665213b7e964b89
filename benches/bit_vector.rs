use criterion::{Criterion, black_box, criterion_group, criterion_main};
use qr_encode::BitVector;
use qr_encode::encoder::{append_alphanumeric_bytes, append_numeric_bytes};

fn bench_append_bits(c: &mut Criterion) {
    c.bench_function("append_bits_13x1000", |b| {
        b.iter(|| {
            let mut bits = BitVector::new();
            for i in 0..1000u32 {
                bits.append_bits(black_box(i), 13).unwrap();
            }
            bits.size()
        })
    });
}

fn bench_append_bit(c: &mut Criterion) {
    c.bench_function("append_bit_8192", |b| {
        b.iter(|| {
            let mut bits = BitVector::new();
            for i in 0..8192u32 {
                bits.append_bit(black_box((i & 1) as u8)).unwrap();
            }
            bits.size()
        })
    });
}

fn bench_segments(c: &mut Criterion) {
    let digits: String = (0..2000).map(|i| char::from(b'0' + (i % 10) as u8)).collect();
    let text = "HELLO WORLD $%*+-./: 0123456789".repeat(40);
    c.bench_function("append_numeric_2000", |b| {
        b.iter(|| {
            let mut bits = BitVector::new();
            append_numeric_bytes(black_box(&digits), &mut bits).unwrap();
            bits.size()
        })
    });
    c.bench_function("append_alphanumeric_1240", |b| {
        b.iter(|| {
            let mut bits = BitVector::new();
            append_alphanumeric_bytes(black_box(&text), &mut bits).unwrap();
            bits.size()
        })
    });
}

criterion_group!(benches, bench_append_bits, bench_append_bit, bench_segments);
criterion_main!(benches);
