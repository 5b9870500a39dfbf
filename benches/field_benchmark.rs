use criterion::{criterion_group, criterion_main, Criterion};
use ecc::FieldElement;
use std::hint::black_box;

const P: i64 = 2_147_483_647; // 2^31 - 1

fn bench_add(c: &mut Criterion) {
    let a = FieldElement::new(1_234_567_890, P).unwrap();
    let b = FieldElement::new(2_000_000_000, P).unwrap();
    c.bench_function("field_add", |bench| {
        bench.iter(|| black_box(a) + black_box(b))
    });
}

fn bench_sub(c: &mut Criterion) {
    let a = FieldElement::new(12_345, P).unwrap();
    let b = FieldElement::new(2_000_000_000, P).unwrap();
    c.bench_function("field_sub", |bench| {
        bench.iter(|| black_box(a) - black_box(b))
    });
}

criterion_group!(benches, bench_add, bench_sub);
criterion_main!(benches);
