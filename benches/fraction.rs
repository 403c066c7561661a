#[macro_use]
extern crate criterion;

use criterion::{black_box, Criterion};
use fractional::{Fraction, Fraction32, Fraction64};

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("regular add", |b| b.iter(|| black_box(1i64) + black_box(2i64)));
    c.bench_function("fraction new", |b| b.iter(|| Fraction64::new(black_box(81), black_box(54))));
    c.bench_function("fraction add", |b| b.iter(|| black_box(Fraction64::new(1, 3)) + black_box(Fraction64::new(1, 4))));
    c.bench_function("fraction mul", |b| b.iter(|| black_box(Fraction64::new(10, 3)) * black_box(Fraction64::new(9, 20))));
    c.bench_function("fraction div", |b| b.iter(|| black_box(Fraction32::new(1, 4)) / black_box(Fraction32::new(1, 2))));
    c.bench_function("fraction cmp", |b| b.iter(|| black_box(Fraction64::new(7, 9)) < black_box(Fraction64::new(8, 11))));
    c.bench_function("fraction pow", |b| b.iter(|| black_box(Fraction64::new(3, 2)).pow(black_box(20))));
    c.bench_function("fraction harmonic sum", |b| b.iter(|| {
        (1..black_box(20i64)).map(|n| Fraction::new(1, n)).sum::<Fraction64>()
    }));
    c.bench_function("fraction checked add", |b| b.iter(|| {
        black_box(Fraction64::new(1, 3)).checked_add(black_box(Fraction64::new(1, 4)))
    }));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
