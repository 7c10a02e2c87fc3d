use splitrng::{Rng, init_key, sample_i32, sample_i32_biased, split};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_bounded(c: &mut Criterion) {
    let key = split(init_key(42, 0), 0, 0);

    c.bench_function("sample_i32 [0, 6)", |b| {
        b.iter(|| sample_i32(black_box(key), 0, 6))
    });
    c.bench_function("sample_i32_biased [0, 6)", |b| {
        b.iter(|| sample_i32_biased(black_box(key), 0, 6))
    });
}

pub fn bench_stream(c: &mut Criterion) {
    let mut rng = Rng::from_seed(42);

    c.bench_function("Rng::sample_uniform", |b| b.iter(|| rng.sample_uniform()));
}

criterion_group!(benches, bench_bounded, bench_stream);
criterion_main!(benches);
