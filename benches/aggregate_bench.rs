use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use numera::*;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use std::hint::black_box;

const SIZES: [usize; 3] = [100, 1_000, 10_000];

fn ints(n: usize) -> Vec<i64> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
    (0..n).map(|_| rng.gen_range(-1_000..1_000)).collect()
}

fn floats(n: usize) -> Vec<f64> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(2);
    (0..n).map(|_| rng.gen_range(-1e3..1e3)).collect()
}

/// 1. MEAN: integral path against floating path
fn bench_mean_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("mean/path");

    for &size in &SIZES {
        group.throughput(Throughput::Elements(size as u64));
        let i = ints(size);
        let f = floats(size);

        group.bench_with_input(BenchmarkId::new("integral", size), &i, |b, data| {
            b.iter(|| black_box(mean(black_box(data))))
        });
        group.bench_with_input(BenchmarkId::new("floating", size), &f, |b, data| {
            b.iter(|| black_box(mean(black_box(data))))
        });
    }
    group.finish();
}

/// 2. VARIANCE: two passes, scaling with input size
fn bench_variance(c: &mut Criterion) {
    let mut group = c.benchmark_group("variance/compute");

    for &size in &SIZES {
        group.throughput(Throughput::Elements(size as u64));
        let data = floats(size);

        group.bench_with_input(BenchmarkId::new("population", size), &data, |b, data| {
            b.iter(|| black_box(variance(black_box(data))))
        });
    }
    group.finish();
}

/// 3. DESCRIBE: every aggregate in one call
fn bench_describe(c: &mut Criterion) {
    let sample: Sample<i64> = ints(1_000).into_iter().collect();

    c.bench_function("describe/1000", |b| {
        b.iter(|| black_box(black_box(&sample).estimate(Describe)))
    });
}

/// 4. VARIADIC: fixed-arity fold against the slice version
fn bench_variadic(c: &mut Criterion) {
    let data = [0.1, 2.0, 3.0, 4.0, 5.5, 6.25, 7.0, 8.0];

    c.bench_function("variance/variadic_8", |b| {
        b.iter(|| {
            black_box(variance_variadic!(
                black_box(0.1),
                black_box(2.0),
                black_box(3.0),
                black_box(4.0),
                black_box(5.5),
                black_box(6.25),
                black_box(7.0),
                black_box(8.0)
            ))
        })
    });
    c.bench_function("variance/slice_8", |b| {
        b.iter(|| black_box(variance(black_box(&data))))
    });
}

criterion_group!(
    benches,
    bench_mean_paths,
    bench_variance,
    bench_describe,
    bench_variadic
);
criterion_main!(benches);
