//! Benchmarks for the classification and accumulation hot path.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use freqhist::Histogram32;

fn make_bounds(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64).collect()
}

fn make_samples(n: usize, max: f64) -> Vec<f64> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(0xfeed);
    (0..n).map(|_| rng.gen_range(-1.0..max)).collect()
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");
    let samples = make_samples(10_000, 40.0);
    group.throughput(Throughput::Elements(samples.len() as u64));

    for n_bounds in [8usize, 16, 32] {
        let bounds = make_bounds(n_bounds);
        group.bench_with_input(
            BenchmarkId::from_parameter(n_bounds),
            &bounds,
            |b, bounds| {
                b.iter(|| {
                    let mut hist = Histogram32::new(bounds);
                    for &v in &samples {
                        let _ = hist.add(black_box(v));
                    }
                    black_box(hist.count())
                });
            },
        );
    }
    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let bounds = make_bounds(32);
    let mut hist = Histogram32::new(&bounds);
    for v in make_samples(10_000, 40.0) {
        let _ = hist.add(v);
    }

    c.bench_function("cdf", |b| {
        b.iter(|| black_box(hist.cdf(black_box(17.3))));
    });
    c.bench_function("quantile", |b| {
        b.iter(|| black_box(hist.quantile(black_box(0.95))));
    });
}

criterion_group!(benches, bench_add, bench_queries);
criterion_main!(benches);
