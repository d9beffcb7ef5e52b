use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use cinder_rarity::{compute_rarity, is_fibonacci, is_prime};
use cinder_types::Ordinal;

fn bench_is_prime(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_prime");
    for n in [97u64, 1_000_000_007, 2_305_843_009_213_693_951, 18_446_744_073_709_551_557] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(is_prime(black_box(n))))
        });
    }
    group.finish();
}

fn bench_is_fibonacci(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_fibonacci");
    // The last input overflows the square test and walks the sequence.
    for n in [13u64, 1_134_903_170, 12_200_160_415_121_876_738] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(is_fibonacci(black_box(n))))
        });
    }
    group.finish();
}

fn bench_compute_rarity(c: &mut Criterion) {
    c.bench_function("compute_rarity", |b| {
        b.iter(|| black_box(compute_rarity(black_box(Ordinal::new(4_181)), black_box(19_000_000))))
    });
}

criterion_group!(benches, bench_is_prime, bench_is_fibonacci, bench_compute_rarity);
criterion_main!(benches);
