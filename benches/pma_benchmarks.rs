use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pma::PmaSet;
use std::collections::BTreeSet;
use std::ops::Bound::{Excluded, Unbounded};

const N: usize = 10_000;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

fn reverse_ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).rev().collect()
}

fn random_keys(n: usize) -> Vec<i64> {
    // Use a simple LCG for deterministic pseudo-random sequence
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push((x >> 33) as i64);
    }
    keys
}

fn filled_pma(keys: &[i64]) -> PmaSet<i64> {
    let mut set = PmaSet::new();
    for &key in keys {
        let _ = set.insert(key);
    }
    set
}

// ─── Insert benchmarks ──────────────────────────────────────────────────────

fn bench_insert_ordered(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_ordered");
    let keys = ordered_keys(N);

    group.bench_function(BenchmarkId::new("PmaSet", N), |b| {
        b.iter(|| filled_pma(&keys));
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| {
            let mut set = BTreeSet::new();
            for &key in &keys {
                set.insert(key);
            }
            set
        });
    });

    group.finish();
}

fn bench_insert_reverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_reverse");
    let keys = reverse_ordered_keys(N);

    group.bench_function(BenchmarkId::new("PmaSet", N), |b| {
        b.iter(|| filled_pma(&keys));
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| {
            let mut set = BTreeSet::new();
            for &key in &keys {
                set.insert(key);
            }
            set
        });
    });

    group.finish();
}

fn bench_insert_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_random");
    let keys = random_keys(N);

    group.bench_function(BenchmarkId::new("PmaSet", N), |b| {
        b.iter(|| filled_pma(&keys));
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| {
            let mut set = BTreeSet::new();
            for &key in &keys {
                set.insert(key);
            }
            set
        });
    });

    group.finish();
}

// ─── Query benchmarks ───────────────────────────────────────────────────────

fn bench_successor(c: &mut Criterion) {
    let mut group = c.benchmark_group("successor");
    let keys = random_keys(N);
    let pma_set = filled_pma(&keys);
    let bt_set: BTreeSet<i64> = keys.iter().copied().collect();

    group.bench_function(BenchmarkId::new("PmaSet", N), |b| {
        b.iter(|| {
            let mut found = 0usize;
            for &key in &keys {
                if pma_set.successor(&key).is_some() {
                    found += 1;
                }
            }
            found
        });
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| {
            let mut found = 0usize;
            for &key in &keys {
                if bt_set.range((Excluded(key), Unbounded)).next().is_some() {
                    found += 1;
                }
            }
            found
        });
    });

    group.finish();
}

fn bench_iterate(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate");
    let keys = random_keys(N);
    let pma_set = filled_pma(&keys);
    let bt_set: BTreeSet<i64> = keys.iter().copied().collect();

    group.bench_function(BenchmarkId::new("PmaSet", N), |b| {
        b.iter(|| pma_set.iter().copied().sum::<i64>());
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| bt_set.iter().copied().sum::<i64>());
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_insert_ordered,
    bench_insert_reverse,
    bench_insert_random,
    bench_successor,
    bench_iterate
);
criterion_main!(benches);
