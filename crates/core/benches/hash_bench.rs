//! Benchmarks for hashing operations

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use poseidon377_core::{hash, multi_hash, Fr};

fn bench_hash_rate_2(c: &mut Criterion) {
    let inputs = [Fr::from(1u64), Fr::from(2u64)];
    let domain = Fr::from(0u64);

    c.bench_function("hash_rate_2", |b| {
        b.iter(|| hash(black_box(&inputs), black_box(&domain)).unwrap())
    });
}

fn bench_hash_rate_7(c: &mut Criterion) {
    let inputs: Vec<Fr> = (1..=7u64).map(Fr::from).collect();
    let domain = Fr::from(0u64);

    c.bench_function("hash_rate_7", |b| {
        b.iter(|| hash(black_box(&inputs), black_box(&domain)).unwrap())
    });
}

fn bench_multi_hash_64(c: &mut Criterion) {
    let inputs: Vec<Fr> = (1..=64u64).map(Fr::from).collect();
    let domain = Fr::from(0u64);

    c.bench_function("multi_hash_64", |b| {
        b.iter(|| multi_hash(black_box(&inputs), black_box(&domain)).unwrap())
    });
}

criterion_group!(benches, bench_hash_rate_2, bench_hash_rate_7, bench_multi_hash_64);
criterion_main!(benches);
