//! Fuzzy matcher benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use celubot_engine::similarity;

fn bench_similarity(c: &mut Criterion) {
    let mut group = c.benchmark_group("similarity");

    group.bench_function("short_typo", |b| {
        b.iter(|| similarity(black_box("ifone 13"), black_box("iphone 13")))
    });

    group.bench_function("full_name", |b| {
        b.iter(|| {
            similarity(
                black_box("samsung galaxy s21 ultra 5g"),
                black_box("samsung galaxy s21 plus"),
            )
        })
    });

    group.bench_function("disjoint", |b| {
        b.iter(|| similarity(black_box("lavadora industrial"), black_box("iphone 13")))
    });

    group.finish();
}

criterion_group!(benches, bench_similarity);
criterion_main!(benches);
