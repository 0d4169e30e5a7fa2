//! Performance benchmarks for the wildcard matcher

use criterion::{Criterion, criterion_group, criterion_main};
use shellrules::wildcard;
use std::hint::black_box;

fn benchmark_filename_match(c: &mut Criterion) {
    c.bench_function("filename match", |b| {
        b.iter(|| {
            black_box(wildcard::solve(
                black_box("report-*-final.??f"),
                black_box("report-2024-08-final.pdf"),
            ));
        });
    });
}

fn benchmark_adversarial_mismatch(c: &mut Criterion) {
    let input = "a".repeat(50);
    let pattern = format!("{}b", "a*".repeat(25));

    c.bench_function("adversarial mismatch", |b| {
        b.iter(|| {
            black_box(wildcard::is_match(black_box(&pattern), black_box(&input)));
        });
    });
}

fn benchmark_no_wildcards(c: &mut Criterion) {
    c.bench_function("literal comparison", |b| {
        b.iter(|| {
            black_box(wildcard::is_match(
                black_box("C:\\Windows\\System32\\kernel32.dll"),
                black_box("C:\\Windows\\System32\\kernel32.dll"),
            ));
        });
    });
}

criterion_group!(
    benches,
    benchmark_filename_match,
    benchmark_adversarial_mismatch,
    benchmark_no_wildcards
);
criterion_main!(benches);
