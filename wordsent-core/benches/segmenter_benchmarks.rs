//! Performance benchmarks for the segmenter
//!
//! Run with: cargo bench --bench segmenter_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use wordsent_core::{segment, BoundaryConfig, Segmenter};

/// Generate a token stream of the given length
fn generate_tokens(count: usize) -> Vec<String> {
    let base = [
        "This", "is", "a", "test", "sentence", "with", "\"", "quotes", "\"", ".", "*NL*",
        "Really", "?", "!", ")",
    ];
    base.iter()
        .cycle()
        .take(count)
        .map(|t| t.to_string())
        .collect()
}

/// Benchmark different stream lengths
fn bench_token_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("token_counts");
    let config = BoundaryConfig::default();

    for count in [1_000, 10_000, 100_000] {
        let tokens = generate_tokens(count);

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("segment", count), &tokens, |b, tokens| {
            b.iter(|| {
                let _ = segment(black_box(tokens), &config).unwrap();
            });
        });
    }

    group.finish();
}

/// Benchmark the cost of HTML discard rules
fn bench_html_discard(c: &mut Criterion) {
    let mut group = c.benchmark_group("html_discard");
    let tokens = generate_tokens(10_000);

    for tag_count in [0, 4, 16] {
        let mut config = BoundaryConfig::default();
        let tags: Vec<String> = (0..tag_count).map(|i| format!("t{i}")).collect();
        config.add_html_discard_tags(&tags).unwrap();

        group.bench_with_input(BenchmarkId::new("tags", tag_count), &tokens, |b, tokens| {
            b.iter(|| {
                let _ = segment(black_box(tokens), &config).unwrap();
            });
        });
    }

    group.finish();
}

/// Benchmark batch segmentation of many documents
fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let segmenter = Segmenter::with_default_config();
    let docs: Vec<Vec<String>> = (0..64).map(|_| generate_tokens(5_000)).collect();

    group.throughput(Throughput::Elements(64 * 5_000));
    group.bench_function("segment_batch", |b| {
        b.iter(|| {
            let _ = segmenter.segment_batch(black_box(&docs)).unwrap();
        });
    });

    group.finish();
}

criterion_group!(benches, bench_token_counts, bench_html_discard, bench_batch);
criterion_main!(benches);
