//! Benchmarks for streamkit components
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use streamkit::numeric::NumericOps;
use streamkit::statistics::StreamingStats;
use streamkit::text::TextNormalizer;
use streamkit::Pipeline;

// ============================================================================
// StreamingStats Benchmarks
// ============================================================================

fn bench_streaming_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("streaming_stats");
    group.throughput(Throughput::Elements(1));

    group.bench_function("update", |b| {
        let mut stats = StreamingStats::new();
        let mut i = 0u64;
        b.iter(|| {
            stats.update(black_box(i as f64)).unwrap();
            i = i.wrapping_add(1);
        });
    });

    group.bench_function("query_all", |b| {
        let stats: StreamingStats = (0..100_000u32).map(f64::from).collect();
        b.iter(|| {
            black_box(stats.mean());
            black_box(stats.variance());
            black_box(stats.std_dev());
        });
    });

    group.bench_function("merge", |b| {
        let left: StreamingStats = (0..1_000u32).map(f64::from).collect();
        let right: StreamingStats = (1_000..2_000u32).map(f64::from).collect();
        b.iter(|| {
            let mut merged = left.clone();
            merged.merge(black_box(&right));
            merged
        });
    });

    group.finish();
}

// ============================================================================
// TextNormalizer Benchmarks
// ============================================================================

fn bench_normalizer(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_normalizer");
    let normalizer = TextNormalizer::default();
    let text = "   The  Quick   BROWN fox\tjumps  over\nthe LAZY dog   ";
    group.throughput(Throughput::Bytes(text.len() as u64));

    group.bench_function("clean", |b| {
        b.iter(|| normalizer.clean(black_box(text)).unwrap());
    });

    group.bench_function("clean_str", |b| {
        b.iter(|| normalizer.clean_str(black_box(text)));
    });

    group.finish();
}

// ============================================================================
// NumericOps / Pipeline Benchmarks
// ============================================================================

fn bench_numeric_ops(c: &mut Criterion) {
    let values: Vec<f64> = (0..10_000u32).map(f64::from).collect();

    c.bench_function("numeric_ops/mean_10k", |b| {
        b.iter(|| NumericOps::mean(black_box(&values).iter().copied()).unwrap());
    });
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let numbers: Vec<f64> = (0..10_000u32).map(f64::from).collect();
    group.throughput(Throughput::Elements(numbers.len() as u64));

    group.bench_function("ingest_numbers_10k", |b| {
        b.iter(|| {
            let mut pipeline = Pipeline::default();
            pipeline.ingest_numbers(numbers.iter().copied()).unwrap();
            pipeline
        });
    });

    group.finish();
}

// ============================================================================
// Main
// ============================================================================

criterion_group!(
    benches,
    bench_streaming_stats,
    bench_normalizer,
    bench_numeric_ops,
    bench_pipeline,
);

criterion_main!(benches);
