//! Performance benchmarks for geo-route-lib
//!
//! Run with: cargo bench --package geo-route-lib

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use geo_route_lib::{GeoPoint, GeoSegment, Route, samples};

/// Generate a contiguous zig-zag path where the name changes every `run` segments
fn generate_segments(num_segments: usize, run: usize) -> Vec<GeoSegment> {
    let point = |i: usize| {
        let t = i as f64 / num_segments as f64;
        let lat = 32.0 + t * 0.5 + (t * 50.0).sin() * 0.001;
        let lon = 35.0 + t * 0.5 + (t * 30.0).cos() * 0.001;
        GeoPoint::new(lat, lon).unwrap()
    };

    (0..num_segments)
        .map(|i| {
            let name = format!("Street {}", i / run.max(1));
            GeoSegment::new(name, point(i), point(i + 1)).unwrap()
        })
        .collect()
}

// ============================================================================
// Core Benchmarks - Key performance indicators
// ============================================================================

fn bench_route_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    for &size in &[100usize, 1_000] {
        let segments = generate_segments(size, 10);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("from_segments", size), &segments, |b, s| {
            b.iter(|| Route::from_segments(s.iter().cloned()).unwrap());
        });
    }

    group.finish();
}

fn bench_single_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");

    let segments = generate_segments(1_001, 10);
    let route = Route::from_segments(segments[..1_000].iter().cloned()).unwrap();
    let next = segments[1_000].clone();

    group.bench_function("append_to_1k", |b| {
        b.iter(|| route.add_segment(next.clone()).unwrap());
    });

    group.finish();
}

fn bench_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("iteration");

    let route = Route::from_segments(generate_segments(2_000, 25)).unwrap();

    group.bench_function("segment_length_sum_2k", |b| {
        b.iter(|| route.geo_segments().map(GeoSegment::length).sum::<f64>());
    });

    group.bench_function("feature_count_2k", |b| {
        b.iter(|| route.geo_features().count());
    });

    group.finish();
}

fn bench_samples(c: &mut Criterion) {
    let mut group = c.benchmark_group("samples");

    group.bench_function("example_segments", |b| {
        b.iter(|| samples::example_segments().unwrap());
    });

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(
    benches,
    bench_route_construction,
    bench_single_append,
    bench_iteration,
    bench_samples,
);

criterion_main!(benches);
