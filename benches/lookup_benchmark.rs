// ============================================================================
// Geowindow Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Literal Parsing - Text to exact decimal
// 2. Normalization - Whole-turn reduction at growing magnitudes
// 3. Planning - Single and split window plans
// 4. Full Lookup - End-to-end lookup over the in-memory store
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use geowindow::numeric::DecimalLiteral;
use geowindow::prelude::*;
use std::hint::black_box;
use std::sync::Arc;

fn lit(text: &str) -> DecimalLiteral {
    DecimalLiteral::parse(text).unwrap()
}

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for text in ["170", "-189.6544", "36000000000000000190.123456789"] {
        group.bench_with_input(BenchmarkId::from_parameter(text), text, |b, text| {
            b.iter(|| black_box(DecimalLiteral::parse(black_box(text))))
        });
    }

    group.finish();
}

fn benchmark_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    for text in ["12.5", "200.12", "-189.6544", "539.07", "-36000000000000000190.5"] {
        let lon = lit(text);
        group.bench_with_input(BenchmarkId::from_parameter(text), &lon, |b, lon| {
            b.iter(|| black_box(normalize(black_box(lon))))
        });
    }

    group.finish();
}

fn benchmark_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan");
    let lat = DegreeRange::parse("-60", "60").unwrap();

    for (name, min, max) in [
        ("single", "-20.5", "30.25"),
        ("split", "170", "200"),
        ("shifted", "1090.5", "1100.75"),
    ] {
        let lon = DegreeRange::parse(min, max).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(name), &lon, |b, lon| {
            b.iter(|| black_box(plan(black_box(lon), &lat)))
        });
    }

    group.finish();
}

fn benchmark_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");

    for num_points in [10, 100, 1000] {
        // Points spread evenly around the globe, so every window sees a share
        let store = Arc::new(InMemoryPointStore::with_documents((0..num_points).map(|i| {
            let lon = -180.0 + 360.0 * f64::from(i) / f64::from(num_points);
            PointDocument::new()
                .with_field("lon", lit(&format!("{:.4}", lon)))
                .with_field("lat", lit(&format!("{:.2}", f64::from(i % 120) - 60.0)))
                .with_field("magnitude", lit("5.5"))
        })));

        let service = CoordinateServiceBuilder::earthquake_catalogue()
            .build(store, Arc::new(NoOpObserver))
            .unwrap();
        let request = LookupRequest::new(("170", "200"), ("-60", "60"));

        group.bench_with_input(
            BenchmarkId::new("antimeridian", num_points),
            &request,
            |b, request| b.iter(|| black_box(service.lookup(black_box(request)))),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_parse,
    benchmark_normalize,
    benchmark_plan,
    benchmark_lookup,
);
criterion_main!(benches);
