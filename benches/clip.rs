//! Benchmarks for line and polygon clipping.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use pixelgeom::clip::{cyrus_beck, ClipMode, ClipRect, LineClipAlgorithm};
use pixelgeom::polygon::{sutherland_hodgman, weiler_atherton, ConvexWindow, Polygon, PolygonWithHoles};
use pixelgeom::{Point2, Segment2, Tolerances};

fn bench_line_clip(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_clip");
    let rect = ClipRect::new(0.0, 0.0, 10.0, 10.0);
    let window = rect.to_window().unwrap();
    let tolerances = Tolerances::default();

    let cases = [
        ("inside", Segment2::from_coords(1.0, 1.0, 9.0, 9.0)),
        ("crossing", Segment2::from_coords(-5.0, 12.0, 12.0, -5.0)),
        ("outside", Segment2::from_coords(11.0, 0.0, 20.0, 5.0)),
    ];

    for (name, segment) in cases {
        for algorithm in [LineClipAlgorithm::CohenSutherland, LineClipAlgorithm::MidpointSubdivision] {
            group.bench_with_input(
                BenchmarkId::new(format!("{algorithm:?}"), name),
                &segment,
                |b, &s| b.iter(|| algorithm.clip(black_box(s), &rect, &tolerances)),
            );
        }
        group.bench_with_input(BenchmarkId::new("CyrusBeck", name), &segment, |b, &s| {
            b.iter(|| cyrus_beck(black_box(s), &window, ClipMode::Inside, tolerances.parallel))
        });
    }

    group.finish();
}

fn bench_sutherland_hodgman(c: &mut Criterion) {
    let mut group = c.benchmark_group("sutherland_hodgman");
    let window = ConvexWindow::rectangle(0.0, 0.0, 10.0, 10.0).unwrap();
    let on_edge = Tolerances::<f64>::default().on_edge;

    for n in [8usize, 64, 512] {
        // Star polygon centred on the window corner
        let subject: Polygon<f64> = Polygon::new(
            (0..n)
                .map(|i| {
                    let angle = std::f64::consts::TAU * i as f64 / n as f64;
                    let r = if i % 2 == 0 { 12.0 } else { 6.0 };
                    Point2::new(10.0 + r * angle.cos(), 10.0 + r * angle.sin())
                })
                .collect(),
        );
        group.bench_with_input(BenchmarkId::new("star", n), &subject, |b, s| {
            b.iter(|| sutherland_hodgman(black_box(s), &window, on_edge))
        });
    }

    group.finish();
}

fn bench_weiler_atherton(c: &mut Criterion) {
    let subject = PolygonWithHoles::new(
        Polygon::from_coords(&[(-10.0, -10.0), (10.0, -10.0), (10.0, 10.0), (-10.0, 10.0)]),
        vec![Polygon::from_coords(&[(-5.0, -5.0), (5.0, -5.0), (5.0, 5.0), (-5.0, 5.0)])],
    );
    let clip = PolygonWithHoles::new(
        Polygon::from_coords(&[(0.0, -15.0), (15.0, -15.0), (15.0, 0.0), (0.0, 0.0)]),
        vec![Polygon::from_coords(&[(7.0, -7.0), (12.0, -7.0), (12.0, -12.0), (7.0, -12.0)])],
    );

    c.bench_function("weiler_atherton_holes", |b| {
        b.iter(|| weiler_atherton(black_box(&subject), black_box(&clip), 1e-9))
    });
}

criterion_group!(benches, bench_line_clip, bench_sutherland_hodgman, bench_weiler_atherton);
criterion_main!(benches);
