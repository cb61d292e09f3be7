//! Benchmarks for rasterization algorithms.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use pixelgeom::raster::{
    bresenham_circle, bresenham_ellipse, floyd_steinberg, gradient, polygon_circle,
    supersampled_ellipse, LineAlgorithm, Pixel,
};

fn bench_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("line");

    for length in [10, 100, 1000] {
        group.throughput(Throughput::Elements(length as u64));
        let end = Pixel::new(length, length / 3);

        for (name, algorithm) in [("dda", LineAlgorithm::Dda), ("bresenham", LineAlgorithm::Bresenham)] {
            group.bench_with_input(BenchmarkId::new(name, length), &end, |b, &end| {
                b.iter(|| algorithm.rasterize(black_box(Pixel::new(0, 0)), black_box(end)))
            });
        }
    }

    group.finish();
}

fn bench_circles(c: &mut Criterion) {
    let mut group = c.benchmark_group("circle");

    for radius in [10u32, 50, 200] {
        group.bench_with_input(BenchmarkId::new("bresenham", radius), &radius, |b, &r| {
            b.iter(|| bresenham_circle(black_box(Pixel::new(0, 0)), black_box(r)))
        });
    }

    // Accuracy versus cost of the N-gon approximation
    for sides in [8usize, 32, 128] {
        group.bench_with_input(BenchmarkId::new("polygon_r50", sides), &sides, |b, &n| {
            b.iter(|| polygon_circle(black_box(Pixel::new(0, 0)), black_box(50), black_box(n)))
        });
    }

    group.finish();
}

fn bench_ellipse(c: &mut Criterion) {
    let mut group = c.benchmark_group("ellipse");

    for (a, b) in [(15u32, 20u32), (100, 40)] {
        group.bench_with_input(
            BenchmarkId::new("bresenham", format!("{a}x{b}")),
            &(a, b),
            |bench, &(a, b)| bench.iter(|| bresenham_ellipse(black_box(Pixel::new(0, 0)), a, b)),
        );
    }

    for factor in [2usize, 4, 8] {
        group.bench_with_input(BenchmarkId::new("supersampled", factor), &factor, |b, &f| {
            b.iter(|| supersampled_ellipse::<f64>(40, 40, 15, 10, black_box(f)))
        });
    }

    group.finish();
}

fn bench_dither(c: &mut Criterion) {
    let input = gradient::<f64>(128, 128);
    c.bench_function("floyd_steinberg_128", |b| b.iter(|| floyd_steinberg(black_box(&input))));
}

criterion_group!(benches, bench_lines, bench_circles, bench_ellipse, bench_dither);
criterion_main!(benches);
