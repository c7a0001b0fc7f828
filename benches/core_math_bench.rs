use criterion::{Criterion, criterion_group, criterion_main};
use linechart_core::core::{
    CanvasSize, Dataset, Interpolation, NiceScale, Point, Range, map_range, project,
};
use std::hint::black_box;

fn wave_dataset(len: usize) -> Dataset {
    (0..len)
        .map(|i| {
            let x = i as f64;
            Point::new(x, (x * 0.01).sin() * 100.0 + x * 0.05)
        })
        .collect()
}

fn bench_range_map(c: &mut Criterion) {
    let from = Range::new(0.0, 10_000.0).expect("valid range");
    let to = Range::new(0.0, 1920.0).expect("valid range");

    c.bench_function("range_map", |b| {
        b.iter(|| map_range(black_box(4_321.123), from, to).expect("map"))
    });
}

fn bench_nice_scale(c: &mut Criterion) {
    let range = Range::new(-3.7, 1_234.5).expect("valid range");

    c.bench_function("nice_scale_compute", |b| {
        b.iter(|| NiceScale::compute(black_box(range), black_box(7)).expect("scale"))
    });
}

fn bench_projection_10k(c: &mut Criterion) {
    let dataset = wave_dataset(10_000);
    let canvas = CanvasSize::new(1920.0, 1080.0);

    c.bench_function("projection_10k", |b| {
        b.iter(|| {
            let _ = project(black_box(&dataset), black_box(canvas), None, None)
                .expect("projection should succeed");
        })
    });
}

fn bench_monotone_interpolation_10k(c: &mut Criterion) {
    let dataset = project(
        &wave_dataset(10_000),
        CanvasSize::new(1920.0, 1080.0),
        None,
        None,
    )
    .expect("projection should succeed");

    c.bench_function("monotone_interpolation_10k", |b| {
        b.iter(|| {
            let _ = Interpolation::MonotoneX.interpolate(black_box(&dataset));
        })
    });
}

criterion_group!(
    benches,
    bench_range_map,
    bench_nice_scale,
    bench_projection_10k,
    bench_monotone_interpolation_10k
);
criterion_main!(benches);
