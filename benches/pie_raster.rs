use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use maptui::data::browser_market_shares;
use maptui::widgets::pie_chart::{slice_points, RASTER_STEP};

fn benchmark(c: &mut Criterion) {
    let series = browser_market_shares();

    c.bench_function("raster-default-step", |b| {
        b.iter(|| slice_points(black_box(&series), 1.0, 0.18, RASTER_STEP))
    });

    c.bench_function("raster-fine-step", |b| {
        b.iter(|| slice_points(black_box(&series), 1.0, 0.18, RASTER_STEP / 4.0))
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
