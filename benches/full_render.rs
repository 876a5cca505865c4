//! Performance measurement for the complete pattern rendering workflow

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use hitomezashi::algorithm::controller::{PatternConfig, PatternController};
use hitomezashi::render::palette::Palette;
use hitomezashi::render::raster::RasterSurface;
use std::hint::black_box;

/// Measures generation, derivation and rasterization of one 500px canvas
fn bench_render_500px_canvas(c: &mut Criterion) {
    let palette = Palette::new([220, 20, 60, 255], [100, 149, 237, 255]);

    c.bench_function("render_500px_canvas", |b| {
        b.iter(|| {
            let surface = RasterSurface::new(500, 500, [255, 255, 255, 255]);
            let Ok(controller) =
                PatternController::new(surface, PatternConfig::default(), palette, 12345)
            else {
                return;
            };
            black_box(controller.surface().image().dimensions());
        });
    });
}

criterion_group!(benches, bench_render_500px_canvas);
criterion_main!(benches);
