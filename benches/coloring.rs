//! Performance measurement for color propagation at varying grid sizes

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use hitomezashi::algorithm::coloring::ColorMap;
use hitomezashi::algorithm::edges::EdgeMap;
use hitomezashi::algorithm::pattern::{RandomBitSource, StitchPattern};
use std::hint::black_box;

/// Measures coloring propagation cost as subdivisions increase
fn bench_color_propagation(c: &mut Criterion) {
    let mut group = c.benchmark_group("color_propagation");

    for subdivisions in &[10usize, 20, 40, 80] {
        let mut source = RandomBitSource::new(12345);
        let horizontal = StitchPattern::generate(*subdivisions, &mut source);
        let vertical = StitchPattern::generate(*subdivisions, &mut source);
        let Ok(edges) = EdgeMap::build(&horizontal, &vertical) else {
            group.finish();
            return;
        };

        group.bench_with_input(
            BenchmarkId::from_parameter(subdivisions),
            subdivisions,
            |b, _| {
                b.iter(|| {
                    let colors = ColorMap::build(black_box(&edges));
                    black_box(colors);
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_color_propagation);
criterion_main!(benches);
