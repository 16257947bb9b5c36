//! Performance measurement for tile ranking at varying slide sizes

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ndarray::Array3;
use slidemosaic::selection::{SelectionMode, select_tiles};
use slidemosaic::tiling::partition;
use std::hint::black_box;

fn synthetic_slide(edge: usize) -> Array3<u8> {
    Array3::from_shape_fn((edge, edge, 3), |(i, j, c)| {
        ((i * 7 + j * 13 + c * 29) % 251) as u8
    })
}

/// Measures both selection modes as the partitioned tile pool grows
fn bench_select_tiles(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_tiles");

    for edge in &[256usize, 512, 1024] {
        let slide = synthetic_slide(*edge);
        let tiles = partition(slide.view(), 64);

        group.bench_with_input(BenchmarkId::new("coverage", edge), edge, |b, _| {
            b.iter(|| {
                let selected = select_tiles(
                    black_box(tiles.clone()),
                    16,
                    64,
                    SelectionMode::CoverageOnly,
                );
                black_box(selected);
            });
        });

        group.bench_with_input(BenchmarkId::new("blue_ratio", edge), edge, |b, _| {
            b.iter(|| {
                let selected = select_tiles(
                    black_box(tiles.clone()),
                    16,
                    64,
                    SelectionMode::CoverageThenBlueRatio,
                );
                black_box(selected);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_select_tiles);
criterion_main!(benches);
