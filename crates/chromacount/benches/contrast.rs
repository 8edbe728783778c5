use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use std::hint::black_box;

use chromacount::{Palette, SimulationMode, SortOrder};

const COLORS: [&str; 8] = [
    "#1E3A8A", "#FDE047", "#808080", "#DC2626", "#16A34A", "#FFFFFF", "#000000", "#6872FF",
];

pub fn run_benchmarks(c: &mut Criterion) {
    let palette = Palette::parse(&COLORS).expect("valid colors");

    let mut group = c.benchmark_group("palette");

    group.bench_function("contrast-matrix", |b| {
        b.iter(|| black_box(&palette).contrast_matrix())
    });

    group.bench_function("sort-by-luminance", |b| {
        b.iter(|| black_box(&palette).sorted(SortOrder::Luminance))
    });

    group.bench_function("sort-by-hue", |b| {
        b.iter(|| black_box(&palette).sorted(SortOrder::Hue))
    });

    group.bench_function("simulate-all", |b| {
        b.iter_batched(
            || palette.clone(),
            |palette| {
                SimulationMode::ALL
                    .iter()
                    .map(|mode| palette.simulate(*mode))
                    .collect::<Vec<_>>()
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
