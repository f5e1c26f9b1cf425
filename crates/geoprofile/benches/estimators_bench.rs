//! Criterion benchmarks for the estimators on synthetic point sets.
//! Sizes: n in {10, 100, 500, 2000}. The O(n²) estimators (Canter, MID, NNI)
//! dominate at the larger sizes.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use geoprofile::prelude::*;
use geoprofile::synth::{draw_points, Pattern, ReplayToken, SynthCfg};

fn clustered(n: usize, seed: u64) -> Vec<Point> {
    let cfg = SynthCfg {
        pattern: Pattern::Clustered {
            clusters: 4,
            half_extent: 10_000.0,
            spread: 800.0,
        },
        count: n,
        years: Some((2010, 2024)),
    };
    draw_points(cfg, ReplayToken { seed, index: 0 })
}

fn bench_estimators(c: &mut Criterion) {
    let cfg = ProfileCfg::default();
    let mut group = c.benchmark_group("estimators");
    for &n in &[10usize, 100, 500, 2000] {
        let pts = clustered(n, 17);
        group.bench_with_input(BenchmarkId::new("fermat_point", n), &pts, |b, pts| {
            b.iter(|| fermat_point(pts, &cfg))
        });
        group.bench_with_input(BenchmarkId::new("probable_residence", n), &pts, |b, pts| {
            b.iter(|| probable_residence(pts, &cfg))
        });
        group.bench_with_input(BenchmarkId::new("convex_hull", n), &pts, |b, pts| {
            b.iter(|| convex_hull(pts))
        });
        group.bench_with_input(BenchmarkId::new("canter_circle", n), &pts, |b, pts| {
            b.iter(|| canter_circle(pts))
        });
        group.bench_with_input(
            BenchmarkId::new("nearest_neighbor_index", n),
            &pts,
            |b, pts| b.iter(|| nearest_neighbor_index(pts)),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_estimators);
criterion_main!(benches);
