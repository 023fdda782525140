//! Criterion benchmarks for nivel-stats transforms
//!
//! Run with: cargo bench -p nivel-stats

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use nivel_stats::{
    LevelMatrix, Method, RatioKind, StatsConfig, level_stats, noise_correction, noise_error,
};

/// Deterministic pseudo-random levels around 60 dB (xorshift).
fn generate_levels(count: usize) -> Vec<f64> {
    let mut state = 0x2545F4914F6CDD1D_u64;
    (0..count)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            60.0 + 5.0 * ((state >> 11) as f64 / (1_u64 << 53) as f64 - 0.5)
        })
        .collect()
}

/// Third-octave-style matrix: `bands` rows of `obs` observations.
fn generate_matrix(bands: usize, obs: usize) -> LevelMatrix {
    let flat = generate_levels(bands * obs);
    let rows: Vec<Vec<f64>> = flat.chunks(obs).map(<[f64]>::to_vec).collect();
    LevelMatrix::from_rows(&rows).unwrap()
}

fn bench_level_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_stats");

    let matrix = generate_matrix(31, 100);
    for method in [Method::Level, Method::Energy1, Method::Energy2] {
        group.bench_with_input(
            BenchmarkId::new("31x100", method.to_string()),
            &method,
            |b, &method| {
                let config = StatsConfig::with_method(method);
                b.iter(|| level_stats(black_box(&matrix), &config).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_noise_transforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("noise");

    let xn = generate_levels(10_000);
    let n: Vec<f64> = xn.iter().map(|x| x - 8.0).collect();
    group.bench_function("correction_10k", |b| {
        b.iter(|| noise_correction(black_box(&xn), black_box(&n)).unwrap());
    });

    let ratios = generate_levels(10_000);
    group.bench_function("error_snr_10k", |b| {
        b.iter(|| noise_error(black_box(&ratios), RatioKind::Snr));
    });

    group.finish();
}

criterion_group!(benches, bench_level_stats, bench_noise_transforms);
criterion_main!(benches);
