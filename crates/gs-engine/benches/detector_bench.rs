//! Detection and Payout Benchmarks
//!
//! Grid generation, pattern scanning and pricing across grid sizes.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use gs_engine::{
    EngineConfig, GridGenerator, SpinController, SymbolCatalog, calculate_payout, detect_wins,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const GRID_SIZES: &[usize] = &[3, 5, 8, 12];

/// Benchmark weighted grid generation
fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let generator = GridGenerator::new(&SymbolCatalog::classic()).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for &size in GRID_SIZES {
        group.bench_with_input(BenchmarkId::new("weighted", size), &size, |b, &size| {
            b.iter(|| black_box(generator.generate(&mut rng, size, size)))
        });
    }

    group.finish();
}

/// Benchmark detection + payout on random grids
fn bench_detect(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect");
    let catalog = SymbolCatalog::classic();
    let generator = GridGenerator::new(&catalog).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for &size in GRID_SIZES {
        let grids: Vec<_> = (0..64).map(|_| generator.generate(&mut rng, size, size)).collect();

        group.bench_with_input(BenchmarkId::new("detect_wins", size), &grids, |b, grids| {
            b.iter(|| {
                for grid in grids {
                    black_box(detect_wins(grid));
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("detect_and_pay", size), &grids, |b, grids| {
            b.iter(|| {
                for grid in grids {
                    let patterns = detect_wins(grid);
                    black_box(calculate_payout(&patterns, grid, &catalog).unwrap());
                }
            })
        });
    }

    group.finish();
}

/// Benchmark a full studio-timed spin
fn bench_spin(c: &mut Criterion) {
    let config = EngineConfig::studio().with_credits(u64::MAX / 2);
    let mut ctrl = SpinController::seeded(config, 1).unwrap();

    c.bench_function("studio_spin", |b| {
        b.iter(|| {
            ctrl.request_spin().unwrap();
            black_box(ctrl.advance(0).unwrap());
        })
    });
}

criterion_group!(benches, bench_generate, bench_detect, bench_spin);
criterion_main!(benches);
