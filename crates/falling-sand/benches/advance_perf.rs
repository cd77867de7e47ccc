//! Benchmark: measure `advance()` cost under various grid conditions.
//!
//! Active benchmarks use `iter_batched` to rebuild the grid before every
//! iteration so we measure moving sand, not a settled grid.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use falling_sand::{Brush, Cell, Grid, Simulation, Universe};
use rand::rngs::SmallRng;
use rand::SeedableRng;

const SIDE: usize = 256;

fn sim_from(grid: Grid) -> Simulation<SmallRng> {
    Simulation::from_grid(grid, SmallRng::seed_from_u64(0x5A4D))
}

/// Empty grid: baseline cost of scanning 65K cells with nothing to do.
fn bench_advance_empty(c: &mut Criterion) {
    c.bench_function("advance_empty_256x256", |b| {
        let mut sim = sim_from(Grid::new(SIDE, SIDE));
        b.iter(|| {
            sim.advance();
            black_box(sim.grid());
        });
    });
}

/// Top 20% full of sand, all of it falling.
fn bench_advance_falling(c: &mut Criterion) {
    c.bench_function("advance_falling_256x256", |b| {
        b.iter_batched(
            || {
                let mut grid = Grid::new(SIDE, SIDE);
                for y in SIDE - 51..SIDE {
                    for x in 0..SIDE {
                        grid.set(x, y, Cell::sand((x ^ y) as u64));
                    }
                }
                sim_from(grid)
            },
            |mut sim| {
                sim.advance();
                black_box(sim.grid());
            },
            BatchSize::SmallInput,
        );
    });
}

/// Checkerboard on the lower half: every grain resolves a diagonal slide.
fn bench_advance_sliding(c: &mut Criterion) {
    c.bench_function("advance_sliding_256x256", |b| {
        b.iter_batched(
            || {
                let mut grid = Grid::new(SIDE, SIDE);
                for y in 0..SIDE / 2 {
                    for x in 0..SIDE {
                        if (x + y) % 2 == 0 {
                            grid.set(x, y, Cell::sand((x * 31 + y) as u64));
                        }
                    }
                }
                sim_from(grid)
            },
            |mut sim| {
                sim.advance();
                black_box(sim.grid());
            },
            BatchSize::SmallInput,
        );
    });
}

/// Full `Universe` frame as the browser drives it: tick, then paint.
fn bench_universe_frame(c: &mut Criterion) {
    c.bench_function("universe_frame_256x256", |b| {
        let Ok(mut universe) = Universe::from_config(r#"{ "width": 256, "height": 256, "seed": 1 }"#)
        else {
            panic!("bench config must be valid");
        };
        b.iter(|| {
            universe.tick();
            universe.add_sand(128, 250);
            black_box(universe.occupancy());
        });
    });
}

/// Brush placement alone, large extent near a corner.
fn bench_add_sand(c: &mut Criterion) {
    c.bench_function("add_sand_extent_16", |b| {
        let mut sim = sim_from(Grid::new(SIDE, SIDE));
        let brush = Brush::new(16);
        b.iter(|| black_box(sim.add_sand(4, 4, brush)));
    });
}

criterion_group!(
    benches,
    bench_advance_empty,
    bench_advance_falling,
    bench_advance_sliding,
    bench_universe_frame,
    bench_add_sand,
);
criterion_main!(benches);
