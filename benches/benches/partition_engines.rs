// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_partition::{LabelGrid, Solver};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }
}

fn gen_uniform(n: usize) -> LabelGrid<u8> {
    LabelGrid::from_fn(n, n, |_, _| 0).unwrap()
}

fn gen_stripes(n: usize) -> LabelGrid<u8> {
    LabelGrid::from_fn(n, n, |r, _| (r % 2) as u8).unwrap()
}

fn gen_checkerboard(n: usize) -> LabelGrid<u8> {
    LabelGrid::from_fn(n, n, |r, c| ((r + c) % 2) as u8).unwrap()
}

/// Independent per-cell labels: many small rectangles.
fn gen_noise(n: usize, labels: u64) -> LabelGrid<u8> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    LabelGrid::from_fn(n, n, |_, _| rng.below(labels) as u8).unwrap()
}

/// Square tiles of `tile` cells, each with a random label: a tile-map-like workload.
fn gen_tiles(n: usize, tile: usize, labels: u64) -> LabelGrid<u8> {
    let tiles = n.div_ceil(tile);
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    let picks: Vec<u8> = (0..tiles * tiles)
        .map(|_| rng.below(labels) as u8)
        .collect();
    LabelGrid::from_fn(n, n, |r, c| picks[(r / tile) * tiles + c / tile]).unwrap()
}

fn bench_frontier(c: &mut Criterion) {
    let mut group = c.benchmark_group("frontier");
    for &n in &[64usize, 128, 256] {
        let workloads = [
            ("uniform", gen_uniform(n)),
            ("stripes", gen_stripes(n)),
            ("checkerboard", gen_checkerboard(n)),
            ("noise3", gen_noise(n, 3)),
            ("tiles8", gen_tiles(n, 8, 4)),
        ];
        group.throughput(Throughput::Elements((n * n) as u64));
        for (name, grid) in workloads {
            group.bench_function(format!("{name}_n{n}"), |b| {
                b.iter_batched(
                    || Solver::new(grid.clone()),
                    |mut solver| {
                        let steps = solver.run_to_fixpoint();
                        black_box((steps, solver.len()));
                    },
                    BatchSize::LargeInput,
                )
            });
        }
    }
    group.finish();
}

fn bench_pairwise(c: &mut Criterion) {
    let mut group = c.benchmark_group("pairwise");
    group.sample_size(10);
    for &n in &[8usize, 16, 32] {
        let workloads = [
            ("uniform", gen_uniform(n)),
            ("noise3", gen_noise(n, 3)),
            ("tiles4", gen_tiles(n, 4, 4)),
        ];
        group.throughput(Throughput::Elements((n * n) as u64));
        for (name, grid) in workloads {
            group.bench_function(format!("{name}_n{n}"), |b| {
                b.iter_batched(
                    || Solver::with_pairwise(grid.clone()),
                    |mut solver| {
                        let steps = solver.run_to_fixpoint();
                        black_box((steps, solver.len()));
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

fn bench_greedy(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy");
    for &n in &[64usize, 128, 256] {
        let workloads = [
            ("uniform", gen_uniform(n)),
            ("noise3", gen_noise(n, 3)),
            ("tiles8", gen_tiles(n, 8, 4)),
        ];
        group.throughput(Throughput::Elements((n * n) as u64));
        for (name, grid) in workloads {
            group.bench_function(format!("{name}_n{n}"), |b| {
                b.iter_batched(
                    || Solver::with_greedy(grid.clone()),
                    |mut solver| {
                        let steps = solver.run_to_fixpoint();
                        black_box((steps, solver.len()));
                    },
                    BatchSize::LargeInput,
                )
            });
        }
    }
    group.finish();
}

fn bench_frontier_vs_pairwise(c: &mut Criterion) {
    let mut group = c.benchmark_group("frontier_vs_pairwise");
    group.sample_size(10);
    let grid = gen_tiles(32, 4, 4);
    group.bench_function("frontier_tiles4_n32", |b| {
        b.iter_batched(
            || Solver::new(grid.clone()),
            |mut solver| black_box(solver.run_to_fixpoint()),
            BatchSize::SmallInput,
        )
    });
    group.bench_function("pairwise_tiles4_n32", |b| {
        b.iter_batched(
            || Solver::with_pairwise(grid.clone()),
            |mut solver| black_box(solver.run_to_fixpoint()),
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let mut solver = Solver::new(gen_tiles(128, 8, 4));
    solver.run_to_fixpoint();
    group.bench_function("render_tiles8_n128", |b| {
        b.iter(|| black_box(solver.render().to_string().len()))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_frontier,
    bench_pairwise,
    bench_greedy,
    bench_frontier_vs_pairwise,
    bench_render,
);
criterion_main!(benches);
