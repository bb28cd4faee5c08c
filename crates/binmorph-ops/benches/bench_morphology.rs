use binmorph_grid::BitGrid;
use binmorph_ops::{close, dilate, erode, fill_holes, open, Kernel, KernelShape};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn create_test_grid(height: usize, width: usize) -> BitGrid {
    let mut rng = StdRng::seed_from_u64(42);
    let cells: Vec<u8> = (0..height * width).map(|_| rng.random_range(0..=1)).collect();
    BitGrid::from_vec(height, width, cells).unwrap()
}

fn bench_morphology(c: &mut Criterion) {
    let mut group = c.benchmark_group("Morphology");

    let (h, w) = (64, 64);
    let grid = create_test_grid(h, w);
    let kernel = Kernel::new(KernelShape::Box { size: 3 }).unwrap();

    group.bench_with_input(
        BenchmarkId::new("erode", format!("{}x{}", h, w)),
        &grid,
        |b, g| b.iter(|| erode(g, &kernel)),
    );

    group.bench_with_input(
        BenchmarkId::new("dilate", format!("{}x{}", h, w)),
        &grid,
        |b, g| b.iter(|| dilate(g, &kernel)),
    );

    group.bench_with_input(
        BenchmarkId::new("open", format!("{}x{}", h, w)),
        &grid,
        |b, g| b.iter(|| open(g, &kernel)),
    );

    group.bench_with_input(
        BenchmarkId::new("close", format!("{}x{}", h, w)),
        &grid,
        |b, g| b.iter(|| close(g, &kernel)),
    );

    group.bench_with_input(
        BenchmarkId::new("fill_holes", format!("{}x{}", h, w)),
        &grid,
        |b, g| b.iter(|| fill_holes(g, &kernel)),
    );

    group.finish();
}

criterion_group!(benches, bench_morphology);
criterion_main!(benches);
