use crate::random_square;
use criterion::{measurement::WallTime, BenchmarkGroup};
use floodsquare::{Direction, TransformMode};

pub(crate) fn run_benchmarks(
    group: &mut BenchmarkGroup<WallTime>,
    size: usize,
    important_benches_only: bool,
) {
    let directions: &[Direction] = if important_benches_only {
        &[Direction::North]
    } else {
        &[Direction::North, Direction::East, Direction::South, Direction::West]
    };

    for &direction in directions {
        let mut square = random_square(size);
        group.bench_function(format!("regular_{direction:?}").to_lowercase(), |b| {
            b.iter(|| square.transform(direction, TransformMode::Regular))
        });
    }
}
