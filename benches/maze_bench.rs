use criterion::{criterion_group, criterion_main, Criterion};
use grid_util::point::Point;
use maze_graph::{DijkstraSolver, Maze, MazeGraph, PassabilityGrid, ShortestPathSolver};
use rand::prelude::*;
use std::hint::black_box;

fn random_grid(n: usize, rng: &mut StdRng) -> PassabilityGrid {
    let mut grid = PassabilityGrid::from_fn(n, n, |_, _| rng.gen_bool(0.7)).unwrap();
    grid.set_passable(Point::new(0, 0), true);
    grid.set_passable(Point::new(n as i32 - 1, n as i32 - 1), true);
    grid
}

fn maze_bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    for n in [64, 256] {
        let grid = random_grid(n, &mut rng);
        let end = Point::new(n as i32 - 1, n as i32 - 1);

        c.bench_function(format!("extract graph, {n}x{n}").as_str(), |b| {
            b.iter(|| black_box(MazeGraph::from_grid(&grid)))
        });

        let maze = Maze::new(&grid, Point::new(0, 0), end).unwrap();
        c.bench_function(format!("dijkstra, {n}x{n}").as_str(), |b| {
            b.iter(|| black_box(DijkstraSolver.solve(&maze)))
        });
    }
}

criterion_group!(benches, maze_bench);
criterion_main!(benches);
