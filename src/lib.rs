//! # maze_graph
//!
//! Solves mazes given as grids of passable and blocked cells. The grid is first reduced to a
//! sparse graph with a node at every dead-end, turn and junction, connected by edges weighted
//! with the length of the straight corridor between them. Routes are then found with
//! [Dijkstra's algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm) on that graph,
//! which visits far fewer vertices than searching the grid cell by cell.
//!
//! ```
//! use maze_graph::{Maze, PassabilityGrid};
//!
//! let grid: PassabilityGrid = "#.###\n#...#\n###.#".parse().unwrap();
//! let solution = Maze::from_grid(&grid).unwrap().solve().unwrap();
//! assert_eq!(solution.cost, 4);
//! ```
pub mod error;
pub mod graph;
pub mod grid;
pub mod maze;
pub mod search;
pub mod solver;

pub use error::{MazeError, Result};
pub use graph::MazeGraph;
pub use grid::{PassabilityGrid, Side};
pub use maze::{Endpoint, Maze};
pub use solver::{dijkstra::DijkstraSolver, ShortestPathSolver, Solution};

use grid_util::point::Point;

/// Side a maze is entered from unless configured otherwise.
pub const DEFAULT_START_SIDE: Side = Side::North;
/// Side a maze is left from unless configured otherwise.
pub const DEFAULT_END_SIDE: Side = Side::South;

/// Turns waypoints into a path on the grid which can be followed step by step. Consecutive
/// waypoints are expected to share a row or column.
pub fn waypoints_to_path(waypoints: &[Point]) -> Vec<Point> {
    let mut path: Vec<Point> = Vec::new();
    let Some((&first, rest)) = waypoints.split_first() else {
        return path;
    };
    let mut current = first;
    path.push(current);
    for &next in rest {
        while current != next {
            current = Point::new(
                current.x + (next.x - current.x).signum(),
                current.y + (next.y - current.y).signum(),
            );
            path.push(current);
        }
    }
    path
}
