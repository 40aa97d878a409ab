use grid_util::point::Point;
use itertools::Itertools;
use petgraph::graph::NodeIndex;

use crate::error::Result;
use crate::maze::Maze;
use crate::waypoints_to_path;

pub mod dijkstra;

/// A route through a maze.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// Graph nodes from start to end, both inclusive.
    pub nodes: Vec<NodeIndex>,
    /// Grid positions of [nodes](Self::nodes).
    pub waypoints: Vec<Point>,
    /// Total number of cells moved.
    pub cost: u32,
}

impl Solution {
    /// Expands the waypoints into every cell the route passes through.
    pub fn path(&self) -> Vec<Point> {
        waypoints_to_path(&self.waypoints)
    }
}

pub trait ShortestPathSolver {
    /// Finds a cheapest route from the start node of `maze` to its end node. Fails with
    /// [NoPathFound](crate::MazeError::NoPathFound) when they are not connected.
    fn solve(&self, maze: &Maze) -> Result<Solution>;

    /// Cost of following axis-aligned waypoints, one per step.
    fn path_cost(&self, waypoints: &[Point]) -> u32 {
        waypoints
            .iter()
            .tuple_windows()
            .map(|(a, b)| ((a.x - b.x).abs() + (a.y - b.y).abs()) as u32)
            .sum()
    }
}
