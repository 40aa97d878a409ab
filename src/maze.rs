use grid_util::point::Point;
use log::info;
use petgraph::graph::NodeIndex;

use crate::error::{MazeError, Result};
use crate::graph::MazeGraph;
use crate::grid::{PassabilityGrid, Side};
use crate::solver::{dijkstra::DijkstraSolver, ShortestPathSolver, Solution};
use crate::{DEFAULT_END_SIDE, DEFAULT_START_SIDE};

/// Where a maze is entered or left.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// The first passable cell on the boundary line of a side, see [PassabilityGrid::entry_point].
    Side(Side),
    /// An explicit grid coordinate.
    At(Point),
}

impl From<Side> for Endpoint {
    fn from(side: Side) -> Endpoint {
        Endpoint::Side(side)
    }
}

impl From<Point> for Endpoint {
    fn from(point: Point) -> Endpoint {
        Endpoint::At(point)
    }
}

/// A [MazeGraph] together with the nodes a route starts and ends at.
#[derive(Clone, Debug)]
pub struct Maze {
    graph: MazeGraph,
    start: NodeIndex,
    end: NodeIndex,
}

impl Maze {
    /// Builds the graph of `grid` and resolves both endpoints to nodes. An endpoint that does not
    /// land exactly on a node is reported as [MazeError::StartEndNotAGraphNode].
    pub fn new(
        grid: &PassabilityGrid,
        start: impl Into<Endpoint>,
        end: impl Into<Endpoint>,
    ) -> Result<Maze> {
        let start_point = resolve(grid, start.into())?;
        let end_point = resolve(grid, end.into())?;
        let graph = MazeGraph::from_grid(grid);
        Maze::from_graph(graph, start_point, end_point)
    }

    /// Uses the default entrance on the north edge and exit on the south edge.
    pub fn from_grid(grid: &PassabilityGrid) -> Result<Maze> {
        Maze::new(grid, DEFAULT_START_SIDE, DEFAULT_END_SIDE)
    }

    pub fn from_graph(graph: MazeGraph, start: Point, end: Point) -> Result<Maze> {
        let start = graph
            .node_at(start)
            .ok_or(MazeError::StartEndNotAGraphNode(start))?;
        let end = graph
            .node_at(end)
            .ok_or(MazeError::StartEndNotAGraphNode(end))?;
        info!(
            "The maze starts at {} and ends at {}",
            graph.position(start),
            graph.position(end)
        );
        Ok(Maze { graph, start, end })
    }

    pub fn graph(&self) -> &MazeGraph {
        &self.graph
    }

    pub fn start(&self) -> NodeIndex {
        self.start
    }

    pub fn end(&self) -> NodeIndex {
        self.end
    }

    pub fn start_position(&self) -> Point {
        self.graph.position(self.start)
    }

    pub fn end_position(&self) -> Point {
        self.graph.position(self.end)
    }

    /// Solves the maze with [DijkstraSolver].
    pub fn solve(&self) -> Result<Solution> {
        DijkstraSolver.solve(self)
    }
}

fn resolve(grid: &PassabilityGrid, endpoint: Endpoint) -> Result<Point> {
    match endpoint {
        Endpoint::Side(side) => grid.entry_point(side),
        Endpoint::At(point) => Ok(point),
    }
}
