use fxhash::FxHashMap;
use grid_util::point::Point;
use log::{debug, info};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::grid::{PassabilityGrid, Side};

/// Sparse graph of the decision points of a maze. Every dead-end, turn and junction cell becomes
/// a node and straight corridors between them become edges weighted by their length in cells.
///
/// Each corridor is stored as a pair of directed edges, so the connections of a node are exactly
/// its outgoing edges. The topology is immutable once built; search state lives in the solvers.
#[derive(Clone, Debug, Default)]
pub struct MazeGraph {
    graph: DiGraph<Point, u32>,
    lookup: FxHashMap<Point, NodeIndex>,
}

impl MazeGraph {
    /// Scans the grid in row-major order, creating a node at every non-corridor passable cell and
    /// connecting it to the nearest node to its west and north. Those neighbours always precede
    /// the new node in scan order, and the edges towards east and south are added from the other
    /// end once the scan reaches it.
    pub fn from_grid(grid: &PassabilityGrid) -> MazeGraph {
        let (w, h) = (grid.width(), grid.height());
        let mut maze_graph = MazeGraph::default();
        // Nodes indexed by cell, only needed while scanning.
        let mut node_grid: Vec<Option<NodeIndex>> = vec![None; w * h];
        for y in 0..h as i32 {
            for x in 0..w as i32 {
                let point = Point::new(x, y);
                if !grid.is_passable(point) || grid.is_corridor(point) {
                    continue;
                }
                let node = maze_graph.graph.add_node(point);
                maze_graph.lookup.insert(point, node);
                node_grid[y as usize * w + x as usize] = Some(node);

                for side in [Side::West, Side::North] {
                    if let Some((other, steps)) = nearest_node(grid, &node_grid, point, side) {
                        maze_graph.connect(node, other, steps);
                    }
                }
            }
        }
        info!(
            "Extracted {} nodes and {} corridors from a {}x{} grid",
            maze_graph.node_count(),
            maze_graph.edge_count() / 2,
            w,
            h
        );
        maze_graph
    }

    fn connect(&mut self, a: NodeIndex, b: NodeIndex, weight: u32) {
        debug!(
            "Connecting {} and {} with weight {}",
            self.graph[a], self.graph[b], weight
        );
        self.graph.add_edge(a, b, weight);
        self.graph.add_edge(b, a, weight);
    }

    /// The node located exactly at `point`, if any.
    pub fn node_at(&self, point: Point) -> Option<NodeIndex> {
        self.lookup.get(&point).copied()
    }

    pub fn position(&self, node: NodeIndex) -> Point {
        self.graph[node]
    }

    /// Neighbours of `node` with the corridor length to each, most recently discovered first.
    pub fn connections(&self, node: NodeIndex) -> impl Iterator<Item = (NodeIndex, u32)> + '_ {
        self.graph
            .edges(node)
            .map(|edge| (edge.target(), *edge.weight()))
    }

    pub fn edge_weight(&self, a: NodeIndex, b: NodeIndex) -> Option<u32> {
        self.graph.find_edge(a, b).map(|e| self.graph[e])
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of directed edges, twice the number of corridors.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeIndex> {
        self.graph.node_indices()
    }

    /// Node positions in the order they were found.
    pub fn positions(&self) -> impl Iterator<Item = Point> + '_ {
        self.graph.node_indices().map(|node| self.graph[node])
    }

    pub fn inner(&self) -> &DiGraph<Point, u32> {
        &self.graph
    }
}

/// Walks from `start` towards `side` through passable cells until a node is met, returning it
/// together with the number of steps taken.
fn nearest_node(
    grid: &PassabilityGrid,
    node_grid: &[Option<NodeIndex>],
    start: Point,
    side: Side,
) -> Option<(NodeIndex, u32)> {
    let w = grid.width();
    let mut steps = 1;
    loop {
        let p = side.step(start, steps);
        if !grid.is_passable(p) {
            return None;
        }
        if let Some(node) = node_grid[p.y as usize * w + p.x as usize] {
            return Some((node, steps as u32));
        }
        steps += 1;
    }
}
