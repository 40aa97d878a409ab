use log::info;

use crate::error::{MazeError, Result};
use crate::maze::Maze;
use crate::search::dijkstra;
use crate::solver::{ShortestPathSolver, Solution};

/// Solves mazes with Dijkstra's algorithm, stopping as soon as the end node is finalized.
/// Holds no state, so one solver can serve many mazes and threads at once.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

impl ShortestPathSolver for DijkstraSolver {
    fn solve(&self, maze: &Maze) -> Result<Solution> {
        let graph = maze.graph();
        let end = maze.end();
        let (nodes, cost) = dijkstra(
            &maze.start(),
            |&node| graph.connections(node),
            |&node| node == end,
        )
        .ok_or_else(|| MazeError::NoPathFound {
            start: maze.start_position(),
            end: maze.end_position(),
        })?;
        info!(
            "Solved maze from {} to {}: {} waypoints, cost {}",
            maze.start_position(),
            maze.end_position(),
            nodes.len(),
            cost
        );
        let waypoints = nodes.iter().map(|&node| graph.position(node)).collect();
        Ok(Solution {
            nodes,
            waypoints,
            cost,
        })
    }
}

#[cfg(test)]
mod tests {
    use grid_util::point::Point;

    use super::*;
    use crate::grid::{PassabilityGrid, Side};

    fn maze_from(text: &str, start: Point, end: Point) -> Maze {
        let grid: PassabilityGrid = text.parse().unwrap();
        Maze::new(&grid, start, end).unwrap()
    }

    #[test]
    fn straight_corridor() {
        let grid: PassabilityGrid = "#.#\n#.#\n#.#\n#.#\n#.#".parse().unwrap();
        let maze = Maze::from_grid(&grid).unwrap();
        assert_eq!(maze.graph().node_count(), 2);
        let solution = DijkstraSolver.solve(&maze).unwrap();
        assert_eq!(solution.nodes, vec![maze.start(), maze.end()]);
        assert_eq!(solution.waypoints, vec![Point::new(1, 0), Point::new(1, 4)]);
        assert_eq!(solution.cost, 4);
        assert_eq!(solution.path().len(), 5);
    }

    /// Asserts that the case in which start and end are equal is handled correctly.
    #[test]
    fn equal_start_end() {
        let maze = maze_from("...\n.#.\n...", Point::new(0, 0), Point::new(0, 0));
        let solution = DijkstraSolver.solve(&maze).unwrap();
        assert_eq!(solution.nodes, vec![maze.start()]);
        assert_eq!(solution.cost, 0);
        assert_eq!(solution.path(), vec![Point::new(0, 0)]);
    }

    #[test]
    fn disconnected_regions() {
        // ..#..
        // ..#..
        let maze = maze_from("..#..\n..#..", Point::new(0, 0), Point::new(4, 1));
        assert_eq!(
            DijkstraSolver.solve(&maze).unwrap_err(),
            MazeError::NoPathFound {
                start: Point::new(0, 0),
                end: Point::new(4, 1)
            }
        );
    }

    /// A junction with arms of length 2, 3, 4 and 5. Every route has to pass the junction, so
    /// the cost is the sum of the two arms used.
    #[test]
    fn routes_through_junction() {
        // Junction at (5, 2): north arm 2, west arm 3, east arm 4, south arm 5.
        let text = "\
            #####.####\n\
            #####.####\n\
            ##........\n\
            #####.####\n\
            #####.####\n\
            #####.####\n\
            #####.####\n\
            #####.####\n";
        let grid: PassabilityGrid = text.parse().unwrap();
        let junction = Point::new(5, 2);
        let north = Point::new(5, 0);
        let west = Point::new(2, 2);
        let east = Point::new(9, 2);
        let south = Point::new(5, 7);
        let graph = crate::graph::MazeGraph::from_grid(&grid);
        assert_eq!(graph.node_count(), 5);
        let j = graph.node_at(junction).unwrap();
        for (arm, len) in [(north, 2), (west, 3), (east, 4), (south, 5)] {
            assert_eq!(graph.edge_weight(j, graph.node_at(arm).unwrap()), Some(len));
        }

        for (start, end, expected) in [
            (north, east, 6),
            (north, south, 7),
            (west, south, 8),
            (east, west, 7),
            (south, east, 9),
        ] {
            let maze = Maze::from_graph(graph.clone(), start, end).unwrap();
            let solution = DijkstraSolver.solve(&maze).unwrap();
            assert_eq!(solution.cost, expected);
            assert_eq!(solution.waypoints, vec![start, junction, end]);
        }
    }

    /// Open areas produce nodes at every junction cell, the route cost still counts cells.
    #[test]
    fn cost_matches_cells_walked() {
        let text = "\
            .......\n\
            #.....#\n\
            #.###.#\n\
            #.#...#\n\
            #.#.###\n\
            #...###\n";
        let grid: PassabilityGrid = text.parse().unwrap();
        let maze = Maze::new(&grid, Point::new(0, 0), Point::new(3, 3)).unwrap();
        let solution = maze.solve().unwrap();
        assert_eq!(solution.cost, 10);
        assert_eq!(solution.cost, DijkstraSolver.path_cost(&solution.waypoints));
        assert_eq!(solution.path().len() as u32, solution.cost + 1);
    }

    #[test]
    fn repeated_solves_agree() {
        let grid: PassabilityGrid = "\
            #.#####\n\
            #.....#\n\
            #.#.#.#\n\
            #...#.#\n\
            ###.#.#\n\
            #.....#\n\
            #.#####\n"
            .parse()
            .unwrap();
        let maze = Maze::new(&grid, Side::North, Side::South).unwrap();
        let first = DijkstraSolver.solve(&maze).unwrap();
        let second = DijkstraSolver.solve(&maze).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.cost, DijkstraSolver.path_cost(&first.waypoints));
        assert_eq!(first.waypoints.first(), Some(&Point::new(1, 0)));
        assert_eq!(first.waypoints.last(), Some(&Point::new(1, 6)));
    }
}
