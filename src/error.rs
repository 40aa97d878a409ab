use grid_util::point::Point;
use thiserror::Error;

use crate::grid::Side;

/// Every way building or solving a maze can fail. None of these are transient: each one
/// identifies the stage that rejected the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("grid must be non-empty in both dimensions, got {width}x{height}")]
    InvalidGrid { width: usize, height: usize },
    #[error("no passable cell on the {0} edge of the grid")]
    NoEntryPointFound(Side),
    #[error("entry point {0} does not coincide with a graph node")]
    StartEndNotAGraphNode(Point),
    #[error("no path from {start} to {end}")]
    NoPathFound { start: Point, end: Point },
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("invalid cell {ch:?} at ({x}, {y})")]
    InvalidCell { x: usize, y: usize, ch: char },
    #[error("unknown side {0:?}, expected one of N, E, S, W")]
    UnknownSide(String),
}

pub type Result<T> = std::result::Result<T, MazeError>;
