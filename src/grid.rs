use core::fmt;
use std::str::FromStr;

use grid_util::grid::{BoolGrid, ValueGrid};
use grid_util::point::Point;
use log::debug;

use crate::error::{MazeError, Result};

/// One of the four axis directions. The grid's y axis grows southward, so [Side::North] is the
/// row with `y == 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    North,
    East,
    South,
    West,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::North, Side::East, Side::South, Side::West];

    /// Unit step pointing towards this side.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Side::North => (0, -1),
            Side::East => (1, 0),
            Side::South => (0, 1),
            Side::West => (-1, 0),
        }
    }

    pub fn opposite(self) -> Side {
        match self {
            Side::North => Side::South,
            Side::East => Side::West,
            Side::South => Side::North,
            Side::West => Side::East,
        }
    }

    /// Moves `point` `steps` cells towards this side.
    pub fn step(self, point: Point, steps: i32) -> Point {
        let (dx, dy) = self.offset();
        Point::new(point.x + dx * steps, point.y + dy * steps)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Side::North => "north",
            Side::East => "east",
            Side::South => "south",
            Side::West => "west",
        };
        f.write_str(name)
    }
}

impl FromStr for Side {
    type Err = MazeError;

    /// Accepts single letter labels (`N`) as well as full names (`north`), ignoring case.
    fn from_str(s: &str) -> Result<Side> {
        match s.trim().to_ascii_lowercase().as_str() {
            "n" | "north" => Ok(Side::North),
            "e" | "east" => Ok(Side::East),
            "s" | "south" => Ok(Side::South),
            "w" | "west" => Ok(Side::West),
            _ => Err(MazeError::UnknownSide(s.to_owned())),
        }
    }
}

/// Open/closed state of the four neighbours of a cell, indexed in [Side::ALL] order.
pub type OpenSides = [bool; 4];

/// A rectangular grid of cells where `true` marks a traversable cell. Backed by a [BoolGrid],
/// cells outside the grid count as walls.
#[derive(Clone, Debug)]
pub struct PassabilityGrid {
    cells: BoolGrid,
}

impl PassabilityGrid {
    /// Creates a grid of the given size with every cell blocked.
    pub fn new(width: usize, height: usize) -> Result<PassabilityGrid> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidGrid { width, height });
        }
        Ok(PassabilityGrid {
            cells: BoolGrid::new(width, height, false),
        })
    }

    /// Builds a grid by evaluating `passable` at every `(x, y)`.
    pub fn from_fn<F>(width: usize, height: usize, mut passable: F) -> Result<PassabilityGrid>
    where
        F: FnMut(i32, i32) -> bool,
    {
        let mut grid = PassabilityGrid::new(width, height)?;
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                grid.cells.set(x, y, passable(x, y));
            }
        }
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.cells.width()
    }

    pub fn height(&self) -> usize {
        self.cells.height()
    }

    pub fn in_bounds(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width()
            && (point.y as usize) < self.height()
    }

    /// Out of bounds points are never passable.
    pub fn is_passable(&self, point: Point) -> bool {
        self.in_bounds(point) && self.cells.get(point.x, point.y)
    }

    /// Marks a cell as passable or blocked. Points outside the grid are ignored.
    pub fn set_passable(&mut self, point: Point, passable: bool) {
        if self.in_bounds(point) {
            self.cells.set(point.x, point.y, passable);
        }
    }

    pub fn open_sides(&self, point: Point) -> OpenSides {
        Side::ALL.map(|side| self.is_passable(side.step(point, 1)))
    }

    /// A passable cell is a plain corridor cell when it is open on exactly two opposite sides.
    /// Every other passable cell is a dead-end, turn or junction.
    pub fn is_corridor(&self, point: Point) -> bool {
        matches!(
            self.open_sides(point),
            [true, false, true, false] | [false, true, false, true]
        )
    }

    /// Finds the first passable cell on the boundary line of `side`. Horizontal edges are scanned
    /// west to east and vertical edges north to south.
    pub fn entry_point(&self, side: Side) -> Result<Point> {
        let (w, h) = (self.width() as i32, self.height() as i32);
        let (origin, along, len) = match side {
            Side::North => (Point::new(0, 0), Side::East, w),
            Side::South => (Point::new(0, h - 1), Side::East, w),
            Side::West => (Point::new(0, 0), Side::South, h),
            Side::East => (Point::new(w - 1, 0), Side::South, h),
        };
        let found = (0..len)
            .map(|i| along.step(origin, i))
            .find(|&p| self.is_passable(p));
        match found {
            Some(point) => {
                debug!("Entry point on the {} edge is {}", side, point);
                Ok(point)
            }
            None => Err(MazeError::NoEntryPointFound(side)),
        }
    }

    pub fn passable_count(&self) -> usize {
        let mut count = 0;
        for y in 0..self.height() as i32 {
            for x in 0..self.width() as i32 {
                if self.cells.get(x, y) {
                    count += 1;
                }
            }
        }
        count
    }
}

impl FromStr for PassabilityGrid {
    type Err = MazeError;

    /// Parses rows of `.` (passable) and `#` (wall). Lines are trimmed and blank lines skipped.
    fn from_str(s: &str) -> Result<PassabilityGrid> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<&str>>();
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.chars().count());
        let mut grid = PassabilityGrid::new(width, height)?;
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(MazeError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let passable = match ch {
                    '.' => true,
                    '#' => false,
                    _ => return Err(MazeError::InvalidCell { x, y, ch }),
                };
                grid.cells.set(x as i32, y as i32, passable);
            }
        }
        Ok(grid)
    }
}

impl fmt::Display for PassabilityGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height() as i32 {
            let row = (0..self.width() as i32)
                .map(|x| if self.cells.get(x, y) { '.' } else { '#' })
                .collect::<String>();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
