//! Cell states and coordinates for the square game grid.

use std::fmt;

/// Identifier of a ship, unique within a board. Ids start at 1.
pub type ShipId = u8;

/// A 0-indexed board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Orthogonal neighbors in fixed order: left, right, up, down.
    /// Coordinates that would underflow are skipped; the far edges are left
    /// to the caller's bounds check.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        [
            self.x.checked_sub(1).map(|x| Coord::new(x, self.y)),
            Some(Coord::new(self.x + 1, self.y)),
            self.y.checked_sub(1).map(|y| Coord::new(self.x, y)),
            Some(Coord::new(self.x, self.y + 1)),
        ]
        .into_iter()
        .flatten()
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// State of a single board cell.
///
/// A cell moves `Empty` to `Occupied` only while fleets are being placed,
/// and `Occupied` to `Hit` or `Empty` to `Miss` only once the battle is
/// underway. Attacking a `Hit` or `Miss` cell is an error, never a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Occupied(ShipId),
    Hit,
    Miss,
}

/// Square N×N grid of cell states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-empty grid with the given side length.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.x < self.size && coord.y < self.size
    }

    /// Cell state at `coord`, or `None` outside the grid.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        if self.in_bounds(coord) {
            Some(self.cells[coord.y * self.size + coord.x])
        } else {
            None
        }
    }

    pub(crate) fn set(&mut self, coord: Coord, cell: Cell) {
        debug_assert!(self.in_bounds(coord));
        let idx = coord.y * self.size + coord.x;
        self.cells[idx] = cell;
    }
}
