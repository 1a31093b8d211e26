//! Ship placement data and direction handling.

use std::str::FromStr;

use thiserror::Error;

use crate::grid::{Coord, ShipId};

/// Direction a ship extends from its anchor cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Extends along the x axis.
    Horizontal,
    /// Extends along the y axis.
    Vertical,
}

impl Direction {
    /// Coordinate `i` steps from `anchor` along this direction.
    pub fn step(self, anchor: Coord, i: usize) -> Coord {
        match self {
            Direction::Horizontal => Coord::new(anchor.x + i, anchor.y),
            Direction::Vertical => Coord::new(anchor.x, anchor.y + i),
        }
    }
}

/// Failed to parse a direction word.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown direction {0:?}, expected h/horizontal or v/vertical")]
pub struct ParseDirectionError(String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Normalizes free-form user input. Typed callers construct the variants
    /// directly; this conversion lives at the input boundary only.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "h" | "horizontal" => Ok(Direction::Horizontal),
            "v" | "vertical" => Ok(Direction::Vertical),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

/// A placed ship: anchor plus the span derived from direction and length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    id: ShipId,
    anchor: Coord,
    direction: Direction,
    length: usize,
}

impl Ship {
    pub(crate) fn new(id: ShipId, anchor: Coord, direction: Direction, length: usize) -> Self {
        Self {
            id,
            anchor,
            direction,
            length,
        }
    }

    pub fn id(&self) -> ShipId {
        self.id
    }

    pub fn anchor(&self) -> Coord {
        self.anchor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Cells this ship occupies, anchor first.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.length).map(move |i| self.direction.step(self.anchor, i))
    }
}
