//! Board state: ship placements, hit resolution, sunk and game-over checks.

use crate::common::{AttackError, AttackResult, PlacementError};
use crate::grid::{Cell, Coord, Grid, ShipId};
use crate::placement::validate_placement;
use crate::ship::{Direction, Ship};

/// One side's N×N board: the cell grid, the placed ships and the count of
/// ships still afloat.
#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    ships: Vec<Ship>,
    remaining: usize,
}

impl Board {
    /// Create an empty board with the given side length.
    pub fn new(size: usize) -> Self {
        Self {
            grid: Grid::new(size),
            ships: Vec::new(),
            remaining: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Read access to the cell grid, for renderers and the placement rule.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Ships placed so far, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of placed ships not yet sunk.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Place a ship spanning `length` cells from `anchor` along `direction`.
    ///
    /// The placement is validated in full before any cell is written, so a
    /// failed call leaves the board untouched.
    pub fn place_ship(
        &mut self,
        length: usize,
        anchor: Coord,
        direction: Direction,
        id: ShipId,
    ) -> Result<(), PlacementError> {
        if self.ships.iter().any(|s| s.id() == id) {
            return Err(PlacementError::DuplicateId(id));
        }
        let span = validate_placement(&self.grid, length, anchor, direction)?;
        for coord in span {
            self.grid.set(coord, Cell::Occupied(id));
        }
        self.ships.push(Ship::new(id, anchor, direction, length));
        self.remaining += 1;
        Ok(())
    }

    /// Resolve an attack on `coord`.
    ///
    /// Each cell resolves at most once; a second attack on the same cell is
    /// an error and leaves the grid unchanged. A hit that completes a ship
    /// reports [`AttackResult::Sunk`] and decrements [`Board::remaining`],
    /// exactly once per ship.
    pub fn attack(&mut self, coord: Coord) -> Result<AttackResult, AttackError> {
        let size = self.grid.size();
        match self.grid.get(coord) {
            None => Err(AttackError::OutOfBounds { coord, size }),
            Some(Cell::Hit) | Some(Cell::Miss) => Err(AttackError::AlreadyResolved(coord)),
            Some(Cell::Empty) => {
                self.grid.set(coord, Cell::Miss);
                Ok(AttackResult::Miss)
            }
            Some(Cell::Occupied(id)) => {
                self.grid.set(coord, Cell::Hit);
                if self.is_sunk(id) {
                    self.remaining -= 1;
                    Ok(AttackResult::Sunk(id))
                } else {
                    Ok(AttackResult::Hit(id))
                }
            }
        }
    }

    /// `true` once every cell of ship `id` has been hit. Unknown ids are
    /// simply not sunk; absence is legal during setup.
    pub fn is_sunk(&self, id: ShipId) -> bool {
        // Scan the span instead of keeping a per-ship hit counter; the span
        // is at most a handful of cells and cannot drift out of sync.
        self.ships
            .iter()
            .find(|s| s.id() == id)
            .is_some_and(|s| s.cells().all(|c| self.grid.get(c) == Some(Cell::Hit)))
    }

    /// `true` when every placed ship is sunk.
    pub fn is_game_over(&self) -> bool {
        self.remaining == 0
    }
}
