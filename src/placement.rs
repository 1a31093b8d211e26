//! Shared fleet placement rule.
//!
//! Both the human entry path and the automated placement path validate
//! candidates through this function, so the two fleets obey identical rules.

use crate::common::PlacementError;
use crate::grid::{Cell, Coord, Grid};
use crate::ship::Direction;

/// Validate a candidate placement against `grid` and return the span of
/// cells the ship would occupy.
///
/// Rejects spans that leave the grid and spans crossing any non-empty cell.
/// Touching ships are legal; only strict overlap is forbidden. Performs no
/// mutation, so callers can apply the span atomically after a successful
/// check.
pub fn validate_placement(
    grid: &Grid,
    length: usize,
    anchor: Coord,
    direction: Direction,
) -> Result<Vec<Coord>, PlacementError> {
    let size = grid.size();
    if length == 0 || length >= size {
        return Err(PlacementError::InvalidLength { length, size });
    }
    let fits = match direction {
        Direction::Horizontal => anchor.y < size && anchor.x + length <= size,
        Direction::Vertical => anchor.x < size && anchor.y + length <= size,
    };
    if !fits {
        return Err(PlacementError::OutOfBounds {
            anchor,
            length,
            size,
        });
    }
    let mut span = Vec::with_capacity(length);
    for i in 0..length {
        let coord = direction.step(anchor, i);
        if grid.get(coord) != Some(Cell::Empty) {
            return Err(PlacementError::Overlap(coord));
        }
        span.push(coord);
    }
    Ok(span)
}
