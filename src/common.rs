//! Attack outcomes and the error taxonomy shared across the crate.

use thiserror::Error;

use crate::grid::{Coord, ShipId};

/// Outcome of a resolved attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackResult {
    /// No ship at the target cell.
    Miss,
    /// Hit a ship that still has unhit cells.
    Hit(ShipId),
    /// Hit the last unhit cell of a ship, sinking it.
    Sunk(ShipId),
}

impl AttackResult {
    /// `true` for both plain hits and sinking hits.
    pub fn is_hit(self) -> bool {
        matches!(self, AttackResult::Hit(_) | AttackResult::Sunk(_))
    }
}

/// Rejected ship placements. Recovered by re-prompting or resampling, never
/// fatal.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    #[error("length-{length} ship at {anchor} does not fit on the {size}x{size} board")]
    OutOfBounds {
        anchor: Coord,
        length: usize,
        size: usize,
    },
    #[error("cell {0} is already occupied")]
    Overlap(Coord),
    #[error("ship {0} is already placed")]
    DuplicateId(ShipId),
    #[error("ship length {length} is invalid for a {size}x{size} board")]
    InvalidLength { length: usize, size: usize },
}

/// Rejected attacks. Recovered by re-soliciting the same actor's choice.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AttackError {
    #[error("coordinate {coord} is outside the {size}x{size} board")]
    OutOfBounds { coord: Coord, size: usize },
    #[error("cell {0} was already attacked")]
    AlreadyResolved(Coord),
}
