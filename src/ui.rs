//! Collaborator boundary between the core and any rendering front end.

use std::io;

use thiserror::Error;

use crate::board::Board;
use crate::game::{ShotStats, Side};
use crate::grid::Coord;
use crate::ship::Direction;

/// A candidate ship placement supplied by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipPlacement {
    pub anchor: Coord,
    pub direction: Direction,
    pub length: usize,
}

/// Failures crossing the UI boundary. `Quit` is the explicit abandon signal
/// and unwinds the game loop without touching board state.
#[derive(Debug, Error)]
pub enum UiError {
    #[error("game abandoned")]
    Quit,
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Interface the orchestrator drives. Rendering technology is irrelevant to
/// the core; the `request_*` calls may be repeated after validation
/// failures.
pub trait Ui {
    fn request_ship_placement(
        &mut self,
        remaining_lengths: &[usize],
    ) -> Result<ShipPlacement, UiError>;
    fn request_attack_coordinates(&mut self) -> Result<Coord, UiError>;
    fn notify_attack_result(&mut self, hit: bool, actor: Side);
    fn notify_ship_sunk(&mut self, actor: Side);
    fn notify_game_over(&mut self, winner: Side, player: &ShotStats, computer: &ShotStats);
    fn render_board(&mut self, board: &Board);
    fn render_both_boards(&mut self, player: &Board, computer: &Board);
    fn notify_error(&mut self, message: &str);
}
