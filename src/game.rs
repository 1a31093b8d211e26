//! Game orchestration: setup phase, alternating battle turns, statistics.

use std::fmt;

use log::{debug, info};
use rand::Rng;

use crate::ai::AiPlayer;
use crate::board::Board;
use crate::common::AttackResult;
use crate::config::GameConfig;
use crate::grid::ShipId;
use crate::ui::{Ui, UiError};

/// The two actors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    pub fn label(self) -> &'static str {
        match self {
            Side::Player => "Player",
            Side::Computer => "Computer",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Cumulative attack statistics for one side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShotStats {
    pub hits: u32,
    pub misses: u32,
}

/// Orchestrates one game: player setup, computer setup, then strict
/// ping-pong turns until one fleet is gone.
pub struct Game<U: Ui> {
    config: GameConfig,
    ui: U,
    player_board: Board,
    computer_board: Board,
    computer: AiPlayer,
    player_stats: ShotStats,
    computer_stats: ShotStats,
    winner: Option<Side>,
}

impl<U: Ui> Game<U> {
    /// Build a game from a validated configuration. Both boards start empty.
    pub fn new(config: GameConfig, ui: U) -> Self {
        let size = config.board_size;
        Self {
            ui,
            player_board: Board::new(size),
            computer_board: Board::new(size),
            computer: AiPlayer::new(size),
            player_stats: ShotStats::default(),
            computer_stats: ShotStats::default(),
            winner: None,
            config,
        }
    }

    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    pub fn computer_board(&self) -> &Board {
        &self.computer_board
    }

    pub fn player_stats(&self) -> ShotStats {
        self.player_stats
    }

    pub fn computer_stats(&self) -> ShotStats {
        self.computer_stats
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    /// Run the game to completion. Returns the winner, or `UiError::Quit`
    /// when the human abandons the game.
    pub fn run<R: Rng>(&mut self, rng: &mut R) -> Result<Side, UiError> {
        let lengths = self.config.reconciled_lengths(rng);
        info!(
            "starting game: {size}x{size} board, {count} ships",
            size = self.config.board_size,
            count = lengths.len()
        );
        self.place_player_fleet(lengths.clone())?;
        self.computer
            .place_ships(rng, &mut self.computer_board, lengths);
        info!("fleets placed, battle begins");
        let winner = self.battle(rng)?;
        self.winner = Some(winner);
        info!("game over, {winner} wins");
        self.ui
            .notify_game_over(winner, &self.player_stats, &self.computer_stats);
        self.ui
            .render_both_boards(&self.player_board, &self.computer_board);
        Ok(winner)
    }

    /// Solicit placements until every required ship is on the board. Rule
    /// violations re-prompt for the same ship; the phase cannot advance with
    /// a partial fleet.
    fn place_player_fleet(&mut self, mut pool: Vec<usize>) -> Result<(), UiError> {
        let count = pool.len();
        for id in 1..=count {
            self.ui.render_board(&self.player_board);
            loop {
                let placement = self.ui.request_ship_placement(&pool)?;
                let Some(slot) = pool.iter().position(|&l| l == placement.length) else {
                    self.ui.notify_error(&format!(
                        "no ship of length {} left to place",
                        placement.length
                    ));
                    continue;
                };
                match self.player_board.place_ship(
                    placement.length,
                    placement.anchor,
                    placement.direction,
                    id as ShipId,
                ) {
                    Ok(()) => {
                        pool.remove(slot);
                        break;
                    }
                    Err(err) => self.ui.notify_error(&err.to_string()),
                }
            }
        }
        self.ui.render_board(&self.player_board);
        Ok(())
    }

    fn battle<R: Rng>(&mut self, rng: &mut R) -> Result<Side, UiError> {
        let mut player_turn = true;
        loop {
            if player_turn {
                self.player_turn()?;
                self.ui
                    .render_both_boards(&self.player_board, &self.computer_board);
            } else {
                self.computer_turn(rng);
            }
            // The game ends the instant either fleet is gone; the winner is
            // the attacker of that final board.
            if self.computer_board.is_game_over() {
                return Ok(Side::Player);
            }
            if self.player_board.is_game_over() {
                return Ok(Side::Computer);
            }
            player_turn = !player_turn;
        }
    }

    /// One human turn. Invalid shots re-solicit the same actor instead of
    /// forfeiting the turn.
    fn player_turn(&mut self) -> Result<(), UiError> {
        loop {
            let coord = self.ui.request_attack_coordinates()?;
            match self.computer_board.attack(coord) {
                Ok(result) => {
                    debug!("player attacks {coord}: {result:?}");
                    self.score(Side::Player, result);
                    return Ok(());
                }
                Err(err) => self.ui.notify_error(&err.to_string()),
            }
        }
    }

    /// One computer turn. Board rejections retry with a fresh target, never
    /// the same coordinate; the loop is bounded by the shrinking unattacked
    /// set.
    fn computer_turn<R: Rng>(&mut self, rng: &mut R) {
        loop {
            let coord = self.computer.select_target(rng);
            match self.player_board.attack(coord) {
                Ok(result) => {
                    debug!("computer attacks {coord}: {result:?}");
                    self.computer.record_attack(coord, result);
                    self.score(Side::Computer, result);
                    return;
                }
                Err(err) => {
                    debug!("computer re-selects after rejected shot at {coord}: {err}");
                    self.computer.record_rejected(coord);
                }
            }
        }
    }

    /// Every resolved attack lands in exactly one of the actor's counters.
    fn score(&mut self, side: Side, result: AttackResult) {
        let stats = match side {
            Side::Player => &mut self.player_stats,
            Side::Computer => &mut self.computer_stats,
        };
        if result.is_hit() {
            stats.hits += 1;
        } else {
            stats.misses += 1;
        }
        self.ui.notify_attack_result(result.is_hit(), side);
        if let AttackResult::Sunk(_) = result {
            self.ui.notify_ship_sunk(side);
        }
    }
}
