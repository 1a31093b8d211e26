//! Game configuration: validation, length reconciliation and file loading.

use std::fs;
use std::path::Path;

use rand::Rng;
use thiserror::Error;

use crate::grid::ShipId;

/// Startup configuration failures. These are fatal; nothing mid-game ever
/// surfaces them.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("board size {0} is too small, need at least 2")]
    BoardTooSmall(usize),
    #[error("at least one ship is required")]
    NoShips,
    #[error("too many ships ({0}), at most {max} supported", max = ShipId::MAX)]
    TooManyShips(usize),
    #[error("ship length list is empty")]
    NoShipLengths,
    #[error("ship length {length} does not fit a board of size {board_size}")]
    BadShipLength { length: usize, board_size: usize },
    #[error("missing setting `{0}`")]
    MissingKey(&'static str),
    #[error("invalid value for `{key}`: {value:?}")]
    BadValue { key: &'static str, value: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Validated game settings, assembled once at startup and handed to the
/// orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: usize,
    pub num_ships: usize,
    pub ship_lengths: Vec<usize>,
}

impl GameConfig {
    /// Build and validate a configuration.
    pub fn new(
        board_size: usize,
        num_ships: usize,
        ship_lengths: Vec<usize>,
    ) -> Result<Self, ConfigError> {
        if board_size < 2 {
            return Err(ConfigError::BoardTooSmall(board_size));
        }
        if num_ships == 0 {
            return Err(ConfigError::NoShips);
        }
        if num_ships > ShipId::MAX as usize {
            return Err(ConfigError::TooManyShips(num_ships));
        }
        if ship_lengths.is_empty() {
            return Err(ConfigError::NoShipLengths);
        }
        if let Some(&length) = ship_lengths.iter().find(|&&l| l == 0 || l >= board_size) {
            return Err(ConfigError::BadShipLength { length, board_size });
        }
        Ok(Self {
            board_size,
            num_ships,
            ship_lengths,
        })
    }

    /// Load settings from a `key = value` properties file.
    pub fn from_properties_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_properties(&fs::read_to_string(path)?)
    }

    /// Parse the properties format: one `key = value` per line, `#` for
    /// comments. Expects `board_size`, `battleships` and a comma-separated
    /// `battle_ship_length` list; unknown keys are ignored so files carrying
    /// front-end settings still parse.
    pub fn from_properties(text: &str) -> Result<Self, ConfigError> {
        let mut board_size = None;
        let mut num_ships = None;
        let mut lengths = None;
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let (key, value) = (key.trim(), value.trim());
            match key {
                "board_size" => board_size = Some(parse_usize("board_size", value)?),
                "battleships" => num_ships = Some(parse_usize("battleships", value)?),
                "battle_ship_length" => {
                    let parsed = value
                        .split(',')
                        .map(|tok| parse_usize("battle_ship_length", tok.trim()))
                        .collect::<Result<Vec<_>, _>>()?;
                    lengths = Some(parsed);
                }
                _ => {}
            }
        }
        Self::new(
            board_size.ok_or(ConfigError::MissingKey("board_size"))?,
            num_ships.ok_or(ConfigError::MissingKey("battleships"))?,
            lengths.ok_or(ConfigError::MissingKey("battle_ship_length"))?,
        )
    }

    /// Ship lengths reconciled to exactly `num_ships` entries: padded by
    /// repeating randomly chosen existing lengths, or down-sampled by random
    /// removal. Runs once at setup; each side then owns its own copy of the
    /// result.
    pub fn reconciled_lengths<R: Rng>(&self, rng: &mut R) -> Vec<usize> {
        let mut lengths = self.ship_lengths.clone();
        while lengths.len() < self.num_ships {
            let extra = lengths[rng.random_range(0..lengths.len())];
            lengths.push(extra);
        }
        while lengths.len() > self.num_ships {
            let drop = rng.random_range(0..lengths.len());
            lengths.remove(drop);
        }
        lengths
    }
}

impl Default for GameConfig {
    /// Classic fleet on a 10×10 board.
    fn default() -> Self {
        Self {
            board_size: 10,
            num_ships: 5,
            ship_lengths: vec![5, 4, 3, 3, 2],
        }
    }
}

fn parse_usize(key: &'static str, value: &str) -> Result<usize, ConfigError> {
    value.parse().map_err(|_| ConfigError::BadValue {
        key,
        value: value.to_string(),
    })
}
