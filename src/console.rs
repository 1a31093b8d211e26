//! Console front end: stdin prompts and text board rendering.

use std::io::{self, Write};

use crate::board::Board;
use crate::game::{ShotStats, Side};
use crate::grid::{Cell, Coord};
use crate::ui::{ShipPlacement, Ui, UiError};

/// Text-console implementation of [`Ui`]. Coordinates are entered 1-based;
/// `q` or `quit` abandons the game at any prompt.
#[derive(Default)]
pub struct ConsoleUi;

impl ConsoleUi {
    pub fn new() -> Self {
        Self
    }

    fn read_line(&self, prompt: &str) -> Result<String, UiError> {
        print!("{prompt}");
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            // closed stdin counts as quitting
            return Err(UiError::Quit);
        }
        let line = line.trim().to_string();
        if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
            return Err(UiError::Quit);
        }
        Ok(line)
    }
}

/// Parse a 1-based coordinate pair typed by the user.
fn parse_coord(x: &str, y: &str) -> Option<Coord> {
    let x: usize = x.parse().ok()?;
    let y: usize = y.parse().ok()?;
    Some(Coord::new(x.checked_sub(1)?, y.checked_sub(1)?))
}

fn cell_symbol(cell: Cell, reveal: bool) -> char {
    match cell {
        Cell::Hit => 'X',
        Cell::Miss => 'o',
        Cell::Occupied(_) if reveal => 'S',
        _ => '.',
    }
}

fn print_board(board: &Board, reveal: bool) {
    let size = board.size();
    print!("   ");
    for x in 0..size {
        print!(" {:>2}", x + 1);
    }
    println!();
    for y in 0..size {
        print!("{:2} ", y + 1);
        for x in 0..size {
            let cell = board.grid().get(Coord::new(x, y)).unwrap_or(Cell::Empty);
            print!("  {}", cell_symbol(cell, reveal));
        }
        println!();
    }
}

impl Ui for ConsoleUi {
    fn request_ship_placement(
        &mut self,
        remaining_lengths: &[usize],
    ) -> Result<ShipPlacement, UiError> {
        println!("Ships left to place (lengths): {remaining_lengths:?}");
        loop {
            let line = self.read_line("Place a ship <x> <y> <h|v> <length>: ")?;
            let parts: Vec<&str> = line.split_whitespace().collect();
            if let [x, y, dir, len] = parts[..] {
                let anchor = parse_coord(x, y);
                let direction = dir.parse().ok();
                let length = len.parse::<usize>().ok();
                if let (Some(anchor), Some(direction), Some(length)) = (anchor, direction, length)
                {
                    return Ok(ShipPlacement {
                        anchor,
                        direction,
                        length,
                    });
                }
            }
            println!("Could not read that, expected e.g. `3 4 h 3`.");
        }
    }

    fn request_attack_coordinates(&mut self) -> Result<Coord, UiError> {
        loop {
            let line = self.read_line("Fire at <x> <y>: ")?;
            let parts: Vec<&str> = line.split_whitespace().collect();
            if let [x, y] = parts[..] {
                if let Some(coord) = parse_coord(x, y) {
                    return Ok(coord);
                }
            }
            println!("Could not read that, expected e.g. `5 7`.");
        }
    }

    fn notify_attack_result(&mut self, hit: bool, actor: Side) {
        if hit {
            println!("{actor} scored a hit!");
        } else {
            println!("{actor} missed.");
        }
    }

    fn notify_ship_sunk(&mut self, actor: Side) {
        println!("{actor} sunk a battleship!");
    }

    fn notify_game_over(&mut self, winner: Side, player: &ShotStats, computer: &ShotStats) {
        println!("\nGame over, {winner} wins!");
        println!("Player:   {} hits, {} misses", player.hits, player.misses);
        println!("Computer: {} hits, {} misses", computer.hits, computer.misses);
    }

    fn render_board(&mut self, board: &Board) {
        println!("\nYour board:");
        print_board(board, true);
    }

    fn render_both_boards(&mut self, player: &Board, computer: &Board) {
        println!("\nYour board:");
        print_board(player, true);
        println!("\nComputer board:");
        print_board(computer, false);
    }

    fn notify_error(&mut self, message: &str) {
        println!("Error: {message}");
    }
}
