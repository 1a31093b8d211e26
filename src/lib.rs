mod ai;
mod board;
mod common;
mod config;
mod console;
mod game;
mod grid;
mod logging;
mod placement;
mod ship;
mod ui;

pub use ai::*;
pub use board::*;
pub use common::*;
pub use config::*;
pub use console::*;
pub use game::*;
pub use grid::*;
pub use logging::init_logging;
pub use placement::*;
pub use ship::*;
pub use ui::*;
