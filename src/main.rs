use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use seabattle::{init_logging, ConsoleUi, Game, GameConfig, UiError};

#[derive(Parser)]
#[command(author, version, about = "Console battleship against a hunting AI", long_about = None)]
struct Cli {
    /// Properties file with board size and fleet settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fix the RNG seed for reproducible games (e.g., --seed 12345).
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => GameConfig::from_properties_file(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => GameConfig::default(),
    };

    let mut rng = if let Some(s) = cli.seed {
        println!("Using fixed seed: {s} (game will be reproducible)");
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut game = Game::new(config, ConsoleUi::new());
    match game.run(&mut rng) {
        Ok(_) => {}
        Err(UiError::Quit) => println!("Game abandoned."),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}
