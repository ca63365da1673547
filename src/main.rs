use clap::Parser;
use tracing_subscriber::EnvFilter;

use noughts::cli::args::Args;
use noughts::io::TerminalIO;
use noughts::models::errors::{GameError, GameResult};
use noughts::services::game::Game;

fn main() -> GameResult<()> {
    let args = Args::parse();
    init_logging();

    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::debug!(seed, "starting session");

    let mut game = Game::new(seed, args.display_settings(), TerminalIO, TerminalIO);
    match game.run() {
        Err(GameError::IoError(err)) if err.kind() == std::io::ErrorKind::UnexpectedEof => {
            tracing::info!("input closed, exiting");
            Ok(())
        }
        result => result,
    }
}

/// Log to stderr, filtered by RUST_LOG. Quiet by default so the board stays readable.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
