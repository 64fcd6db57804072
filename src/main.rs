//! Vanishing tic-tac-toe - CLI entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use tracing::{info, instrument, warn};
use vanishing_tictactoe::{GameConfig, RoundSnapshot, Session, init_stderr_logging, tui};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config =
        GameConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => tui::run_tui(&config),
        Command::Replay { cells, json } => run_replay(&config, &cells, json),
    }
}

/// Plays `cells` in order and prints the final round.
#[instrument(skip(config))]
fn run_replay(config: &GameConfig, cells: &[usize], json: bool) -> Result<()> {
    init_stderr_logging(config);
    info!("Replaying moves");

    let mut session = Session::from_config(config);
    session.start_game();

    for &cell in cells {
        let transition = session
            .place_piece(cell)
            .context("Session left play mode during replay")?;
        if let Some(reason) = transition.rejection() {
            warn!(cell, %reason, "Move ignored");
        }
    }

    let round = session.round().context("No round in progress")?;
    let snapshot = RoundSnapshot::from(round);

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    println!("{}", snapshot.board.display());
    println!();
    match (snapshot.winner, snapshot.winning_line) {
        (Some(winner), Some(line)) => println!("Player {} wins on {}", winner, line),
        _ => {
            println!("Player {} to move", snapshot.current_player);
            if let Some(cell) = snapshot.dying_piece {
                println!("Next placement removes the piece on {}", cell + 1);
            }
        }
    }
    Ok(())
}
