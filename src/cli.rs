//! Command-line interface definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Vanishing tic-tac-toe: three pieces each, the oldest one disappears.
#[derive(Parser, Debug)]
#[command(name = "vanishing_tictactoe")]
#[command(about = "Vanishing tic-tac-toe for two players at one keyboard", long_about = None)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Command to run (defaults to the terminal UI)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Play in the terminal UI
    Tui,

    /// Play a scripted list of cells and print the resulting round
    Replay {
        /// Cells (0-8) in play order; the configured first player moves first
        cells: Vec<usize>,

        /// Print the round as JSON instead of a board diagram
        #[arg(long)]
        json: bool,
    },
}
