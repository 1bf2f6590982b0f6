//! Command-line interface for othello.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Othello - two-player Othello with a save-file frontend
#[derive(Parser, Debug)]
#[command(name = "othello")]
#[command(about = "Play Othello in the terminal or one move at a time", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, global = true, default_value = "othello.toml")]
    pub config: PathBuf,

    /// Override the save file from the config
    #[arg(long, global = true)]
    pub save_path: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Continue the saved game and save after every turn
        #[arg(long)]
        save: bool,
    },

    /// Replace the save file with a new game
    New,

    /// Apply one move to the saved game
    Move {
        /// Row of the chosen cell (0-7)
        #[arg(long)]
        row: usize,

        /// Column of the chosen cell (0-7)
        #[arg(long)]
        col: usize,

        /// Turn number the move was chosen on; stale requests are ignored
        #[arg(long)]
        turn_number: u32,
    },

    /// Show the saved game
    Show {
        /// Print the game state as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the saved turn number
    Turn,
}
