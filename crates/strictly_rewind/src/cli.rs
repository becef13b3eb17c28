//! Command-line interface for strictly_rewind.

use clap::{Parser, Subcommand};

/// Strictly Rewind - tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "strictly_rewind")]
#[command(about = "Tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML game configuration (defaults are used if missing)
    #[arg(short, long, global = true, default_value = "strictly_rewind.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Tui,

    /// Play a sequence of cell clicks and print the resulting position
    Replay {
        /// Comma-separated cells, as keys 1-9 (as printed on the board) or labels like "center"
        #[arg(short, long, default_value = "")]
        moves: String,

        /// Jump to this history entry after playing the moves
        #[arg(short, long)]
        jump: Option<usize>,

        /// Print the snapshot as JSON instead of a text board
        #[arg(long)]
        json: bool,
    },
}
