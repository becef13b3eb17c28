//! Strictly Rewind - CLI entry point.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{anyhow, Result};
use clap::Parser;
use cli::{Cli, Command};
use strictly_rewind::{GameConfig, GameSession, Position};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Tui => {
            let config = GameConfig::load_or_default(&cli.config)?;
            tui::run_tui(config)
        }
        Command::Replay { moves, jump, json } => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
                )
                .with_writer(std::io::stderr)
                .init();
            let config = GameConfig::load_or_default(&cli.config)?;
            run_replay(config, &moves, jump, json)
        }
    }
}

/// Parses a comma-separated list of cells, numbered 1-9 like the printed board.
#[instrument]
fn parse_moves(moves: &str) -> Result<Vec<Position>> {
    moves
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| Position::from_label_or_number(s).ok_or_else(|| anyhow!("Unknown cell {:?}", s)))
        .collect()
}

/// Plays `moves`, optionally jumps, and prints the snapshot at the cursor.
#[instrument(skip(config))]
fn run_replay(config: GameConfig, moves: &str, jump: Option<usize>, json: bool) -> Result<()> {
    let positions = parse_moves(moves)?;
    info!(count = positions.len(), "Replaying moves");

    let mut session = GameSession::with_config(config);
    for position in positions {
        // Rejected clicks are no-ops, same as in the interactive host.
        if let Err(e) = session.on_cell_clicked(position.to_index()) {
            warn!(%position, error = %e, "Skipping rejected move");
        }
    }

    if let Some(index) = jump {
        session.on_history_entry_clicked(index)?;
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
    } else {
        println!("{}", session.current_board().display());
        println!();
        println!("{}", session.status_message());
        println!(
            "Move {} of {}",
            session.cursor(),
            session.list_history().len() - 1
        );
    }

    Ok(())
}
