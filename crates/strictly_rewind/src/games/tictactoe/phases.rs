//! Game phases derived from a board snapshot.
//!
//! Phases are never stored. They are recomputed from whichever snapshot the
//! history cursor points at, so jumping backwards can turn a finished game
//! back into one in progress.

use super::rules::{evaluate, is_full, WinLine};
use super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Phase of the game at a given snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// No line yet and empty squares remain.
    InProgress,
    /// A player completed a line.
    Won(WinLine),
    /// Board is full with no line.
    Drawn,
}

impl GamePhase {
    /// Derives the phase of `board`.
    #[instrument(skip(board))]
    pub fn of(board: &Board) -> Self {
        if let Some(win) = evaluate(board) {
            GamePhase::Won(win)
        } else if is_full(board) {
            GamePhase::Drawn
        } else {
            GamePhase::InProgress
        }
    }

    /// True for `Won` and `Drawn`: no further moves are accepted.
    pub fn is_decided(&self) -> bool {
        !matches!(self, GamePhase::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GamePhase::Won(win) => Some(win.winner),
            _ => None,
        }
    }
}
