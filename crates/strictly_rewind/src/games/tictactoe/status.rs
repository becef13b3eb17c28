//! Status line derivation.

use super::phases::GamePhase;
use super::{History, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// What the status line should say about the snapshot at the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// A player has completed a line.
    Winner(Player),
    /// No moves played yet; the first player is up.
    Start(Player),
    /// Board full, nobody won.
    Draw,
    /// Game continues with this player to move.
    NextTurn(Player),
}

impl Status {
    /// Derives the status from the history cursor.
    ///
    /// A win takes priority; then the empty start; then a full board.
    #[instrument(skip(history), fields(cursor = history.cursor()))]
    pub fn of(history: &History) -> Self {
        match GamePhase::of(history.current_board()) {
            GamePhase::Won(win) => Status::Winner(win.winner),
            _ if history.move_count() == 0 => Status::Start(history.to_move()),
            GamePhase::Drawn => Status::Draw,
            GamePhase::InProgress => Status::NextTurn(history.to_move()),
        }
    }

    /// Renders the status with custom player labels.
    pub fn render(&self, x_label: &str, o_label: &str) -> String {
        let label = |player: Player| match player {
            Player::X => x_label,
            Player::O => o_label,
        };
        match self {
            Status::Winner(player) => format!("Winner: {}", label(*player)),
            Status::Start(player) => format!("Game start, {} moves first", label(*player)),
            Status::Draw => "Game over: draw".to_string(),
            Status::NextTurn(player) => format!("Next player: {}", label(*player)),
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render("X", "O"))
    }
}
