//! Game session: the command/query surface a presentation host drives.
//!
//! A session owns one [`History`] and derives everything else (phase,
//! winning line, status text) from the snapshot at the cursor on demand.
//! Hosts learn about changes by polling or by subscribing to
//! [`SessionEvent`]s.

use crate::config::GameConfig;
use crate::games::tictactoe::{
    Board, CellClickContract, Contract, GamePhase, History, JumpError, Move, MoveError, Player,
    Position, Square, Status,
};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, instrument, warn};

/// State change notification delivered to subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A mark was placed and recorded.
    MovePlayed {
        /// Mark placed and the square it filled.
        action: Move,
        /// Move number after recording (equals the new cursor).
        move_number: usize,
    },
    /// The cursor moved to another snapshot.
    Jumped {
        /// New cursor.
        cursor: usize,
    },
    /// History was reset to the empty board.
    Restarted,
}

/// Serializable view of a session for hosts and the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Square labels in row-major order; empty squares are `""`.
    pub board: Vec<String>,
    /// Active snapshot index.
    pub cursor: usize,
    /// Number of stored snapshots.
    pub history_len: usize,
    /// Rendered status line.
    pub status: String,
    /// Winning squares as indices, if any.
    pub winning_line: Option<[usize; 3]>,
}

/// One tic-tac-toe game with time travel.
#[derive(Debug)]
pub struct GameSession {
    history: History,
    config: GameConfig,
    subscribers: Vec<UnboundedSender<SessionEvent>>,
}

impl GameSession {
    /// Creates a session with default configuration.
    #[instrument]
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// Creates a session using `config`.
    #[instrument]
    pub fn with_config(config: GameConfig) -> Self {
        Self {
            history: History::new(),
            config,
            subscribers: Vec::new(),
        }
    }

    /// Builds a session by clicking `cells` in order.
    ///
    /// # Errors
    ///
    /// Returns the first rejected click's error.
    #[instrument(skip(config))]
    pub fn replay(config: GameConfig, cells: &[usize]) -> Result<Self, MoveError> {
        let mut session = Self::with_config(config);
        for &cell in cells {
            session.on_cell_clicked(cell)?;
        }
        Ok(session)
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// The snapshot at `index`, if it exists.
    pub fn board_at(&self, index: usize) -> Option<Board> {
        self.history.board_at(index).copied()
    }

    /// The snapshot at the cursor.
    pub fn current_board(&self) -> Board {
        *self.history.current_board()
    }

    /// All snapshots, oldest first; indices are valid jump targets.
    pub fn list_history(&self) -> &[Board] {
        self.history.boards()
    }

    /// Underlying history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Session configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Active snapshot index.
    pub fn cursor(&self) -> usize {
        self.history.cursor()
    }

    /// Moves played to reach the active snapshot.
    pub fn move_count(&self) -> usize {
        self.history.move_count()
    }

    /// Player to move at the cursor.
    pub fn to_move(&self) -> Player {
        self.history.to_move()
    }

    /// Phase of the snapshot at the cursor.
    pub fn phase(&self) -> GamePhase {
        GamePhase::of(self.history.current_board())
    }

    /// Winning squares at the cursor, for highlighting.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        match self.phase() {
            GamePhase::Won(win) => Some(win.line),
            _ => None,
        }
    }

    /// Typed status at the cursor.
    pub fn status(&self) -> Status {
        Status::of(&self.history)
    }

    /// Status line rendered with the configured player labels.
    pub fn status_message(&self) -> String {
        self.status()
            .render(self.config.x_label(), self.config.o_label())
    }

    /// Configured label for `player`.
    pub fn label(&self, player: Player) -> &str {
        match player {
            Player::X => self.config.x_label().as_str(),
            Player::O => self.config.o_label().as_str(),
        }
    }

    /// Serializable view of the cursor snapshot.
    #[instrument(skip(self))]
    pub fn snapshot(&self) -> SessionSnapshot {
        let board = self
            .current_board()
            .squares()
            .iter()
            .map(|square| match square {
                Square::Empty => String::new(),
                Square::Occupied(player) => self.label(*player).to_string(),
            })
            .collect();

        SessionSnapshot {
            board,
            cursor: self.cursor(),
            history_len: self.history.len(),
            status: self.status_message(),
            winning_line: self.winning_line().map(|line| line.map(Position::to_index)),
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Commands
    // ─────────────────────────────────────────────────────────────

    /// Handles a click on cell `index` (0-8).
    ///
    /// Places the mark implied by cursor parity and records the new board,
    /// discarding any snapshots after the cursor.
    ///
    /// # Errors
    ///
    /// A rejected click leaves the session untouched:
    /// - [`MoveError::OutOfBounds`] for an index past 8
    /// - [`MoveError::GameOver`] when the cursor snapshot is decided
    /// - [`MoveError::SquareOccupied`] when the square is taken
    /// - [`MoveError::InvariantViolation`] if the recorded history would be inconsistent
    #[instrument(skip(self), fields(cursor = self.history.cursor()))]
    pub fn on_cell_clicked(&mut self, index: usize) -> Result<(), MoveError> {
        let checked = Position::from_index(index)
            .ok_or(MoveError::OutOfBounds(index))
            .and_then(|position| {
                CellClickContract::pre(&self.history, &position).map(|()| position)
            });
        let position = match checked {
            Ok(position) => position,
            Err(e) => {
                warn!(index, error = %e, "Click ignored");
                return Err(e);
            }
        };

        let action = Move::new(self.history.to_move(), position);
        let next = action.apply(self.history.current_board())?;

        let mut candidate = self.history.clone();
        candidate.record(next);
        if *self.config.check_invariants() {
            CellClickContract::post(&self.history, &candidate)?;
        }
        self.history = candidate;

        debug!(%action, move_number = self.history.cursor(), "Move recorded");
        self.emit(SessionEvent::MovePlayed {
            action,
            move_number: self.history.cursor(),
        });
        Ok(())
    }

    /// Handles a click on history entry `index`.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError::OutOfRange`] without moving the cursor when
    /// `index` is not a stored snapshot.
    #[instrument(skip(self))]
    pub fn on_history_entry_clicked(&mut self, index: usize) -> Result<(), JumpError> {
        if let Err(e) = self.history.jump_to(index) {
            warn!(error = %e, "Jump ignored");
            return Err(e);
        }
        self.emit(SessionEvent::Jumped { cursor: index });
        Ok(())
    }

    /// Starts over from the empty board.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!(discarded = self.history.len() - 1, "Restarting game");
        self.history.reset();
        self.emit(SessionEvent::Restarted);
    }

    /// Registers a new listener for state changes.
    pub fn subscribe(&mut self) -> UnboundedReceiver<SessionEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    fn emit(&mut self, event: SessionEvent) {
        self.subscribers.retain(|tx| tx.send(event).is_ok());
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
