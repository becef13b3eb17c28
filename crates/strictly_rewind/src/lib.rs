//! Strictly Rewind - tic-tac-toe with move history and time travel
//!
//! # Architecture
//!
//! - **Rules**: pure win/draw evaluation over an immutable [`Board`]
//! - **History**: linear snapshots with a cursor; recording from an earlier
//!   cursor discards the snapshots after it
//! - **Session**: the command/query surface a UI host drives, with
//!   [`SessionEvent`] notifications
//! - **TUI**: a terminal host built on ratatui (binary only)
//!
//! # Example
//!
//! ```
//! use strictly_rewind::{GameConfig, GameSession, Status, TicTacToePlayer};
//!
//! let mut session = GameSession::replay(GameConfig::default(), &[0, 4, 1, 3, 2]).unwrap();
//! assert_eq!(session.status(), Status::Winner(TicTacToePlayer::X));
//!
//! // Travel back and branch off a different line of play.
//! session.on_history_entry_clicked(2).unwrap();
//! session.on_cell_clicked(8).unwrap();
//! assert_eq!(session.list_history().len(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Session management
pub use session::{GameSession, SessionEvent, SessionSnapshot};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    apply_move, evaluate, is_draw, is_full, Board, CellClickContract, Contract, GamePhase,
    GameUndecided, History, HistoryError, JumpError, Move, MoveError, Position, Square,
    SquareIsEmpty, Status, WinLine, Player as TicTacToePlayer,
};

// Crate-level exports - Rule tables
pub use games::tictactoe::rules::LINES;

// Crate-level exports - Invariants
pub use games::tictactoe::invariants::{
    AlternatingTurnInvariant, CursorInBoundsInvariant, HistoryInvariants, Invariant,
    InvariantSet, InvariantViolation, SingleCellTransitionInvariant, StartsEmptyInvariant,
};
