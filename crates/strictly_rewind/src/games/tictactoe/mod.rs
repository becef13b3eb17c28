//! Tic-tac-toe with move history and time travel.

mod action;
mod contracts;
mod history;
pub mod invariants;
mod phases;
mod position;
pub mod rules;
mod status;
mod types;

pub use action::{apply_move, Move, MoveError};
pub use contracts::{CellClickContract, Contract, GameUndecided, SquareIsEmpty};
pub use history::{History, HistoryError, JumpError};
pub use phases::GamePhase;
pub use position::Position;
pub use rules::{evaluate, is_draw, is_full, WinLine};
pub use status::Status;
pub use types::{Board, Player, Square};
