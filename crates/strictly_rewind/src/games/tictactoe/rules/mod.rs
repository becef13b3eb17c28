//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board according to
//! tic-tac-toe rules. Rules are separated from board storage and history so
//! they can be re-run against any snapshot on demand.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{evaluate, WinLine, LINES};
