//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. Applying one never touches the
//! board it started from; it returns the successor board instead.

use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Error that can occur when validating or applying a move.
///
/// Every variant is a rejected click: the session state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game at the current snapshot is already decided.
    #[display("Game is already over")]
    GameOver,

    /// The raw cell index is outside 0-8.
    #[display("Cell index {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// Places `player` at `position`, returning the successor board.
///
/// Only occupancy is checked here. Whether the game is already decided is
/// the caller's concern (see [`CellClickContract`](super::CellClickContract)).
#[instrument(skip(board))]
pub fn apply_move(board: &Board, position: Position, player: Player) -> Result<Board, MoveError> {
    if !board.is_empty(position) {
        debug!(%position, "Target square occupied");
        return Err(MoveError::SquareOccupied(position));
    }
    Ok(board.with_mark(position, player))
}

impl Move {
    /// Applies this move to `board`. See [`apply_move`].
    pub fn apply(&self, board: &Board) -> Result<Board, MoveError> {
        apply_move(board, self.position, self.player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Square;

    #[test]
    fn test_apply_move_returns_new_board() {
        let board = Board::new();
        let next = apply_move(&board, Position::Center, Player::X).expect("empty square");

        assert_eq!(board, Board::new());
        assert_eq!(next.get(Position::Center), Square::Occupied(Player::X));
        for pos in Position::ALL {
            if pos != Position::Center {
                assert_eq!(next.get(pos), board.get(pos));
            }
        }
    }

    #[test]
    fn test_apply_move_rejects_occupied_square() {
        let board = apply_move(&Board::new(), Position::Center, Player::X).unwrap();
        let result = apply_move(&board, Position::Center, Player::O);
        assert_eq!(result, Err(MoveError::SquareOccupied(Position::Center)));
    }

    #[test]
    fn test_move_apply_delegates() {
        let action = Move::new(Player::O, Position::TopRight);
        let next = action.apply(&Board::new()).unwrap();
        assert_eq!(next.get(Position::TopRight), Square::Occupied(Player::O));
        assert_eq!(action.to_string(), "O -> Top-right");
    }
}
