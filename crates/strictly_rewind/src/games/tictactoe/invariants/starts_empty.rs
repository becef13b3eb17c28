//! History always begins at the empty board.

use super::super::{Board, History};
use super::Invariant;

/// Invariant: snapshot 0 exists and is the empty board.
pub struct StartsEmptyInvariant;

impl Invariant<History> for StartsEmptyInvariant {
    fn holds(history: &History) -> bool {
        history.board_at(0) == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Position};

    #[test]
    fn test_new_history_holds() {
        assert!(StartsEmptyInvariant::holds(&History::new()));
    }

    #[test]
    fn test_marked_start_violates() {
        let start = Board::new().with_mark(Position::Center, Player::X);
        let history = History::from_raw(vec![start], 0);
        assert!(!StartsEmptyInvariant::holds(&history));
    }

    #[test]
    fn test_missing_start_violates() {
        assert!(!StartsEmptyInvariant::holds(&History::from_raw(Vec::new(), 0)));
    }
}
