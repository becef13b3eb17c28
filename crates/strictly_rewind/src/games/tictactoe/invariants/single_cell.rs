//! Each step fills exactly one previously empty square.

use super::super::{Board, History, Square};
use super::Invariant;

/// Invariant: consecutive snapshots differ in exactly one square, which
/// went from empty to occupied.
pub struct SingleCellTransitionInvariant;

/// True if `next` is `prev` plus exactly one new mark.
pub fn is_single_step(prev: &Board, next: &Board) -> bool {
    let mut changed = 0;
    for (before, after) in prev.squares().iter().zip(next.squares()) {
        if before == after {
            continue;
        }
        if *before != Square::Empty {
            return false;
        }
        changed += 1;
    }
    changed == 1
}

impl Invariant<History> for SingleCellTransitionInvariant {
    fn holds(history: &History) -> bool {
        history
            .boards()
            .windows(2)
            .all(|pair| is_single_step(&pair[0], &pair[1]))
    }

    fn description() -> &'static str {
        "Each snapshot fills exactly one empty square of the previous one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Position};

    #[test]
    fn test_single_mark_is_a_step() {
        let next = Board::new().with_mark(Position::Center, Player::X);
        assert!(is_single_step(&Board::new(), &next));
    }

    #[test]
    fn test_identical_boards_are_not_a_step() {
        assert!(!is_single_step(&Board::new(), &Board::new()));
    }

    #[test]
    fn test_overwrite_is_not_a_step() {
        let prev = Board::new().with_mark(Position::Center, Player::X);
        let next = Board::new().with_mark(Position::Center, Player::O);
        assert!(!is_single_step(&prev, &next));
    }

    #[test]
    fn test_history_with_skipped_step_violates() {
        let one = Board::new().with_mark(Position::TopLeft, Player::X);
        let three = one
            .with_mark(Position::Center, Player::O)
            .with_mark(Position::TopRight, Player::X);
        let history = History::from_raw(vec![Board::new(), one, three], 2);
        assert!(!SingleCellTransitionInvariant::holds(&history));
    }
}
