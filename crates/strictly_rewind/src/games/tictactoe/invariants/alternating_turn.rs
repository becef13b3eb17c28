//! Alternating turn invariant: X and O take turns, X first.

use super::super::{History, Player, Square};
use super::Invariant;

/// Invariant: the mark added by step `i` belongs to the player whose turn
/// parity implies after `i - 1` moves.
pub struct AlternatingTurnInvariant;

impl Invariant<History> for AlternatingTurnInvariant {
    fn holds(history: &History) -> bool {
        history.boards().windows(2).enumerate().all(|(moves_before, pair)| {
            let expected = Square::Occupied(Player::to_move_after(moves_before));
            pair[0]
                .squares()
                .iter()
                .zip(pair[1].squares())
                .filter(|(before, after)| before != after)
                .all(|(_, after)| *after == expected)
        })
    }

    fn description() -> &'static str {
        "Players alternate turns, X first"
    }
}
