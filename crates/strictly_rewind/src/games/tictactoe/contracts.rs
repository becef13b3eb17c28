//! Contract-based validation for cell clicks.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::MoveError;
use super::invariants::{InvariantSet, HistoryInvariants};
use super::phases::GamePhase;
use super::{History, Position};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Click Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The snapshot at the cursor must not be decided.
pub struct GameUndecided;

impl GameUndecided {
    /// Fails with [`MoveError::GameOver`] on a won or drawn snapshot.
    #[instrument(skip(history), fields(cursor = history.cursor()))]
    pub fn check(history: &History) -> Result<(), MoveError> {
        if GamePhase::of(history.current_board()).is_decided() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: The clicked square must be empty at the cursor.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with [`MoveError::SquareOccupied`] when the square is taken.
    #[instrument(skip(history))]
    pub fn check(position: Position, history: &History) -> Result<(), MoveError> {
        if history.current_board().is_empty(position) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(position))
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Cell Click Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for a click on a board cell.
///
/// Preconditions:
/// - Game at the cursor is undecided
/// - Square is empty
///
/// Postconditions:
/// - Recording from cursor `c` leaves length `c + 2` and cursor `c + 1`
/// - All history invariants hold
pub struct CellClickContract;

impl Contract<History, Position> for CellClickContract {
    fn pre(history: &History, position: &Position) -> Result<(), MoveError> {
        GameUndecided::check(history)?;
        SquareIsEmpty::check(*position, history)?;
        Ok(())
    }

    fn post(before: &History, after: &History) -> Result<(), MoveError> {
        let expected_cursor = before.cursor() + 1;
        if after.cursor() != expected_cursor || after.len() != expected_cursor + 1 {
            warn!(
                before_cursor = before.cursor(),
                after_cursor = after.cursor(),
                after_len = after.len(),
                "Record did not truncate and advance"
            );
            return Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: expected cursor {} and length {}, found {} and {}",
                expected_cursor,
                expected_cursor + 1,
                after.cursor(),
                after.len()
            )));
        }

        HistoryInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "History invariants violated");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
