//! Cursor always addresses a stored snapshot.

use super::super::History;
use super::Invariant;

/// Invariant: `cursor < len`.
pub struct CursorInBoundsInvariant;

impl Invariant<History> for CursorInBoundsInvariant {
    fn holds(history: &History) -> bool {
        history.cursor() < history.len()
    }

    fn description() -> &'static str {
        "Cursor points at a stored snapshot"
    }
}
