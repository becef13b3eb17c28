//! Linear move history with a cursor.
//!
//! History is an ordered list of board snapshots starting from the empty
//! board. The cursor selects the snapshot that is displayed and played from.
//! Recording a move from anywhere but the last snapshot discards the
//! snapshots after the cursor, so history never branches.

use super::invariants::{HistoryInvariants, InvariantSet};
use super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Error returned when a jump targets a snapshot that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum JumpError {
    /// Requested index is past the end of history.
    #[display("Cannot jump to move {}: history has {} entries", index, len)]
    OutOfRange {
        /// Requested index.
        index: usize,
        /// History length at the time of the request.
        len: usize,
    },
}

impl std::error::Error for JumpError {}

/// Error returned when stored snapshots do not form a reachable history.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Inconsistent history: {}", violations.join("; "))]
pub struct HistoryError {
    /// Descriptions of the violated invariants.
    pub violations: Vec<String>,
}

impl std::error::Error for HistoryError {}

/// Ordered board snapshots plus the active cursor.
///
/// Deserialization re-checks every history invariant, so a loaded history
/// is as consistent as one built through [`History::record`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredHistory")]
pub struct History {
    boards: Vec<Board>,
    cursor: usize,
}

/// Unchecked wire form of [`History`].
#[derive(Deserialize)]
struct StoredHistory {
    boards: Vec<Board>,
    cursor: usize,
}

impl TryFrom<StoredHistory> for History {
    type Error = HistoryError;

    fn try_from(stored: StoredHistory) -> Result<Self, Self::Error> {
        let history = Self {
            boards: stored.boards,
            cursor: stored.cursor,
        };
        HistoryInvariants::check_all(&history).map_err(|violations| {
            let violations: Vec<String> =
                violations.into_iter().map(|v| v.description).collect();
            warn!(?violations, "Rejected stored history");
            HistoryError { violations }
        })?;
        Ok(history)
    }
}

impl History {
    /// Creates a history holding only the empty starting board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            boards: vec![Board::new()],
            cursor: 0,
        }
    }

    /// Appends `board` after the cursor, discarding any later snapshots.
    ///
    /// Afterwards the cursor points at `board`, so from cursor `c` the
    /// history length becomes `c + 2` and the cursor `c + 1`.
    #[instrument(skip(self, board), fields(cursor = self.cursor, len = self.boards.len()))]
    pub fn record(&mut self, board: Board) {
        let discarded = self.boards.len() - (self.cursor + 1);
        self.boards.truncate(self.cursor + 1);
        self.boards.push(board);
        self.cursor = self.boards.len() - 1;
        debug!(discarded, cursor = self.cursor, "Recorded snapshot");
    }

    /// Moves the cursor to `index` without touching the stored snapshots.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError::OutOfRange`] if `index` is not a valid snapshot
    /// index; the cursor is left where it was.
    #[instrument(skip(self), fields(len = self.boards.len()))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), JumpError> {
        if index >= self.boards.len() {
            return Err(JumpError::OutOfRange {
                index,
                len: self.boards.len(),
            });
        }
        self.cursor = index;
        Ok(())
    }

    /// Builds a history verbatim, bypassing `record`. Used to corrupt state in tests.
    #[cfg(test)]
    pub(crate) fn from_raw(boards: Vec<Board>, cursor: usize) -> Self {
        Self { boards, cursor }
    }

    /// Drops every snapshot except the empty starting board.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.boards = vec![Board::new()];
        self.cursor = 0;
    }

    /// The snapshot at the cursor.
    pub fn current_board(&self) -> &Board {
        &self.boards[self.cursor]
    }

    /// The snapshot at `index`, if it exists.
    pub fn board_at(&self, index: usize) -> Option<&Board> {
        self.boards.get(index)
    }

    /// All snapshots, oldest first. List index doubles as a jump target.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Index of the active snapshot.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Moves played to reach the active snapshot (equal to the cursor).
    pub fn move_count(&self) -> usize {
        self.cursor
    }

    /// Player whose turn it is at the cursor.
    pub fn to_move(&self) -> Player {
        Player::to_move_after(self.cursor)
    }

    /// Number of stored snapshots (never zero).
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Always false: the starting board is never removed.
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
