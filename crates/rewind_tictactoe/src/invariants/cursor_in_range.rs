//! Cursor range invariant: the cursor always addresses a real snapshot.

use super::Invariant;
use crate::session::GameSession;
use crate::types::Board;

/// Invariant: the history is well-rooted and the cursor is in bounds.
///
/// The history is never empty, its first entry is the empty board, and the
/// cursor indexes a valid entry. Every mutation path preserves this, so
/// `history[cursor]` is always a safe read.
pub struct CursorInRangeInvariant;

impl Invariant<GameSession> for CursorInRangeInvariant {
    fn holds(session: &GameSession) -> bool {
        let history = session.history();

        !history.is_empty()
            && history[0] == Board::new()
            && session.cursor() < history.len()
    }

    fn description() -> &'static str {
        "History starts with the empty board and the cursor is in bounds"
    }
}
