//! Game session: history of board snapshots with a rewindable cursor.

use crate::invariants::assert_invariants;
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Mark, Square};
use crate::view::GameView;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// A single-player tic-tac-toe session with a browsable move history.
///
/// The session is the exclusive owner of its state; every other component
/// reads derived data through [`GameSession::view`]. State is three fields:
///
/// - `history`: ordered board snapshots, entry 0 always the empty board.
///   Adjacent entries differ in exactly one cell (the move played at that
///   step).
/// - `cursor`: which snapshot is current for display and play. Jumping
///   moves only the cursor; playing from a rewound cursor truncates the
///   abandoned future before appending.
/// - `newest_first`: move-list display order. Never affects `history`
///   ordering.
///
/// Whose turn it is falls out of cursor parity (X on even steps) and is
/// deliberately not stored, so it cannot drift out of sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    pub(crate) history: Vec<Board>,
    pub(crate) cursor: usize,
    pub(crate) newest_first: bool,
}

impl GameSession {
    /// Creates a new session: a single empty-board snapshot, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            cursor: 0,
            newest_first: false,
        }
    }

    /// Returns the recorded board snapshots, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Returns the current step (index into the history).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns whether the move list is displayed newest-first.
    pub fn newest_first(&self) -> bool {
        self.newest_first
    }

    /// Returns the board snapshot at the cursor.
    pub fn current_board(&self) -> &Board {
        &self.history[self.cursor]
    }

    /// Returns the mark that plays next from the current step.
    ///
    /// Derived from cursor parity: X on even steps, O on odd.
    pub fn to_move(&self) -> Mark {
        if self.cursor % 2 == 0 { Mark::X } else { Mark::O }
    }

    /// Plays the current mark at `pos`.
    ///
    /// Illegal intents are ignored without surfacing an error: nothing
    /// changes if the current snapshot already has a winner or the square
    /// is occupied. A legal move truncates any snapshots beyond the cursor
    /// (undo-then-diverge), appends the new snapshot and advances the
    /// cursor to it.
    #[instrument(skip(self), fields(step = self.cursor, to_move = %self.to_move()))]
    pub fn play_at(&mut self, pos: Position) {
        let board = self.current_board();

        if rules::winning_line(board).is_some() {
            debug!("ignoring move: game already won at this step");
            return;
        }
        if !board.is_empty(pos) {
            debug!("ignoring move: square is occupied");
            return;
        }

        let next = board.with(pos, Square::Occupied(self.to_move()));
        self.history.truncate(self.cursor + 1);
        self.history.push(next);
        self.cursor = self.history.len() - 1;

        debug!(history_len = self.history.len(), "move applied");
        assert_invariants(self);
    }

    /// Moves the cursor to a previously recorded step.
    ///
    /// History is untouched: this only changes which snapshot is current
    /// (and, by parity, whose turn it is). Out-of-range steps are rejected
    /// as no-ops rather than clamped.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) {
        if step >= self.history.len() {
            warn!(
                step,
                history_len = self.history.len(),
                "ignoring jump: step out of range"
            );
            return;
        }

        self.cursor = step;
        assert_invariants(self);
    }

    /// Flips the move-list display order. No other state changes.
    #[instrument(skip(self))]
    pub fn toggle_order(&mut self) {
        self.newest_first = !self.newest_first;
    }

    /// Derives the per-render view data for the presentation layer.
    ///
    /// Always computed fresh from the current state; nothing is cached.
    pub fn view(&self) -> GameView {
        GameView::derive(self)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_defaults() {
        let session = GameSession::new();
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.current_board(), &Board::new());
        assert_eq!(session.cursor(), 0);
        assert!(!session.newest_first());
        assert_eq!(session.to_move(), Mark::X);
    }

    #[test]
    fn test_to_move_follows_cursor_parity() {
        let mut session = GameSession::new();
        session.play_at(Position::TopLeft);
        assert_eq!(session.to_move(), Mark::O);
        session.play_at(Position::Center);
        assert_eq!(session.to_move(), Mark::X);

        session.jump_to(1);
        assert_eq!(session.to_move(), Mark::O);
        session.jump_to(0);
        assert_eq!(session.to_move(), Mark::X);
    }

    #[test]
    fn test_toggle_order_only_flips_flag() {
        let mut session = GameSession::new();
        session.play_at(Position::Center);
        let history = session.history().to_vec();
        let cursor = session.cursor();

        session.toggle_order();
        assert!(session.newest_first());
        assert_eq!(session.history(), history.as_slice());
        assert_eq!(session.cursor(), cursor);

        session.toggle_order();
        assert!(!session.newest_first());
    }
}
