//! Per-render view data derived from a game session.

use crate::rules;
use crate::rules::win::Line;
use crate::session::GameSession;
use crate::types::{Board, Mark};
use serde::{Deserialize, Serialize};

/// Status of the game at the current step.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display,
)]
pub enum Status {
    /// A winning line exists on the current board.
    #[display("Winner: {_0}")]
    Winner(Mark),
    /// The current board is full with no winner.
    #[display("Draw")]
    Draw,
    /// The game continues; this mark plays next.
    #[display("Next player: {_0}")]
    NextPlayer(Mark),
}

/// One entry in the move-history list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// The history step this entry jumps to.
    pub step: usize,
    /// Human-readable description of the step.
    pub label: String,
    /// Whether this entry is the session's current step.
    pub is_current: bool,
}

/// Everything a presentation layer needs for one render.
///
/// Derived fresh from the session on every call; holds no state of its own
/// and never feeds anything back into the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// The board snapshot at the current step.
    pub board: Board,
    /// The winning line on that board, if any (for cell highlighting).
    pub winning_line: Option<Line>,
    /// The mark holding the winning line, if any.
    pub winner: Option<Mark>,
    /// Status line for display.
    pub status: Status,
    /// Move-list entries in the requested display order.
    pub moves: Vec<MoveEntry>,
}

impl GameView {
    /// Derives the view from the session's current state.
    pub(crate) fn derive(session: &GameSession) -> Self {
        let history = session.history();
        let board = session.current_board().clone();

        let winning_line = rules::winning_line(&board);
        let winner = rules::winner(&board);

        // Winner takes precedence over a full board.
        let status = match winner {
            Some(mark) => Status::Winner(mark),
            None if board.is_full() => Status::Draw,
            None => Status::NextPlayer(session.to_move()),
        };

        let mut moves: Vec<MoveEntry> = history
            .iter()
            .enumerate()
            .map(|(step, snapshot)| MoveEntry {
                step,
                label: describe_step(step, snapshot, history),
                is_current: step == session.cursor(),
            })
            .collect();

        // Display order only; the underlying history stays oldest-first.
        if session.newest_first() {
            moves.reverse();
        }

        Self {
            board,
            winning_line,
            winner,
            status,
            moves,
        }
    }
}

/// Labels one history step for the move list.
///
/// Step 0 is the game start; every later step is described by the one cell
/// in which it differs from its predecessor.
fn describe_step(step: usize, snapshot: &Board, history: &[Board]) -> String {
    if step == 0 {
        return "Go to start of game".to_string();
    }

    match snapshot.diff(&history[step - 1]) {
        Some(pos) => format!("Go to move #{}: {}", step, pos.label()),
        // Unreachable for a well-formed history; degrade rather than panic.
        None => format!("Go to move #{}", step),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_strings() {
        assert_eq!(Status::Winner(Mark::X).to_string(), "Winner: X");
        assert_eq!(Status::Draw.to_string(), "Draw");
        assert_eq!(Status::NextPlayer(Mark::O).to_string(), "Next player: O");
    }

    #[test]
    fn test_start_label() {
        let session = GameSession::new();
        let view = session.view();
        assert_eq!(view.moves.len(), 1);
        assert_eq!(view.moves[0].label, "Go to start of game");
        assert!(view.moves[0].is_current);
    }
}
