//! Tests for history navigation: jumps, truncation, divergence.

use rewind_tictactoe::invariants::{InvariantSet, SessionInvariants};
use rewind_tictactoe::{Board, GameSession, Mark, Position, Square};

fn session_with_moves(positions: &[Position]) -> GameSession {
    let mut session = GameSession::new();
    for &pos in positions {
        session.play_at(pos);
    }
    session
}

#[test]
fn test_jump_moves_cursor_only() {
    let mut session = session_with_moves(&[
        Position::Center,
        Position::TopLeft,
        Position::BottomRight,
    ]);
    let history = session.history().to_vec();

    session.jump_to(1);

    assert_eq!(session.cursor(), 1);
    assert_eq!(session.to_move(), Mark::O);
    assert_eq!(session.history(), history.as_slice());
    assert_eq!(session.current_board(), &history[1]);
}

#[test]
fn test_jump_parity_sets_turn_owner() {
    let mut session = session_with_moves(&[
        Position::Center,
        Position::TopLeft,
        Position::BottomRight,
    ]);

    for step in 0..session.history().len() {
        session.jump_to(step);
        let expected = if step % 2 == 0 { Mark::X } else { Mark::O };
        assert_eq!(session.to_move(), expected, "step {step}");
    }
}

#[test]
fn test_out_of_range_jump_is_ignored() {
    let mut session = session_with_moves(&[Position::Center]);
    let before = session.clone();

    session.jump_to(2);
    assert_eq!(session, before);

    session.jump_to(usize::MAX);
    assert_eq!(session, before);
}

#[test]
fn test_play_after_rewind_truncates_future() {
    let mut session = session_with_moves(&[
        Position::Center,      // X, step 1
        Position::TopLeft,     // O, step 2
        Position::BottomRight, // X, step 3
        Position::TopRight,    // O, step 4
    ]);
    assert_eq!(session.history().len(), 5);
    let abandoned = session.history()[2..].to_vec();

    session.jump_to(1);
    session.play_at(Position::MiddleLeft); // O diverges from step 1

    // Steps 2..4 are gone; the new branch is two entries shorter.
    assert_eq!(session.history().len(), 3);
    assert_eq!(session.cursor(), 2);
    for old in &abandoned {
        assert!(!session.history().contains(old));
    }

    let board = session.current_board();
    assert_eq!(board.get(Position::Center), Square::Occupied(Mark::X));
    assert_eq!(board.get(Position::MiddleLeft), Square::Occupied(Mark::O));
    assert!(board.is_empty(Position::TopLeft));
    assert!(board.is_empty(Position::BottomRight));
}

#[test]
fn test_diverge_from_start() {
    let mut session = session_with_moves(&[
        Position::Center,
        Position::TopLeft,
        Position::BottomRight,
    ]);

    session.jump_to(0);
    session.toggle_order();
    session.play_at(Position::TopRight);

    // The branch is rooted at the empty board; earlier moves are gone.
    assert_eq!(session.history().len(), 2);
    assert_eq!(session.history()[0], Board::new());
    assert_eq!(
        session.current_board().get(Position::TopRight),
        Square::Occupied(Mark::X)
    );
    assert!(session.current_board().is_empty(Position::Center));
    assert!(session.newest_first());
}

#[test]
fn test_jump_away_from_finished_game_reopens_play() {
    // X wins the left column, then the user rewinds one step and X tries
    // a different final move.
    let mut session = session_with_moves(&[
        Position::TopLeft,
        Position::TopCenter,
        Position::MiddleLeft,
        Position::Center,
        Position::BottomLeft,
    ]);

    // Play at the won step is dead ...
    let before = session.clone();
    session.play_at(Position::BottomRight);
    assert_eq!(session, before);

    // ... but an earlier step is live again.
    session.jump_to(4);
    session.play_at(Position::BottomRight); // X plays 8 instead of 6

    assert_eq!(session.history().len(), 6);
    assert_eq!(
        session.current_board().get(Position::BottomRight),
        Square::Occupied(Mark::X)
    );
    assert!(session.current_board().is_empty(Position::BottomLeft));
}

#[test]
fn test_invariants_hold_through_navigation() {
    let mut session = session_with_moves(&[
        Position::Center,
        Position::TopLeft,
        Position::BottomRight,
        Position::TopRight,
    ]);

    session.jump_to(2);
    session.play_at(Position::MiddleLeft);
    session.jump_to(0);
    session.toggle_order();
    session.play_at(Position::BottomCenter);

    assert!(SessionInvariants::check_all(&session).is_ok());
}
