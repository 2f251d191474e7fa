//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Mark, Square};
use tracing::instrument;

/// A winning line: three positions holding the same non-empty mark.
pub type Line = [Position; 3];

/// The 8 fixed lines: 3 rows, 3 columns, 2 diagonals.
///
/// Enumeration order is part of the contract: when several lines are
/// complete at once, [`winning_line`] returns the first one here.
const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Finds the winning line on the board, if any.
///
/// Returns the first line (in the fixed enumeration order) whose three
/// squares hold the same non-empty mark, `None` otherwise. Pure and total:
/// defined for every board, including unreachable ones.
#[instrument]
pub fn winning_line(board: &Board) -> Option<Line> {
    for line in LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return Some(line);
        }
    }

    None
}

/// Checks if there is a winner on the board.
///
/// Returns the mark holding the winning line, `None` otherwise.
#[instrument]
pub fn winner(board: &Board) -> Option<Mark> {
    winning_line(board).and_then(|[a, _, _]| match board.get(a) {
        Square::Occupied(mark) => Some(mark),
        Square::Empty => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occupy(board: &mut Board, mark: Mark, positions: &[Position]) {
        for &pos in positions {
            board.set(pos, Square::Occupied(mark));
        }
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winning_line(&board), None);
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_each_line_detected() {
        for expected in LINES {
            let mut board = Board::new();
            occupy(&mut board, Mark::X, &expected);
            assert_eq!(winning_line(&board), Some(expected));
            assert_eq!(winner(&board), Some(Mark::X));
        }
    }

    #[test]
    fn test_winner_second_diagonal() {
        let mut board = Board::new();
        occupy(
            &mut board,
            Mark::O,
            &[Position::TopRight, Position::Center, Position::BottomLeft],
        );
        assert_eq!(
            winning_line(&board),
            Some([Position::TopRight, Position::Center, Position::BottomLeft])
        );
        assert_eq!(winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_no_winner_incomplete_line() {
        let mut board = Board::new();
        occupy(&mut board, Mark::X, &[Position::TopLeft, Position::TopCenter]);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let mut board = Board::new();
        occupy(&mut board, Mark::X, &[Position::TopLeft, Position::TopRight]);
        occupy(&mut board, Mark::O, &[Position::TopCenter]);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_no_winner_full_draw_board() {
        // X O X / X O O / O X X
        let mut board = Board::new();
        occupy(
            &mut board,
            Mark::X,
            &[
                Position::TopLeft,
                Position::TopRight,
                Position::MiddleLeft,
                Position::BottomCenter,
                Position::BottomRight,
            ],
        );
        occupy(
            &mut board,
            Mark::O,
            &[
                Position::TopCenter,
                Position::Center,
                Position::MiddleRight,
                Position::BottomLeft,
            ],
        );
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_multiple_lines_first_in_order_wins() {
        // Both the top row and the left column are complete for X;
        // unreachable under legal play, but the tie-break is fixed.
        let mut board = Board::new();
        occupy(
            &mut board,
            Mark::X,
            &[
                Position::TopLeft,
                Position::TopCenter,
                Position::TopRight,
                Position::MiddleLeft,
                Position::BottomLeft,
            ],
        );
        assert_eq!(
            winning_line(&board),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
    }
}
