//! Board positions for tic-tac-toe moves.

use serde::{Deserialize, Serialize};

/// A position on the tic-tac-toe board (0-8, row-major).
///
/// Positions are a closed enum, so a cell index outside the board cannot
/// reach the session: conversion from a raw index happens at the boundary
/// via [`Position::from_index`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Position::TopLeft),
            1 => Some(Position::TopCenter),
            2 => Some(Position::TopRight),
            3 => Some(Position::MiddleLeft),
            4 => Some(Position::Center),
            5 => Some(Position::MiddleRight),
            6 => Some(Position::BottomLeft),
            7 => Some(Position::BottomCenter),
            8 => Some(Position::BottomRight),
            _ => None,
        }
    }

    /// 1-based row of this position.
    pub fn row(self) -> usize {
        self.to_index() / 3 + 1
    }

    /// 1-based column of this position.
    pub fn col(self) -> usize {
        self.to_index() % 3 + 1
    }

    /// Human-readable location label, used in move descriptions.
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "row 1, col 1",
            Position::TopCenter => "row 1, col 2",
            Position::TopRight => "row 1, col 3",
            Position::MiddleLeft => "row 2, col 1",
            Position::Center => "row 2, col 2",
            Position::MiddleRight => "row 2, col 3",
            Position::BottomLeft => "row 3, col 1",
            Position::BottomCenter => "row 3, col 2",
            Position::BottomRight => "row 3, col 3",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_index_round_trip() {
        for (i, pos) in Position::ALL.into_iter().enumerate() {
            assert_eq!(pos.to_index(), i);
            assert_eq!(Position::from_index(i), Some(pos));
        }
    }

    #[test]
    fn test_from_index_rejects_out_of_range() {
        assert_eq!(Position::from_index(9), None);
        assert_eq!(Position::from_index(usize::MAX), None);
    }

    #[test]
    fn test_row_col() {
        assert_eq!(Position::TopLeft.row(), 1);
        assert_eq!(Position::TopLeft.col(), 1);
        assert_eq!(Position::MiddleRight.row(), 2);
        assert_eq!(Position::MiddleRight.col(), 3);
        assert_eq!(Position::BottomCenter.row(), 3);
        assert_eq!(Position::BottomCenter.col(), 2);
    }

    #[test]
    fn test_label_matches_row_col() {
        for pos in Position::iter() {
            assert_eq!(
                pos.label(),
                format!("row {}, col {}", pos.row(), pos.col())
            );
        }
    }

    #[test]
    fn test_iter_covers_all() {
        assert_eq!(Position::iter().count(), Position::ALL.len());
    }
}
