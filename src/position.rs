//! Position enum for the nine board cells.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the tic-tac-toe board.
///
/// Positions map to (row, col) coordinates with both in [0, 2], and to
/// row-major indices 0-8. Using an enum keeps out-of-range coordinates
/// unrepresentable in the rest of the crate.
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
    /// Top-left, (0, 0).
    TopLeft,
    /// Top-center, (0, 1).
    TopCenter,
    /// Top-right, (0, 2).
    TopRight,
    /// Middle-left, (1, 0).
    MiddleLeft,
    /// Center, (1, 1).
    Center,
    /// Middle-right, (1, 2).
    MiddleRight,
    /// Bottom-left, (2, 0).
    BottomLeft,
    /// Bottom-center, (2, 1).
    BottomCenter,
    /// Bottom-right, (2, 2).
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
        Position::ALL.get(index).copied()
    }

    /// Returns the row of this position (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Returns the column of this position (0-2).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Creates position from (row, col) coordinates.
    #[instrument]
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        if row > 2 || col > 2 {
            return None;
        }
        Self::from_index(row * 3 + col)
    }

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.label(), self.row(), self.col())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_index_round_trip() {
        for pos in Position::iter() {
            assert_eq!(Position::from_index(pos.to_index()), Some(pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_coords() {
        assert_eq!(Position::TopRight.row(), 0);
        assert_eq!(Position::TopRight.col(), 2);
        assert_eq!(Position::from_coords(2, 2), Some(Position::BottomRight));
        assert_eq!(Position::from_coords(3, 0), None);
        assert_eq!(Position::from_coords(0, 3), None);
    }

    #[test]
    fn test_all_matches_iter_order() {
        let from_iter: Vec<_> = Position::iter().collect();
        assert_eq!(from_iter, Position::ALL);
    }
}
