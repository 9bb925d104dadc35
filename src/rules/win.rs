//! Win detection logic.

use crate::board::{Board, Player, Square};
use crate::position::Position;
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Scans the eight winning lines (3 rows, 3 columns, 2 diagonals) and
/// returns `Some(player)` if one of them holds three of that player's
/// marks. On reachable boards at most one player can have a completed
/// line; on corrupted input whichever line is scanned first wins.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    const LINES: [[Position; 3]; 8] = [
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

    for [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return match sq {
                Square::Occupied(player) => Some(player),
                Square::Empty => None,
            };
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut squares = [Square::Empty; 9];
        for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
            squares[pos.to_index()] = Square::Occupied(Player::X);
        }
        assert_eq!(check_winner(&Board::from_squares(squares)), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        let mut squares = [Square::Empty; 9];
        for pos in [
            Position::TopCenter,
            Position::Center,
            Position::BottomCenter,
        ] {
            squares[pos.to_index()] = Square::Occupied(Player::O);
        }
        assert_eq!(check_winner(&Board::from_squares(squares)), Some(Player::O));
    }

    #[test]
    fn test_winner_diagonal() {
        let mut squares = [Square::Empty; 9];
        for pos in [Position::TopRight, Position::Center, Position::BottomLeft] {
            squares[pos.to_index()] = Square::Occupied(Player::O);
        }
        assert_eq!(check_winner(&Board::from_squares(squares)), Some(Player::O));
    }

    #[test]
    fn test_no_winner_incomplete_line() {
        let mut squares = [Square::Empty; 9];
        squares[Position::TopLeft.to_index()] = Square::Occupied(Player::X);
        squares[Position::TopCenter.to_index()] = Square::Occupied(Player::X);
        assert_eq!(check_winner(&Board::from_squares(squares)), None);
    }
}
