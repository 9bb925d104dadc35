//! Draw detection logic.

use super::win::check_winner;
use crate::board::Board;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// Checks if the game is drawn: full board with no winner.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Player, Square};

    // X O X / O X X / O X O - drawn position
    fn drawn_board() -> Board {
        use Player::{O, X};
        Board::from_squares(
            [X, O, X, O, X, X, O, X, O].map(Square::Occupied),
        )
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::new()
            .place(crate::Position::Center)
            .expect("center is empty");
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        assert!(is_full(&drawn_board()));
        assert!(is_draw(&drawn_board()));
    }

    #[test]
    fn test_not_draw_if_winner() {
        use Player::{O, X};
        // X wins the top row on a full board
        let board = Board::from_squares(
            [X, X, X, O, O, X, O, X, O].map(Square::Occupied),
        );
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
