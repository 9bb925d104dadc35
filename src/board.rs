//! Core domain types: players, squares, and the immutable board value.

use crate::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first, maximizes).
    X,
    /// Player O (goes second, minimizes).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// Error returned when a move targets an occupied square.
///
/// Always a caller bug: `legal_moves` never yields such a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("square {_0} is already occupied")]
pub struct MoveError(pub Position);

impl std::error::Error for MoveError {}

/// 3x3 tic-tac-toe board.
///
/// An immutable value: [`Board::place`] returns a new board rather than
/// mutating in place. On boards reachable from [`Board::new`] by legal
/// play, the X count equals the O count or exceeds it by exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Creates a board directly from squares, in row-major order.
    ///
    /// Turn derivation and search assume the squares describe a position
    /// reachable by alternating legal play; that is on the caller.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if the square at the given position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns the player whose turn it is.
    ///
    /// X moves first, so X is to move exactly when an even number of
    /// marks have been placed. Only meaningful on reachable boards.
    pub fn to_move(&self) -> Player {
        let marks = self
            .squares
            .iter()
            .filter(|s| **s != Square::Empty)
            .count();
        if marks % 2 == 0 { Player::X } else { Player::O }
    }

    /// Returns every position whose square is empty.
    ///
    /// Cardinality equals the empty-square count; empty on a full board.
    /// Each returned position is a legal move for [`Board::place`].
    pub fn legal_moves(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Applies a move for the player to move, returning the new board.
    ///
    /// The input board is unchanged; exactly one square differs in the
    /// result, from empty to [`Board::to_move`]'s mark.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] if the target square is already occupied.
    #[instrument(skip(self), fields(player = ?self.to_move()))]
    pub fn place(&self, pos: Position) -> Result<Board, MoveError> {
        if !self.is_empty(pos) {
            return Err(MoveError(pos));
        }
        Ok(self.stamped(pos))
    }

    /// Stamps the mover's mark without the occupancy check.
    ///
    /// Callers must pass a position obtained from [`Board::legal_moves`]
    /// on this same board.
    pub(crate) fn stamped(&self, pos: Position) -> Board {
        debug_assert!(self.is_empty(pos));
        let mut squares = self.squares;
        squares[pos.to_index()] = Square::Occupied(self.to_move());
        Self { squares }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let symbol = match self.squares[row * 3 + col] {
                    Square::Empty => '.',
                    Square::Occupied(Player::X) => 'X',
                    Square::Occupied(Player::O) => 'O',
                };
                f.write_str(if col > 0 { "|" } else { "" })?;
                write!(f, "{}", symbol)?;
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
