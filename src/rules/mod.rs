//! Game rules: winner detection, terminal detection, and scoring.
//!
//! Pure functions over [`Board`] values. Rules are separated from board
//! storage so the search engine can compose them without touching board
//! internals.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::check_winner;

use crate::board::{Board, Player};
use serde::{Deserialize, Serialize};

/// Current status of a game position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

/// Returns the status of the position.
pub fn status(board: &Board) -> Status {
    match check_winner(board) {
        Some(player) => Status::Won(player),
        None if board.is_full() => Status::Draw,
        None => Status::InProgress,
    }
}

/// Checks if the game is over: a line is complete or the board is full.
pub fn is_terminal(board: &Board) -> bool {
    status(board) != Status::InProgress
}

/// Returns the outcome value of a terminal board.
///
/// +1 if X has won, -1 if O has won, 0 otherwise. Meaningful only when
/// [`is_terminal`] holds; on an in-progress board the 0 it returns says
/// nothing about the position.
pub fn utility(board: &Board) -> i8 {
    match check_winner(board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}
