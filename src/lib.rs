//! Exhaustive minimax solver for 3x3 tic-tac-toe.
//!
//! Boards are immutable values: applying a move produces a new board and
//! never touches the input, so the recursive search walks the game tree
//! without any shared mutable state.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid of squares with turn derivation and move application
//! - **Position**: the nine cells, addressable by (row, col) or index
//! - **Rules**: winner detection, terminal detection, and scoring
//! - **Search**: exhaustive minimax and the `best_move` query
//!
//! # Example
//!
//! ```
//! use tictactoe_solver::{best_move, minimax, Board};
//!
//! let board = Board::new();
//! // Perfect play from the empty board is a draw.
//! assert_eq!(minimax(&board).value, 0);
//! assert!(best_move(&board).is_some());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod position;
mod rules;
mod search;

// Crate-level exports - Board types
pub use board::{Board, MoveError, Player, Square};

// Crate-level exports - Positions
pub use position::Position;

// Crate-level exports - Rules
pub use rules::{check_winner, is_draw, is_full, is_terminal, status, utility, Status};

// Crate-level exports - Search
pub use search::{best_move, minimax, SearchResult};
