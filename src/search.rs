//! Exhaustive minimax search over the game tree.

use crate::board::{Board, Player};
use crate::position::Position;
use crate::rules;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Result of searching a position: the chosen move and its value.
///
/// `best` is `None` exactly when the position is terminal. `value` is
/// the game-theoretic value under optimal play by both sides: +1 an X
/// win, -1 an O win, 0 a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The move achieving `value`, or `None` at terminal positions.
    pub best: Option<Position>,
    /// Outcome value under optimal play from here.
    pub value: i8,
}

/// Computes the minimax value of a position and a move that achieves it.
///
/// X picks the child of maximum value, O the minimum. Recursion depth is
/// bounded by the nine squares, and every branch owns its own board
/// snapshot, so sibling subtrees never interfere. When several moves
/// share the extremal value the first one found is kept; only the value
/// is part of the contract.
pub fn minimax(board: &Board) -> SearchResult {
    if rules::is_terminal(board) {
        return SearchResult {
            best: None,
            value: rules::utility(board),
        };
    }

    let maximizing = board.to_move() == Player::X;
    let mut best: Option<(Position, i8)> = None;

    for pos in board.legal_moves() {
        let child = board.stamped(pos);
        let value = minimax(&child).value;
        let better = match best {
            None => true,
            Some((_, incumbent)) => {
                if maximizing {
                    value > incumbent
                } else {
                    value < incumbent
                }
            }
        };
        if better {
            best = Some((pos, value));
        }
    }

    match best {
        Some((pos, value)) => SearchResult {
            best: Some(pos),
            value,
        },
        // Unreachable: a non-terminal board has at least one legal move.
        None => SearchResult {
            best: None,
            value: rules::utility(board),
        },
    }
}

/// Returns the optimal move for the player to move, or `None` if the
/// game is already over.
#[instrument(skip(board), fields(player = ?board.to_move()))]
pub fn best_move(board: &Board) -> Option<Position> {
    if rules::is_terminal(board) {
        return None;
    }
    let result = minimax(board);
    debug!(best = ?result.best, value = result.value, "search complete");
    result.best
}
