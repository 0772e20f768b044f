//! Turn resolution and move enumeration.

use super::terminal::is_terminal;
use crate::{Board, Cell, Move, Player};

/// Returns the player to move, or `None` once the game is over.
///
/// X moves first, so equal mark counts (including the empty board) mean
/// X is next; otherwise O is.
pub fn to_move(board: &Board) -> Option<Player> {
    if is_terminal(board) {
        return None;
    }

    if board.count(Player::X) == board.count(Player::O) {
        Some(Player::X)
    } else {
        Some(Player::O)
    }
}

/// Returns the empty cells as candidate moves, in row-major order.
///
/// Empty on a terminal board. A full board is always terminal, so an
/// empty result on a live board cannot happen.
pub fn actions(board: &Board) -> Vec<Move> {
    if is_terminal(board) {
        return Vec::new();
    }

    Move::ALL
        .into_iter()
        .filter(|mv| board.get(*mv) == Some(Cell::Empty))
        .collect()
}
