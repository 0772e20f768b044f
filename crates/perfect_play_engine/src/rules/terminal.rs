//! Terminal detection and scoring.

use super::win::winner;
use crate::{Board, Cell, Outcome, Player};

/// Score of a won game for X.
pub const X_WINS: i8 = 1;
/// Score of a won game for O.
pub const O_WINS: i8 = -1;
/// Score of a drawn game.
pub const DRAW: i8 = 0;

/// Checks if the board is full (all cells occupied).
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

/// Returns true iff the game is over: a line is complete or no empty
/// cell remains.
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}

/// Scores a finished board: `1` if X won, `-1` if O won, `0` otherwise.
///
/// The board must be terminal; callers check [`is_terminal`] first. Debug
/// builds assert it.
pub fn utility(board: &Board) -> i8 {
    debug_assert!(is_terminal(board), "utility of a board still in play:\n{board}");
    match winner(board) {
        Some(Player::X) => X_WINS,
        Some(Player::O) => O_WINS,
        None => DRAW,
    }
}

/// Derives the status of a board.
pub fn outcome(board: &Board) -> Outcome {
    if let Some(player) = winner(board) {
        Outcome::Won(player)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
