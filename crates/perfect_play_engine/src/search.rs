//! Exhaustive minimax search.
//!
//! Values are from X's point of view: `1` X wins, `-1` O wins, `0` draw.
//! X maximizes, O minimizes. The game tree is small enough to search
//! completely; the only pruning is a cutoff once a branch reaches the best
//! value the mover can possibly get.

use crate::rules::terminal::{O_WINS, X_WINS};
use crate::rules::{is_terminal, successors, to_move, utility};
use crate::{Board, Move, Player};
use tracing::{debug, instrument};

/// Returns the optimal move for the player to move, or `None` on a
/// terminal board.
///
/// Ties go to the earliest move in row-major order. An empty board
/// always answers `(0, 0)`: every opening is equally good.
#[instrument(skip(board), fields(board = %board.display()))]
pub fn minimax(board: &Board) -> Option<Move> {
    let player = to_move(board)?;

    if board.is_empty_board() {
        debug!("Empty board, opening in the corner");
        return Some(Move::new(0, 0));
    }

    let best = match player {
        Player::X => best_reply(board, min_value, |value, best| value > best, X_WINS),
        Player::O => best_reply(board, max_value, |value, best| value < best, O_WINS),
    };

    if let Some((mv, value)) = best {
        debug!(%player, %mv, value, "Search chose move");
    }
    best.map(|(mv, _)| mv)
}

/// Scans the mover's options in order, keeping the first strictly better
/// one and stopping as soon as `target` is reached.
fn best_reply(
    board: &Board,
    reply: fn(&Board) -> i8,
    better: fn(i8, i8) -> bool,
    target: i8,
) -> Option<(Move, i8)> {
    let mut best: Option<(Move, i8)> = None;

    for (mv, child) in successors(board) {
        let value = reply(&child);
        if best.is_none_or(|(_, current)| better(value, current)) {
            best = Some((mv, value));
        }
        if value == target {
            break;
        }
    }

    best
}

/// Value of `board` with X to move and both sides playing perfectly.
pub fn max_value(board: &Board) -> i8 {
    if is_terminal(board) {
        return utility(board);
    }

    let mut value = i8::MIN;
    for (_, child) in successors(board) {
        value = value.max(min_value(&child));
        if value == X_WINS {
            return X_WINS;
        }
    }
    value
}

/// Value of `board` with O to move and both sides playing perfectly.
pub fn min_value(board: &Board) -> i8 {
    if is_terminal(board) {
        return utility(board);
    }

    let mut value = i8::MAX;
    for (_, child) in successors(board) {
        value = value.min(max_value(&child));
        if value == O_WINS {
            return O_WINS;
        }
    }
    value
}

/// Game-theoretic value of any board: its utility when finished,
/// otherwise the value the player to move can force.
pub fn evaluate(board: &Board) -> i8 {
    match to_move(board) {
        None => utility(board),
        Some(Player::X) => max_value(board),
        Some(Player::O) => min_value(board),
    }
}
