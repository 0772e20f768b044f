//! Move application.

use super::turn::to_move;
use crate::contracts::{Contract, MoveContract};
use crate::{Board, Cell, InvalidMove, Move};
use tracing::instrument;

/// Returns the board that results from the player to move marking `mv`.
///
/// The input board is never modified.
///
/// # Errors
///
/// Returns [`InvalidMove`] if `mv` is off the board, the board is
/// already terminal, or the target cell is occupied.
#[instrument(level = "trace", skip(board))]
pub fn result(board: &Board, mv: Move) -> Result<Board, InvalidMove> {
    MoveContract::pre(board, &mv)?;

    let player = to_move(board).ok_or(InvalidMove::GameOver)?;
    let next = board.with_cell(mv, Cell::Occupied(player));

    #[cfg(debug_assertions)]
    if let Err(violations) = MoveContract::post(board, &mv, &next) {
        tracing::warn!(?violations, "Move postcondition failed");
        panic!("move postcondition failed: {violations:?}");
    }

    Ok(next)
}

/// Every legal move paired with the board it produces, in row-major order.
///
/// Yields nothing on a terminal board. This is the unchecked fast path
/// the search walks: each target is empty by construction.
pub fn successors(board: &Board) -> impl Iterator<Item = (Move, Board)> + '_ {
    let mover = to_move(board);
    Move::ALL.into_iter().filter_map(move |mv| {
        let player = mover?;
        (board.get(mv) == Some(Cell::Empty))
            .then(|| (mv, board.with_cell(mv, Cell::Occupied(player))))
    })
}
