//! Error types for move application.

use crate::action::Move;
use derive_more::Display;

/// A move that cannot be applied to a board.
///
/// This is the only failure the engine reports. Front ends should
/// re-prompt and keep their current board.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InvalidMove {
    /// The coordinates are not on the 3x3 board.
    #[display("Position ({}, {}) is off the board", row, col)]
    OutOfRange {
        /// Requested row.
        row: i64,
        /// Requested column.
        col: i64,
    },

    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(Move),

    /// The board is terminal, so no move is legal.
    #[display("Game is already over")]
    GameOver,
}

impl InvalidMove {
    /// Builds the out-of-range error for an unsigned move.
    pub(crate) fn out_of_range(mv: Move) -> Self {
        Self::OutOfRange {
            row: i64::try_from(mv.row).unwrap_or(i64::MAX),
            col: i64::try_from(mv.col).unwrap_or(i64::MAX),
        }
    }
}

impl std::error::Error for InvalidMove {}
