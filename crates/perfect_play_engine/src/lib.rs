//! Perfect-play tic-tac-toe engine.
//!
//! Pure, synchronous functions over immutable [`Board`] values:
//!
//! - **Queries**: [`to_move`], [`actions`], [`winner`], [`is_terminal`],
//!   [`utility`], [`outcome`]
//! - **Move application**: [`result`] returns a new board or
//!   [`InvalidMove`]
//! - **Search**: [`minimax`] returns the optimal move for the player to
//!   move
//!
//! # Example
//!
//! ```
//! use perfect_play_engine::{Board, Move, Outcome, is_terminal, minimax, outcome, result};
//!
//! let mut board = Board::new();
//! while !is_terminal(&board) {
//!     let mv = minimax(&board).expect("live board has a move");
//!     board = result(&board, mv)?;
//! }
//! assert_eq!(outcome(&board), Outcome::Draw);
//!
//! assert!(result(&board, Move::new(0, 0)).is_err());
//! # Ok::<(), perfect_play_engine::InvalidMove>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod error;
mod game;
mod invariants;
mod search;
mod types;

pub mod rules;

pub use action::Move;
pub use contracts::{CellIsEmpty, Contract, GameNotOver, InBounds, LegalMove, MoveContract};
pub use error::InvalidMove;
pub use game::Game;
pub use invariants::{
    BoardInvariants, Invariant, InvariantSet, InvariantViolation, MarkBalanceInvariant,
    SingleWinnerInvariant,
};
pub use rules::{
    LINES, actions, is_full, is_terminal, outcome, result, successors, to_move, utility, winner,
};
pub use search::{evaluate, max_value, min_value, minimax};
pub use types::{Board, BoardParseError, Cell, Outcome, Player};
