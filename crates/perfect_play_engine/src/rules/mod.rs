//! Game rules for tic-tac-toe.
//!
//! Pure functions over [`Board`](crate::Board) values. Nothing here
//! mutates its input; move application returns a fresh board.

pub mod apply;
pub mod terminal;
pub mod turn;
pub mod win;

pub use apply::{result, successors};
pub use terminal::{is_full, is_terminal, outcome, utility};
pub use turn::{actions, to_move};
pub use win::{LINES, winner};
