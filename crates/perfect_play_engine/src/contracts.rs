//! Contract-based validation for move application.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}. Preconditions are always checked and produce
//! [`InvalidMove`]; postconditions are checked in debug builds.

use crate::invariants::{BoardInvariants, InvariantSet, InvariantViolation};
use crate::rules::{is_terminal, to_move};
use crate::{Board, Cell, InvalidMove, Move};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), InvalidMove>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, action: &A, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Precondition: the move's coordinates are on the board.
pub struct InBounds;

impl InBounds {
    /// Validates the coordinates.
    pub fn check(mv: &Move) -> Result<(), InvalidMove> {
        if mv.in_range() {
            Ok(())
        } else {
            Err(InvalidMove::out_of_range(*mv))
        }
    }
}

/// Precondition: the game has not ended.
pub struct GameNotOver;

impl GameNotOver {
    /// Validates that the board is still in play.
    pub fn check(board: &Board) -> Result<(), InvalidMove> {
        if is_terminal(board) {
            Err(InvalidMove::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Validates the target cell.
    pub fn check(board: &Board, mv: &Move) -> Result<(), InvalidMove> {
        match board.get(*mv) {
            Some(Cell::Empty) => Ok(()),
            Some(Cell::Occupied(_)) => Err(InvalidMove::Occupied(*mv)),
            None => Err(InvalidMove::out_of_range(*mv)),
        }
    }
}

/// Composite precondition: a move is legal if it is on the board, the game
/// is live and the cell is empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    pub fn check(board: &Board, mv: &Move) -> Result<(), InvalidMove> {
        InBounds::check(mv)?;
        GameNotOver::check(board)?;
        CellIsEmpty::check(board, mv)?;
        Ok(())
    }
}

/// Contract for move application.
///
/// Postconditions:
/// - only the target cell changed
/// - the target went from empty to the mark of the player to move
/// - board invariants still hold
pub struct MoveContract;

impl Contract<Board, Move> for MoveContract {
    fn pre(board: &Board, mv: &Move) -> Result<(), InvalidMove> {
        LegalMove::check(board, mv)
    }

    fn post(before: &Board, mv: &Move, after: &Board) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        let others_unchanged = Move::ALL
            .into_iter()
            .filter(|cell| cell != mv)
            .all(|cell| before.get(cell) == after.get(cell));
        if !others_unchanged {
            violations.push(InvariantViolation::new("Only the target cell changes"));
        }

        let expected = to_move(before).map(Cell::Occupied);
        if before.get(*mv) != Some(Cell::Empty) || expected.is_none() || after.get(*mv) != expected {
            violations.push(InvariantViolation::new(
                "Target cell receives the mark of the player to move",
            ));
        }

        if let Err(mut broken) = BoardInvariants::check_all(after) {
            violations.append(&mut broken);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}
