//! First-class invariants for tic-tac-toe boards.
//!
//! Invariants are logical properties that hold for every board reachable
//! from the initial state. The engine relies on them instead of
//! re-validating on each call; they are checked after move application in
//! debug builds and can be tested independently.

use crate::rules::win::{LINES, line_complete};
use crate::{Board, Player};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples so sets compose without boxing.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: X moves first and players alternate, so X has as many marks
/// as O or exactly one more.
pub struct MarkBalanceInvariant;

impl Invariant<Board> for MarkBalanceInvariant {
    fn holds(board: &Board) -> bool {
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O, or one more"
    }
}

/// Invariant: at most one player owns a completed line.
pub struct SingleWinnerInvariant;

impl Invariant<Board> for SingleWinnerInvariant {
    fn holds(board: &Board) -> bool {
        let completes = |player| LINES.iter().any(|line| line_complete(board, line, player));
        !(completes(Player::X) && completes(Player::O))
    }

    fn description() -> &'static str {
        "At most one player has three in a row"
    }
}

/// All board invariants as a composable set.
pub type BoardInvariants = (MarkBalanceInvariant, SingleWinnerInvariant);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, result};

    #[test]
    fn test_invariants_hold_for_empty_board() {
        assert!(BoardInvariants::check_all(&Board::new()).is_ok());
    }

    #[test]
    fn test_invariants_hold_after_moves() {
        let mut board = Board::new();
        for mv in [Move::new(0, 0), Move::new(1, 1), Move::new(0, 2), Move::new(2, 0)] {
            board = result(&board, mv).unwrap();
            assert!(BoardInvariants::check_all(&board).is_ok());
        }
    }

    #[test]
    fn test_mark_balance_detects_extra_o() {
        let board: Board = "OO./X../...".parse().unwrap();
        assert!(!MarkBalanceInvariant::holds(&board));
    }

    #[test]
    fn test_mark_balance_detects_double_x() {
        let board: Board = "XXX/.../...".parse().unwrap();
        assert!(!MarkBalanceInvariant::holds(&board));
    }

    #[test]
    fn test_single_winner_detects_two_lines() {
        let board: Board = "XXX/OOO/...".parse().unwrap();
        assert!(!SingleWinnerInvariant::holds(&board));

        let violations = BoardInvariants::check_all(&board).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].description,
            SingleWinnerInvariant::description()
        );
    }
}
