//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Move, Player};

/// The 8 winning lines: rows, columns, then diagonals.
pub const LINES: [[Move; 3]; 8] = [
    // Rows
    [Move::new(0, 0), Move::new(0, 1), Move::new(0, 2)],
    [Move::new(1, 0), Move::new(1, 1), Move::new(1, 2)],
    [Move::new(2, 0), Move::new(2, 1), Move::new(2, 2)],
    // Columns
    [Move::new(0, 0), Move::new(1, 0), Move::new(2, 0)],
    [Move::new(0, 1), Move::new(1, 1), Move::new(2, 1)],
    [Move::new(0, 2), Move::new(1, 2), Move::new(2, 2)],
    // Diagonals
    [Move::new(0, 0), Move::new(1, 1), Move::new(2, 2)],
    [Move::new(0, 2), Move::new(1, 1), Move::new(2, 0)],
];

/// Returns true if `player` holds all three cells of `line`.
pub fn line_complete(board: &Board, line: &[Move; 3], player: Player) -> bool {
    line.iter()
        .all(|mv| board.get(*mv) == Some(Cell::Occupied(player)))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise. Alternation allows at most one winner, so the
/// first completed line decides.
pub fn winner(board: &Board) -> Option<Player> {
    for line in &LINES {
        if let Some(Cell::Occupied(player)) = board.get(line[0])
            && line_complete(board, line, player)
        {
            return Some(player);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::X));
    }

    #[test]
    fn test_top_row_wins_regardless_of_rest() {
        let board: Board = "XXX/OXO/O.O".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_diagonal() {
        let board: Board = "OX./XO./X.O".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Board = "OOX/.X./X..".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        let board: Board = "XO./XO./.OX".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::O));
    }

    #[test]
    fn test_every_line_detected() {
        for line in &LINES {
            let mut cells = [Cell::Empty; 9];
            for mv in line {
                cells[mv.index().unwrap()] = Cell::Occupied(Player::O);
            }
            assert_eq!(winner(&Board::from_cells(cells)), Some(Player::O));
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX./O../O..".parse().unwrap();
        assert_eq!(winner(&board), None);
    }
}
