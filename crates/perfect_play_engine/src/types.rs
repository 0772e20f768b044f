//! Core domain types for tic-tac-toe.

use crate::action::Move;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell holding a player's mark.
    Occupied(Player),
}

impl Cell {
    fn symbol(self) -> Option<char> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(Player::X) => Some('X'),
            Cell::Occupied(Player::O) => Some('O'),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// A plain value: every transition produces a new board and leaves the
/// old one untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board (the initial state).
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Creates a board from cells in row-major order.
    ///
    /// No validation is performed; boards built this way are expected to
    /// respect alternation the same way played boards do.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given coordinates, or `None` when out of range.
    pub fn get(&self, mv: Move) -> Option<Cell> {
        mv.index().and_then(|i| self.cells.get(i).copied())
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of cells holding `player`'s mark.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(player))
            .count()
    }

    /// True when no mark has been placed yet.
    pub fn is_empty_board(&self) -> bool {
        self.cells.iter().all(|c| *c == Cell::Empty)
    }

    /// Returns a copy of this board with one cell replaced.
    ///
    /// `mv` must be in range.
    pub(crate) fn with_cell(mut self, mv: Move, cell: Cell) -> Self {
        let idx = mv.row * 3 + mv.col;
        self.cells[idx] = cell;
        self
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their 1-based number so a player can pick them.
    /// Rows are separated by newlines, so the output parses back.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.cells[pos].symbol() {
                    Some(mark) => mark.to_string(),
                    None => (pos + 1).to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push('\n');
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardParseError {
    /// A character that is neither a mark, an empty marker nor a separator.
    #[display("Unexpected character {:?} in board", _0)]
    InvalidChar(char),

    /// The text did not describe exactly nine cells.
    #[display("Board needs 9 cells, found {}", _0)]
    WrongLength(usize),
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells in row-major order.
    ///
    /// `X`/`O` (any case) are marks. `.`, `-`, `_`, a space and the
    /// digits `1`-`9` are empty cells. `|`, `/` and line breaks or tabs
    /// separate rows and are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for ch in s.chars() {
            match ch {
                'X' | 'x' => cells.push(Cell::Occupied(Player::X)),
                'O' | 'o' => cells.push(Cell::Occupied(Player::O)),
                '.' | '-' | '_' | ' ' | '1'..='9' => cells.push(Cell::Empty),
                '|' | '/' | '\n' | '\r' | '\t' => {}
                c => return Err(BoardParseError::InvalidChar(c)),
            }
        }

        let found = cells.len();
        let cells: [Cell; 9] = cells
            .try_into()
            .map_err(|_| BoardParseError::WrongLength(found))?;
        Ok(Self::from_cells(cells))
    }
}

/// Derived status of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(*player),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
