//! Move coordinates for tic-tac-toe.
//!
//! A move names a cell by `(row, col)`. Coordinates are not range-checked
//! on construction so that a bad request can still be represented and
//! rejected by [`crate::result`].

use crate::error::InvalidMove;
use serde::{Deserialize, Serialize};

/// A request to mark the cell at `(row, col)`, each in `0..3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    /// Row, top to bottom.
    pub row: usize,
    /// Column, left to right.
    pub col: usize,
}

const LABELS: [&str; 9] = [
    "Top-left",
    "Top-center",
    "Top-right",
    "Middle-left",
    "Center",
    "Middle-right",
    "Bottom-left",
    "Bottom-center",
    "Bottom-right",
];

impl Move {
    /// All 9 cells in row-major order.
    pub const ALL: [Move; 9] = [
        Move::new(0, 0),
        Move::new(0, 1),
        Move::new(0, 2),
        Move::new(1, 0),
        Move::new(1, 1),
        Move::new(1, 2),
        Move::new(2, 0),
        Move::new(2, 1),
        Move::new(2, 2),
    ];

    /// Creates a move.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// True when both coordinates lie on the board.
    pub fn in_range(self) -> bool {
        self.row < 3 && self.col < 3
    }

    /// Row-major board index (0-8), or `None` when out of range.
    pub fn index(self) -> Option<usize> {
        self.in_range().then(|| self.row * 3 + self.col)
    }

    /// Creates a move from a row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Human-readable cell name, or `"Off-board"` when out of range.
    pub fn label(self) -> &'static str {
        self.index().map_or("Off-board", |i| LABELS[i])
    }

    /// Parses a move typed by a person.
    ///
    /// Accepts `"r,c"` or `"r c"` (0-based), a single digit `1`-`9` as
    /// shown by [`crate::Board::display`], or a cell label such as
    /// `"center"` or `"top-left"` (case-insensitive).
    pub fn parse(input: &str) -> Option<Self> {
        let s = input.trim();
        if s.is_empty() {
            return None;
        }

        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();

        match parts.as_slice() {
            [row, col] => {
                let row = row.parse().ok()?;
                let col = col.parse().ok()?;
                Some(Self::new(row, col))
            }
            [single] => {
                if let Ok(n) = single.parse::<usize>() {
                    return n.checked_sub(1).and_then(Self::from_index);
                }
                let lower = single.to_lowercase();
                Self::ALL
                    .into_iter()
                    .find(|mv| mv.label().to_lowercase() == lower)
            }
            _ => None,
        }
    }
}

impl TryFrom<(i64, i64)> for Move {
    type Error = InvalidMove;

    fn try_from((row, col): (i64, i64)) -> Result<Self, Self::Error> {
        let out_of_range = InvalidMove::OutOfRange { row, col };
        let row = usize::try_from(row).map_err(|_| out_of_range.clone())?;
        let col = usize::try_from(col).map_err(|_| out_of_range.clone())?;
        let mv = Self::new(row, col);
        if mv.in_range() { Ok(mv) } else { Err(out_of_range) }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
