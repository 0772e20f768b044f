//! A played game: the current board plus the moves that led to it.
//!
//! Front ends hold a [`Game`] instead of threading boards by hand. Every
//! change goes through [`crate::result`], so the board only ever reaches
//! states that are reachable from the initial one. Deserialization replays
//! the recorded moves for the same reason.

use crate::rules::{outcome, result, to_move};
use crate::search::minimax;
use crate::{Board, InvalidMove, Move, Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Game in progress or finished, with full history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MoveLog", into = "MoveLog")]
pub struct Game {
    board: Board,
    history: Vec<Move>,
}

/// Wire form of a [`Game`]: the moves alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MoveLog {
    moves: Vec<Move>,
}

impl From<Game> for MoveLog {
    fn from(game: Game) -> Self {
        Self {
            moves: game.history,
        }
    }
}

impl TryFrom<MoveLog> for Game {
    type Error = InvalidMove;

    fn try_from(log: MoveLog) -> Result<Self, Self::Error> {
        Game::replay(&log.moves)
    }
}

impl Game {
    /// Creates a new game on the empty board.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            history: Vec::new(),
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the player to move, or `None` once the game is over.
    pub fn to_move(&self) -> Option<Player> {
        to_move(&self.board)
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> Outcome {
        outcome(&self.board)
    }

    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        self.outcome().is_over()
    }

    /// Plays `mv` for the player to move.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] and leaves the game untouched when the move
    /// is not legal.
    #[instrument(skip(self), fields(moves = self.history.len()))]
    pub fn play(&mut self, mv: Move) -> Result<Outcome, InvalidMove> {
        let next = result(&self.board, mv)?;
        self.board = next;
        self.history.push(mv);

        let outcome = self.outcome();
        debug!(%mv, %outcome, "Move played");
        Ok(outcome)
    }

    /// Plays the engine's optimal move. Returns `None` if the game is over.
    #[instrument(skip(self))]
    pub fn play_best(&mut self) -> Option<Move> {
        let mv = minimax(&self.board)?;
        self.play(mv).ok()?;
        Some(mv)
    }

    /// Takes back the last move by replaying the ones before it.
    ///
    /// Returns `None` and leaves the game untouched when no move has been
    /// played.
    pub fn undo(&mut self) -> Option<Move> {
        let (&mv, earlier) = self.history.split_last()?;
        *self = Self::replay(earlier).ok()?;
        debug!(%mv, "Move taken back");
        Some(mv)
    }

    /// Rebuilds a game by playing `moves` from the initial board.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvalidMove`] encountered.
    #[instrument]
    pub fn replay(moves: &[Move]) -> Result<Self, InvalidMove> {
        let mut game = Self::new();
        for mv in moves {
            game.play(*mv)?;
        }
        Ok(game)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
