//! Contestant trait and implementations.

mod engine;
mod human;

pub use engine::EnginePlayer;
pub use human::HumanPlayer;

use anyhow::Result;
use perfect_play_engine::{Game, Move};

/// Anything that can pick moves for one side of a game.
pub trait Contestant {
    /// Picks a move for the player to move in `game`.
    ///
    /// The move is not required to be legal; the orchestrator validates it
    /// and asks again on rejection.
    fn choose(&mut self, game: &Game) -> Result<Move>;

    /// Returns the contestant's display name.
    fn name(&self) -> &str;
}
