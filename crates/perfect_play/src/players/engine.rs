//! Engine contestant backed by minimax search.

use super::Contestant;
use anyhow::Result;
use perfect_play_engine::{Game, Move, minimax};
use tracing::debug;

/// Plays the optimal move every turn.
pub struct EnginePlayer {
    name: String,
}

impl EnginePlayer {
    /// Creates a new engine player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Contestant for EnginePlayer {
    fn choose(&mut self, game: &Game) -> Result<Move> {
        let mv = minimax(game.board())
            .ok_or_else(|| anyhow::anyhow!("No move available: game is over"))?;
        debug!(engine = %self.name, %mv, "Engine chose move");
        Ok(mv)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
