//! Game orchestration between contestants.

use crate::players::Contestant;
use anyhow::Result;
use perfect_play_engine::{Board, Game, InvalidMove, Move, Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Things that happen during a game, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Play is about to start (or resume) from this board.
    Started {
        /// Board at the start.
        board: Board,
    },
    /// A move was accepted.
    MoveMade {
        /// Mark that moved.
        player: Player,
        /// Contestant name.
        name: String,
        /// The move.
        mv: Move,
        /// Board after the move.
        board: Board,
    },
    /// A move was rejected; the same contestant will be asked again.
    Rejected {
        /// Contestant name.
        name: String,
        /// The rejected move.
        mv: Move,
        /// Why it was rejected.
        error: InvalidMove,
    },
    /// Game ended.
    GameOver {
        /// Final outcome.
        outcome: Outcome,
        /// Winner's name, if any.
        winner: Option<String>,
    },
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::Started { board } => writeln!(f, "{}", board.display()),
            GameEvent::MoveMade {
                player,
                name,
                mv,
                board,
            } => writeln!(
                f,
                "{} ({}) plays {} {}\n{}",
                name,
                player,
                mv.label(),
                mv,
                board.display()
            ),
            GameEvent::Rejected { error, .. } => write!(f, "{}. Try again.", error),
            GameEvent::GameOver {
                outcome,
                winner: Some(name),
            } => write!(f, "{} ({})", outcome, name),
            GameEvent::GameOver { outcome, winner: None } => write!(f, "{}", outcome),
        }
    }
}

/// Serializable summary of a finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Moves in the order played.
    pub moves: Vec<Move>,
    /// Final outcome.
    pub outcome: Outcome,
    /// Final board.
    pub board: Board,
}

impl From<&Game> for GameRecord {
    fn from(game: &Game) -> Self {
        Self {
            moves: game.history().to_vec(),
            outcome: game.outcome(),
            board: *game.board(),
        }
    }
}

/// Outcome counts over a series of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Tally {
    /// Counts one finished game. Unfinished games are not counted.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won(Player::X) => self.x_wins += 1,
            Outcome::Won(Player::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }

    /// Number of games counted.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games: X won {}, O won {}, {} drawn",
            self.games(),
            self.x_wins,
            self.o_wins,
            self.draws
        )
    }
}

/// Orchestrates gameplay between two contestants.
pub struct Orchestrator {
    game: Game,
    player_x: Box<dyn Contestant>,
    player_o: Box<dyn Contestant>,
}

impl Orchestrator {
    /// Creates an orchestrator for a fresh game.
    pub fn new(player_x: Box<dyn Contestant>, player_o: Box<dyn Contestant>) -> Self {
        Self::with_game(Game::new(), player_x, player_o)
    }

    /// Creates an orchestrator that continues `game`.
    pub fn with_game(
        game: Game,
        player_x: Box<dyn Contestant>,
        player_o: Box<dyn Contestant>,
    ) -> Self {
        Self {
            game,
            player_x,
            player_o,
        }
    }

    /// Runs the game loop until the game is over, reporting each event.
    ///
    /// Rejected moves do not advance the game; the same contestant is asked
    /// again.
    pub fn run(mut self, mut on_event: impl FnMut(&GameEvent) -> Result<()>) -> Result<Game> {
        info!(
            x = self.player_x.name(),
            o = self.player_o.name(),
            "Starting game orchestration"
        );
        on_event(&GameEvent::Started {
            board: *self.game.board(),
        })?;

        while let Some(mark) = self.game.to_move() {
            let player = match mark {
                Player::X => &mut self.player_x,
                Player::O => &mut self.player_o,
            };

            debug!(player = player.name(), "Waiting for move");
            let mv = player.choose(&self.game)?;

            match self.game.play(mv) {
                Ok(_) => on_event(&GameEvent::MoveMade {
                    player: mark,
                    name: player.name().to_string(),
                    mv,
                    board: *self.game.board(),
                })?,
                Err(error) => {
                    warn!(player = player.name(), %mv, %error, "Move rejected");
                    on_event(&GameEvent::Rejected {
                        name: player.name().to_string(),
                        mv,
                        error,
                    })?;
                }
            }
        }

        let outcome = self.game.outcome();
        let winner = outcome.winner().map(|mark| match mark {
            Player::X => self.player_x.name().to_string(),
            Player::O => self.player_o.name().to_string(),
        });
        info!(%outcome, "Game over");
        on_event(&GameEvent::GameOver { outcome, winner })?;

        Ok(self.game)
    }
}
