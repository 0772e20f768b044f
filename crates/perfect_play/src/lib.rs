//! Perfect Play terminal front end.
//!
//! Drives the [`perfect_play_engine`] from a line-based terminal: a human
//! against the engine, or the engine against itself.
//!
//! # Architecture
//!
//! - **Config**: TOML settings with command-line overrides
//! - **Players**: [`Contestant`] implementations for humans and the engine
//! - **Orchestrator**: the game loop, reporting [`GameEvent`]s

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod orchestrator;
mod players;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, HumanSeat, PlayConfig};

// Crate-level exports - Game loop
pub use orchestrator::{GameEvent, GameRecord, Orchestrator, Tally};

// Crate-level exports - Contestants
pub use players::{Contestant, EnginePlayer, HumanPlayer};
