//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use perfect_play_engine::Player;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Which mark the person at the keyboard plays.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum HumanSeat {
    /// Human plays X and moves first.
    #[default]
    X,
    /// Human plays O.
    O,
    /// Nobody: the engine plays both sides.
    None,
}

impl HumanSeat {
    /// The mark the human plays, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            HumanSeat::X => Some(Player::X),
            HumanSeat::O => Some(Player::O),
            HumanSeat::None => None,
        }
    }
}

/// Configuration for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Seat taken by the human in `play`.
    #[serde(default)]
    human: HumanSeat,

    /// Show the engine's suggestion before each human move.
    #[serde(default)]
    hints: bool,

    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

#[instrument]
fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            human: HumanSeat::default(),
            hints: false,
            log_filter: default_log_filter(),
        }
    }
}

impl PlayConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(human = ?config.human, hints = config.hints, "Config loaded successfully");
        Ok(config)
    }

    /// Loads from `path` when given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Applies command-line overrides.
    pub fn with_overrides(mut self, human: Option<HumanSeat>, hints: bool) -> Self {
        if let Some(human) = human {
            self.human = human;
        }
        self.hints |= hints;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
