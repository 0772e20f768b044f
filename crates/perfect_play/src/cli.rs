//! Command-line interface for perfect_play.

use crate::config::HumanSeat;
use clap::{Parser, Subcommand};

/// Perfect Play - tic-tac-toe against an opponent that never loses
#[derive(Parser, Debug)]
#[command(name = "perfect_play")]
#[command(about = "Tic-tac-toe with an exhaustive minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on the terminal
    Play {
        /// Mark the human plays (overrides config)
        #[arg(long, value_enum)]
        human: Option<HumanSeat>,

        /// Show the engine's suggestion before each of your moves
        #[arg(long)]
        hints: bool,
    },

    /// Print the optimal move for a board, e.g. "XX./OO./..."
    Best {
        /// Nine cells row-major: X, O, and . - _ or a space for empty; | and / are ignored
        board: String,
    },

    /// Let the engine play both sides
    Selfplay {
        /// Number of games to play
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        games: u32,

        /// Opening moves to play before the engine takes over ("1,1", "5", "center")
        #[arg(long = "opening", num_args = 1..)]
        opening: Vec<String>,

        /// Print the game record as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_play() {
        let cli = Cli::parse_from(["perfect_play", "play", "--human", "o", "--hints"]);
        match cli.command {
            Command::Play { human, hints } => {
                assert_eq!(human, Some(HumanSeat::O));
                assert!(hints);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_selfplay_opening() {
        let cli = Cli::parse_from([
            "perfect_play",
            "--config",
            "play.toml",
            "selfplay",
            "--opening",
            "center",
            "0,0",
            "--json",
        ]);
        assert_eq!(cli.config, Some(std::path::PathBuf::from("play.toml")));
        match cli.command {
            Command::Selfplay {
                games,
                opening,
                json,
            } => {
                assert_eq!(games, 1);
                assert_eq!(opening, vec!["center".to_string(), "0,0".to_string()]);
                assert!(json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_selfplay_games() {
        let cli = Cli::parse_from(["perfect_play", "selfplay", "--games", "5"]);
        match cli.command {
            Command::Selfplay {
                games,
                opening,
                json,
            } => {
                assert_eq!(games, 5);
                assert!(opening.is_empty());
                assert!(!json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_selfplay_needs_at_least_one_game() {
        let result = Cli::try_parse_from(["perfect_play", "selfplay", "--games", "0"]);
        assert!(result.is_err());
    }
}
