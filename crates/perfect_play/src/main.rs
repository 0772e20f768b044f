//! Perfect Play - tic-tac-toe against an opponent that never loses.

use anyhow::Result;
use clap::Parser;
use perfect_play::{
    Cli, Command, Contestant, EnginePlayer, GameEvent, GameRecord, HumanPlayer, Orchestrator,
    PlayConfig, Tally,
};
use perfect_play_engine::{
    Board, BoardInvariants, Game, InvariantSet, Move, Player, evaluate, minimax, outcome,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = PlayConfig::load(cli.config.as_deref())?;
    init_tracing(config.log_filter());

    match cli.command {
        Command::Play { human, hints } => run_play(config.with_overrides(human, hints)),
        Command::Best { board } => run_best(&board),
        Command::Selfplay {
            games,
            opening,
            json,
        } => run_selfplay(games, &opening, json),
    }
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn print_event(event: &GameEvent) -> Result<()> {
    println!("{}", event);
    Ok(())
}

/// Human against the engine, or engine against engine.
#[instrument(skip(config))]
fn run_play(config: PlayConfig) -> Result<()> {
    let seat = config.human().player();
    info!(?seat, hints = config.hints(), "Starting interactive game");

    let contestant = |player: Player| -> Box<dyn Contestant> {
        if seat == Some(player) {
            Box::new(HumanPlayer::new(
                "You",
                std::io::stdin().lock(),
                std::io::stdout(),
                *config.hints(),
            ))
        } else {
            Box::new(EnginePlayer::new("Engine"))
        }
    };

    Orchestrator::new(contestant(Player::X), contestant(Player::O)).run(print_event)?;
    Ok(())
}

/// Prints the engine's move for a board given on the command line.
#[instrument]
fn run_best(input: &str) -> Result<()> {
    let board: Board = input.parse()?;

    if let Err(violations) = BoardInvariants::check_all(&board) {
        let reasons = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        anyhow::bail!("Board cannot arise in play: {}", reasons);
    }

    println!("{}\n", board.display());
    match minimax(&board) {
        Some(mv) => {
            let expected = match evaluate(&board) {
                1 => "X wins",
                -1 => "O wins",
                _ => "draw",
            };
            println!("Best move: {} {}", mv.label(), mv);
            println!("With best play: {}", expected);
        }
        None => println!("Game is over: {}", outcome(&board)),
    }
    Ok(())
}

/// Engine against itself, optionally after some scripted opening moves.
///
/// A single game prints its moves; a series prints one line per game.
/// Both end with the tally, or everything as JSON with `--json`.
#[instrument]
fn run_selfplay(games: u32, opening: &[String], json: bool) -> Result<()> {
    let moves = opening
        .iter()
        .map(|text| {
            Move::parse(text).ok_or_else(|| anyhow::anyhow!("Could not read {:?} as a move", text))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut tally = Tally::default();
    let mut records = Vec::new();
    for number in 1..=games {
        let orchestrator = Orchestrator::with_game(
            Game::replay(&moves)?,
            Box::new(EnginePlayer::new("Engine X")),
            Box::new(EnginePlayer::new("Engine O")),
        );

        let game = if json || games > 1 {
            orchestrator.run(|_| Ok(()))?
        } else {
            orchestrator.run(print_event)?
        };
        if games > 1 && !json {
            println!("Game {}: {}", number, game.outcome());
        }

        tally.record(game.outcome());
        records.push(GameRecord::from(&game));
    }

    info!(%tally, "Self-play finished");
    if json {
        let report = serde_json::json!({ "games": records, "tally": tally });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", tally);
    }
    Ok(())
}
