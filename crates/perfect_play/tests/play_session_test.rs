//! End-to-end games driven through the orchestrator.

use perfect_play::{EnginePlayer, GameEvent, GameRecord, HumanPlayer, Orchestrator, Tally};
use perfect_play_engine::{Game, Move, Outcome, Player};
use std::io::Cursor;

#[test]
fn test_human_cannot_beat_engine() {
    // Includes an unreadable line and repeated or taken cells.
    let input = "center\nnonsense\n5\n1\n2\n3\n4\n6\n7\n8\n9\n";
    let human = HumanPlayer::new("You", Cursor::new(input), Vec::new(), false);
    let orchestrator = Orchestrator::new(Box::new(human), Box::new(EnginePlayer::new("Engine")));

    let mut rejections = 0;
    let game = orchestrator
        .run(|event| {
            if matches!(event, GameEvent::Rejected { .. }) {
                rejections += 1;
            }
            Ok(())
        })
        .unwrap();

    assert!(game.is_over());
    assert_ne!(game.outcome(), Outcome::Won(Player::X));
    assert!(rejections >= 1, "second \"5\" must be rejected");
}

#[test]
fn test_engine_punishes_blunder() {
    // Engine opens in the corner; O's edge reply loses.
    let input = "0,1\n1,1\n2,1\n1,0\n1,2\n2,2\n2,0\n0,2\n";
    let human = HumanPlayer::new("You", Cursor::new(input), Vec::new(), false);
    let orchestrator = Orchestrator::new(Box::new(EnginePlayer::new("Engine")), Box::new(human));

    let game = orchestrator.run(|_| Ok(())).unwrap();
    assert_eq!(game.outcome(), Outcome::Won(Player::X));
}

#[test]
fn test_events_render() {
    let orchestrator = Orchestrator::new(
        Box::new(EnginePlayer::new("Engine X")),
        Box::new(EnginePlayer::new("Engine O")),
    );

    let mut transcript = String::new();
    orchestrator
        .run(|event| {
            transcript.push_str(&event.to_string());
            Ok(())
        })
        .unwrap();

    assert!(transcript.starts_with("1|2|3"));
    assert!(transcript.contains("Engine X (X) plays Top-left (0, 0)"));
    assert!(transcript.ends_with("Draw"));
}

#[test]
fn test_selfplay_series_all_draw() {
    let mut tally = Tally::default();
    let mut records = Vec::new();
    for _ in 0..3 {
        let orchestrator = Orchestrator::with_game(
            Game::replay(&[Move::new(1, 1)]).unwrap(),
            Box::new(EnginePlayer::new("Engine X")),
            Box::new(EnginePlayer::new("Engine O")),
        );
        let game = orchestrator.run(|_| Ok(())).unwrap();
        tally.record(game.outcome());
        records.push(GameRecord::from(&game));
    }

    assert_eq!(tally.games(), 3);
    assert_eq!(tally.draws, 3);
    assert!(records.windows(2).all(|pair| pair[0] == pair[1]));
    assert_eq!(records[0].moves.first(), Some(&Move::new(1, 1)));
}
