//! Property tests over every board reachable from the initial state.

use perfect_play_engine::{
    Board, BoardInvariants, Cell, Game, InvalidMove, InvariantSet, Move, Outcome, Player,
    actions, evaluate, is_terminal, minimax, outcome, result, successors, to_move, utility,
    winner,
};
use std::collections::HashSet;

fn reachable_boards() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![Board::new()];
    let mut boards = Vec::new();

    while let Some(board) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        boards.push(board);
        for (_, child) in successors(&board) {
            stack.push(child);
        }
    }

    boards
}

#[test]
fn test_reachable_board_count() {
    // Well-known count of legal tic-tac-toe positions.
    assert_eq!(reachable_boards().len(), 5478);
}

#[test]
fn test_turn_alternates_on_every_board() {
    for board in reachable_boards() {
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        assert!(x == o || x == o + 1, "unbalanced board:\n{board}");
        assert!(BoardInvariants::check_all(&board).is_ok());

        let expected = if is_terminal(&board) {
            None
        } else if x == o {
            Some(Player::X)
        } else {
            Some(Player::O)
        };
        assert_eq!(to_move(&board), expected, "board:\n{board}");
    }
}

#[test]
fn test_application_changes_one_cell() {
    for board in reachable_boards() {
        let Some(player) = to_move(&board) else {
            continue;
        };
        for mv in actions(&board) {
            let next = result(&board, mv).expect("enumerated move is legal");
            assert_eq!(Ok(next), result(&board, mv));
            for cell in Move::ALL {
                if cell == mv {
                    assert_eq!(next.get(cell), Some(Cell::Occupied(player)));
                } else {
                    assert_eq!(next.get(cell), board.get(cell));
                }
            }
        }
    }
}

#[test]
fn test_invalid_moves_rejected() {
    let board = result(&Board::new(), Move::new(0, 0)).unwrap();

    assert_eq!(
        result(&board, Move::new(0, 0)),
        Err(InvalidMove::Occupied(Move::new(0, 0)))
    );
    assert_eq!(
        result(&board, Move::new(3, 0)),
        Err(InvalidMove::OutOfRange { row: 3, col: 0 })
    );
    assert_eq!(
        Move::try_from((-1, 2)),
        Err(InvalidMove::OutOfRange { row: -1, col: 2 })
    );

    for terminal in reachable_boards().into_iter().filter(is_terminal) {
        for mv in Move::ALL {
            assert_eq!(result(&terminal, mv), Err(InvalidMove::GameOver));
        }
    }
}

#[test]
fn test_terminal_boards() {
    for board in reachable_boards() {
        let full = board.cells().iter().all(|c| *c != Cell::Empty);
        assert_eq!(is_terminal(&board), winner(&board).is_some() || full);

        if is_terminal(&board) {
            assert!(actions(&board).is_empty());
            assert_eq!(minimax(&board), None);
            let expected = match winner(&board) {
                Some(Player::X) => 1,
                Some(Player::O) => -1,
                None => 0,
            };
            assert_eq!(utility(&board), expected);
        } else {
            assert!(!actions(&board).is_empty());
            assert_eq!(outcome(&board), Outcome::InProgress);
        }
    }
}

#[test]
fn test_search_preserves_value() {
    // Late positions keep this affordable; the opening is covered by self-play.
    let boards = reachable_boards()
        .into_iter()
        .filter(|b| !is_terminal(b) && b.cells().iter().filter(|c| **c != Cell::Empty).count() >= 4);

    for board in boards {
        let mv = minimax(&board).expect("live board has a move");
        let next = result(&board, mv).expect("search picks legal moves");
        assert_eq!(evaluate(&next), evaluate(&board), "board:\n{board}");
    }
}

#[test]
fn test_empty_board_shortcut() {
    assert_eq!(minimax(&Board::new()), Some(Move::new(0, 0)));
}

#[test]
fn test_x_completes_top_row() {
    let game = Game::replay(&[
        Move::new(0, 0),
        Move::new(1, 0),
        Move::new(0, 1),
        Move::new(2, 2),
    ])
    .unwrap();
    assert_eq!(game.to_move(), Some(Player::X));
    assert_eq!(minimax(game.board()), Some(Move::new(0, 2)));
}

#[test]
fn test_o_blocks_center_diagonal() {
    let game = Game::replay(&[Move::new(0, 0), Move::new(0, 2), Move::new(1, 1)]).unwrap();
    assert_eq!(game.to_move(), Some(Player::O));
    assert_eq!(minimax(game.board()), Some(Move::new(2, 2)));
}

#[test]
fn test_self_play_is_a_draw() {
    let mut game = Game::new();
    while !game.is_over() {
        game.play_best().expect("live game has a move");
    }
    assert_eq!(game.outcome(), Outcome::Draw);
}

#[test]
fn test_game_record_serializes() {
    let game = Game::replay(&[Move::new(1, 1), Move::new(0, 0)]).unwrap();
    let json = serde_json::to_string(&game).unwrap();
    let mut restored: Game = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, game);
    assert_eq!(restored.undo(), Some(Move::new(0, 0)));
}
