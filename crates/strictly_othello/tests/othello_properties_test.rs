//! Property checks over deterministic playouts.
//!
//! Each strategy picks one legal cell per turn, so every game below is
//! reproducible and runs to completion.

use strictly_othello::invariants::{
    Invariant, InvariantSet, OthelloInvariants, ScoreMatchesBoard,
};
use strictly_othello::rules::{self, capture_lines, is_chosen_move_valid, is_legal_move};
use strictly_othello::{BOARD_SIZE, Color, Direction, GameState, OthelloError, Position, save};

type Strategy = fn(&[Position], u32) -> Position;

fn first(moves: &[Position], _turn: u32) -> Position {
    moves[0]
}

fn last(moves: &[Position], _turn: u32) -> Position {
    moves[moves.len() - 1]
}

fn rotating(moves: &[Position], turn: u32) -> Position {
    moves[turn as usize % moves.len()]
}

const STRATEGIES: [Strategy; 3] = [first, last, rotating];

/// Plays `strategy` to the end, handing every intermediate state to `check`.
fn play_out(strategy: Strategy, mut check: impl FnMut(&GameState)) -> GameState {
    let mut game = GameState::new_game();
    check(&game);
    while !game.is_finished() {
        let moves = game.legal_moves();
        let pos = strategy(&moves, game.turn_number());
        game.play_turn(pos.row(), pos.col())
            .expect("Strategy picked a legal cell");
        check(&game);
        assert!(game.turn_number() <= 60, "Game ran past a full board");
    }
    game
}

#[test]
fn test_score_matches_board_throughout() {
    for strategy in STRATEGIES {
        play_out(strategy, |game| {
            assert!(ScoreMatchesBoard::holds(game));
            assert!(OthelloInvariants::check_all(game).is_ok());
            assert_eq!(
                game.player1_score() as usize + game.player2_score() as usize,
                game.board().placed_total()
            );
        });
    }
}

#[test]
fn test_one_piece_added_per_turn() {
    for strategy in STRATEGIES {
        let mut previous: Option<usize> = None;
        play_out(strategy, |game| {
            let placed = game.board().placed_total();
            if let Some(before) = previous {
                assert_eq!(placed, before + 1);
            }
            previous = Some(placed);
        });
    }
}

#[test]
fn test_refresh_is_idempotent() {
    for strategy in STRATEGIES {
        play_out(strategy, |game| {
            let mut once = game.clone();
            once.refresh_suggestions();
            let mut twice = once.clone();
            twice.refresh_suggestions();
            assert_eq!(&once, game);
            assert_eq!(once, twice);
        });
    }
}

#[test]
fn test_suggestions_are_exactly_the_legal_cells() {
    for strategy in STRATEGIES {
        play_out(strategy, |game| {
            let player = game.current_player();
            let board = game.board();
            for pos in Position::all() {
                assert_eq!(
                    is_chosen_move_valid(board, player, pos),
                    game.legal_moves().contains(&pos),
                    "Suggestion mismatch at {pos}"
                );
            }
            assert!(board.suggestions(player.opposite()).is_empty());

            let mut bare = board.clone();
            bare.clear_suggestions();
            assert_eq!(game.legal_moves(), rules::legal_moves(&bare, player));
        });
    }
}

#[test]
fn test_legality_agrees_with_line_scan() {
    for strategy in STRATEGIES {
        play_out(strategy, |game| {
            // Suggestions occupy cells, so scan the bare board.
            let mut bare = game.board().clone();
            bare.clear_suggestions();
            let board = &bare;
            for player in [Color::Black, Color::White] {
                for pos in Position::all() {
                    if board.cell(pos).is_some() {
                        continue;
                    }
                    let by_scan = Direction::ALL
                        .iter()
                        .any(|&d| rules::is_valid_line(board, player, pos, d));
                    assert_eq!(is_legal_move(board, player, pos), by_scan);
                    assert_eq!(capture_lines(board, player, pos).any(), by_scan);
                }
            }
        });
    }
}

#[test]
fn test_save_round_trip_throughout() {
    for strategy in STRATEGIES {
        play_out(strategy, |game| {
            let text = save::to_save_string(game);
            let loaded = save::load(&text).expect("Own save output loads");
            assert_eq!(&loaded, game);
            assert_eq!(save::to_save_string(&loaded), text);
            assert_eq!(save::peek_turn_number(&text).unwrap(), game.turn_number());
        });
    }
}

#[test]
fn test_terminal_state_is_final() {
    for strategy in STRATEGIES {
        let mut game = play_out(strategy, |_| {});
        assert!(game.is_finished());
        assert!(game.outcome().is_some());

        let frozen = game.clone();
        for pos in Position::all() {
            assert_eq!(
                game.play_turn(pos.row(), pos.col()),
                Err(OthelloError::GameOver)
            );
        }
        assert_eq!(game, frozen);

        let reloaded = save::load(&save::to_save_string(&game)).unwrap();
        assert!(reloaded.is_finished());
        assert_eq!(reloaded.turn_number(), game.turn_number());
    }
}

#[test]
fn test_flipped_cells_change_color() {
    let mut game = GameState::new_game();
    for _ in 0..10 {
        if game.is_finished() {
            break;
        }
        let before = game.clone();
        let pos = game.legal_moves()[0];
        let applied = game.play_turn(pos.row(), pos.col()).unwrap();
        let player = applied.player();

        assert!(!applied.flipped().is_empty());
        for flipped in applied.flipped() {
            assert!(before.board().cell(*flipped).unwrap().is_placed_of(player.opposite()));
            assert!(game.board().cell(*flipped).unwrap().is_placed_of(player));
        }
        assert_eq!(
            game.score(player),
            before.score(player) + applied.flipped().len() as u32 + 1
        );
    }
}

#[test]
fn test_out_of_range_everywhere() {
    let mut game = GameState::new_game();
    for edge in [BOARD_SIZE, BOARD_SIZE + 3] {
        assert_eq!(
            game.play_turn(edge, 0),
            Err(OthelloError::OutOfRange { row: edge, col: 0 })
        );
        assert_eq!(
            game.play_turn(0, edge),
            Err(OthelloError::OutOfRange { row: 0, col: edge })
        );
    }
    assert_eq!(game, GameState::new_game());
}
