//! End-to-end console games driven from in-memory input.

use othello_online::{ConsoleError, ConsoleGame, GameState, OthelloConfig, SaveStore, render};
use strictly_othello::Position;

/// Plays the first legal cell every turn and records the moves.
fn scripted_game() -> (Vec<Position>, GameState) {
    let mut game = GameState::new_game();
    let mut moves = Vec::new();
    while !game.is_finished() {
        let pos = game.legal_moves()[0];
        game.play_turn(pos.row(), pos.col()).unwrap();
        moves.push(pos);
    }
    (moves, game)
}

fn script(moves: &[Position]) -> String {
    moves
        .iter()
        .map(|pos| format!("{}\n{}\n", pos.row(), pos.col()))
        .collect()
}

#[test]
fn test_full_game_reaches_finish_screen() {
    let (moves, expected) = scripted_game();
    let config = OthelloConfig::default();
    let input = script(&moves);
    let mut output = Vec::new();

    let game = ConsoleGame::new(&config, input.as_bytes(), &mut output)
        .run(GameState::new_game())
        .expect("Scripted game finishes");

    assert_eq!(game, expected);
    let text = String::from_utf8(output).unwrap();
    assert!(text.starts_with("Player 1 score: 2\nPlayer 2 score: 2\n"));
    let outcome = expected.outcome().expect("Game is finished");
    assert!(text.trim_end().ends_with(&render::winner(outcome, &config)));
}

#[test]
fn test_bad_input_is_recovered() {
    let (moves, expected) = scripted_game();
    let config = OthelloConfig::default();
    // Junk and an illegal cell before the real first move.
    let input = format!("abc 12\n-4 0 0\n{}", script(&moves));
    let mut output = Vec::new();

    let game = ConsoleGame::new(&config, input.as_bytes(), &mut output)
        .run(GameState::new_game())
        .unwrap();

    assert_eq!(game, expected);
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("Invalid input. Provide an integer value: "));
    assert!(text.contains("Row out of bounds."));
    assert!(text.contains("Invalid move. Pick a cell with a suggested cell."));
}

#[test]
fn test_custom_names_in_prompts() {
    let config =
        OthelloConfig::from_toml("player1_name = \"Ada\"\nplayer2_name = \"Grace\"").unwrap();
    let mut output = Vec::new();
    let result =
        ConsoleGame::new(&config, "2 3\n".as_bytes(), &mut output).run(GameState::new_game());

    assert!(matches!(result, Err(ConsoleError::InputClosed)));
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("Ada, make your move..."));
    assert!(text.contains("Grace, make your move..."));
}

#[test]
fn test_store_saves_every_turn() {
    let dir = tempfile::tempdir().unwrap();
    let store = SaveStore::new(dir.path().join("game.txt"));
    let config = OthelloConfig::default();
    let mut output = Vec::new();

    let result = ConsoleGame::new(&config, "2 3\n2 2\n".as_bytes(), &mut output)
        .with_store(&store)
        .run(GameState::new_game());

    assert!(matches!(result, Err(ConsoleError::InputClosed)));
    let saved = store.load().unwrap();
    assert_eq!(saved.turn_number(), 2);

    // Resuming picks up where the save left off.
    let mut resumed_output = Vec::new();
    let resumed = ConsoleGame::new(&config, "".as_bytes(), &mut resumed_output).run(saved.clone());
    assert!(matches!(resumed, Err(ConsoleError::InputClosed)));
    let text = String::from_utf8(resumed_output).unwrap();
    assert!(text.starts_with(&render::scores(&saved)));
}
