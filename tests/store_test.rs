//! Save-file store tests.

use othello_online::{Color, GameState, MoveOutcome, OthelloError, SaveStore};
use strictly_othello::save;
use tempfile::TempDir;

fn setup() -> (TempDir, SaveStore) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = SaveStore::new(dir.path().join("othello_saves").join("game1.txt"));
    (dir, store)
}

fn read(store: &SaveStore) -> String {
    std::fs::read_to_string(store.path()).expect("Save file exists")
}

#[test]
fn test_new_game_writes_opening() {
    let (_dir, store) = setup();
    let game = store.new_game().unwrap();
    assert_eq!(game, GameState::new_game());
    assert_eq!(read(&store), save::to_save_string(&GameState::new_game()));
    assert!(read(&store).starts_with("finished:false\nturnNumber:0\n"));
}

#[test]
fn test_applied_move_is_saved() {
    let (_dir, store) = setup();
    store.new_game().unwrap();

    let outcome = store.apply_move(2, 3, 0).unwrap();
    let MoveOutcome::Applied { applied, game } = outcome else {
        panic!("Expected applied move, got {:?}", outcome);
    };
    assert_eq!(applied.flipped().len(), 1);
    assert_eq!(game.current_player(), Color::White);

    assert_eq!(store.turn_number().unwrap(), 1);
    assert_eq!(store.load().unwrap(), game);
}

#[test]
fn test_stale_turn_leaves_file_untouched() {
    let (_dir, store) = setup();
    store.new_game().unwrap();
    store.apply_move(2, 3, 0).unwrap();
    let before = read(&store);

    // A second client still thinks it is turn 0.
    let outcome = store.apply_move(2, 4, 0).unwrap();
    match &outcome {
        MoveOutcome::Stale {
            requested, current, ..
        } => {
            assert_eq!(*requested, 0);
            assert_eq!(*current, 1);
        }
        other => panic!("Expected stale request, got {:?}", other),
    }
    assert_eq!(read(&store), before);
}

#[test]
fn test_rejected_move_leaves_file_untouched() {
    let (_dir, store) = setup();
    store.new_game().unwrap();
    let before = read(&store);

    let outcome = store.apply_move(0, 0, 0).unwrap();
    assert!(matches!(
        outcome,
        MoveOutcome::Rejected {
            error: OthelloError::InvalidMove { row: 0, col: 0 },
            ..
        }
    ));
    assert_eq!(outcome.game(), &GameState::new_game());
    assert_eq!(read(&store), before);
}

#[test]
fn test_move_without_save_starts_new_game() {
    let (_dir, store) = setup();
    assert!(!store.exists());

    let outcome = store.apply_move(5, 4, 0).unwrap();
    assert!(matches!(outcome, MoveOutcome::Applied { .. }));
    assert!(store.exists());
    assert_eq!(store.turn_number().unwrap(), 1);
}

#[test]
fn test_malformed_save_is_reported() {
    let (_dir, store) = setup();
    store.new_game().unwrap();
    std::fs::write(store.path(), "finished:false\nturnNumber:oops\n").unwrap();

    let err = store.load().unwrap_err();
    assert!(err.message.contains("Game error"));
    assert!(store.apply_move(2, 3, 0).is_err());
}

#[test]
fn test_sequence_of_moves_across_reloads() {
    let (_dir, store) = setup();
    store.new_game().unwrap();

    for turn in 0..6 {
        let game = store.load().unwrap();
        let pos = game.legal_moves()[0];
        let outcome = store.apply_move(pos.row(), pos.col(), turn).unwrap();
        assert!(matches!(outcome, MoveOutcome::Applied { .. }), "turn {}", turn);
    }

    let game = store.load().unwrap();
    assert_eq!(game.turn_number(), 6);
    assert_eq!(
        game.player1_score() + game.player2_score(),
        game.board().placed_total() as u32
    );
}
