//! Score invariant: the scores count exactly the placed pieces.

use super::Invariant;
use crate::game::GameState;
use crate::types::Color;
use tracing::warn;

/// Invariant: each player's score equals their placed pieces on the board.
///
/// This implies `player1_score + player2_score` equals the number of placed
/// pieces. Suggestions never count.
pub struct ScoreMatchesBoard;

impl Invariant<GameState> for ScoreMatchesBoard {
    fn holds(game: &GameState) -> bool {
        let black = game.board().count_placed(Color::Black);
        let white = game.board().count_placed(Color::White);
        let valid =
            game.player1_score() as usize == black && game.player2_score() as usize == white;
        if !valid {
            warn!(
                black,
                white,
                player1_score = game.player1_score(),
                player2_score = game.player2_score(),
                "Score does not match board"
            );
        }
        valid
    }

    fn description() -> &'static str {
        "Each score equals the placed pieces of that color"
    }
}
