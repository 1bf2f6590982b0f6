//! Suggestion invariant: the hints shown are exactly the legal moves.

use super::Invariant;
use crate::game::GameState;
use crate::rules;
use tracing::warn;

/// Invariant: suggestions are exactly the current player's legal moves.
///
/// Holds after every suggest phase. No suggestion of the waiting player's
/// color may survive a turn.
pub struct SuggestionsMatchLegalMoves;

impl Invariant<GameState> for SuggestionsMatchLegalMoves {
    fn holds(game: &GameState) -> bool {
        let player = game.current_player();
        let board = game.board();
        if board.count_suggestions(player.opposite()) > 0 {
            warn!(?player, "Suggestions left over for the waiting player");
            return false;
        }

        // A suggestion occupies its cell, so legality is checked with it lifted.
        let mut lifted = board.clone();
        lifted.clear_suggestions();
        let expected = rules::legal_moves(&lifted, player);
        let actual = board.suggestions(player);
        if expected != actual {
            warn!(?expected, ?actual, "Suggestions differ from legal moves");
            return false;
        }
        true
    }

    fn description() -> &'static str {
        "Suggestions are exactly the current player's legal moves"
    }
}
