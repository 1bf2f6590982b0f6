//! Move legality.

use super::lines::{adjacent_opponents, lines_from_adjacency};
use crate::board::Board;
use crate::types::{Color, Piece, Position};
use tracing::instrument;

/// Checks whether `player` may move at `pos`.
///
/// The cell must be empty, and at least one neighbor holding a placed
/// opponent piece must lead to a capture line.
#[instrument(skip(board))]
pub fn is_legal_move(board: &Board, player: Color, pos: Position) -> bool {
    if board.cell(pos).is_some() {
        return false;
    }

    let adjacency = adjacent_opponents(board, player.opposite(), pos);
    if !adjacency.any() {
        return false;
    }

    lines_from_adjacency(board, &adjacency, player, pos).any()
}

/// Checks that `pos` holds a suggestion of `player`'s color.
///
/// This is what a chosen move has to satisfy before it is applied.
#[instrument(skip(board))]
pub fn is_chosen_move_valid(board: &Board, player: Color, pos: Position) -> bool {
    board.cell(pos) == Some(Piece::suggestion(player))
}

/// All cells where `player` may move, in raster order.
#[instrument(skip(board))]
pub fn legal_moves(board: &Board, player: Color) -> Vec<Position> {
    Position::all()
        .filter(|pos| is_legal_move(board, player, *pos))
        .collect()
}
