//! Adjacency and capture-line detection.

use crate::board::Board;
use crate::types::{Color, Direction, DirectionMask, Position};
use tracing::instrument;

/// Marks each neighbor of `pos` that holds a placed piece of `color`.
///
/// Off-board neighbors and suggestions are never marked. The center of the
/// returned mask is always false.
#[instrument(skip(board))]
pub fn adjacent_opponents(board: &Board, color: Color, pos: Position) -> DirectionMask {
    let mut mask = DirectionMask::empty();
    for direction in Direction::ALL {
        let hit = pos
            .step(direction)
            .and_then(|neighbor| board.cell(neighbor))
            .is_some_and(|piece| piece.is_placed_of(color));
        mask.set(direction, hit);
    }
    mask
}

/// Checks whether a capture line runs from `pos` in `direction`.
///
/// The first neighbor must be a placed piece of the opposite color. The scan
/// then continues over placed opponent pieces and succeeds at the first
/// placed piece of `player`. Leaving the board, an empty cell, or a
/// suggestion ends the scan without a capture.
#[instrument(skip(board))]
pub fn is_valid_line(board: &Board, player: Color, pos: Position, direction: Direction) -> bool {
    let opponent = player.opposite();

    let mut next = pos.step(direction);
    match next.and_then(|p| board.cell(p)) {
        Some(piece) if piece.is_placed_of(opponent) => {}
        _ => return false,
    }

    next = next.and_then(|p| p.step(direction));
    while let Some(current) = next {
        match board.cell(current) {
            Some(piece) if piece.is_placed_of(player) => return true,
            Some(piece) if piece.is_placed_of(opponent) => {}
            _ => return false,
        }
        next = current.step(direction);
    }

    false
}

/// Keeps only the adjacency directions that lead to a capture line.
#[instrument(skip(board, adjacency))]
pub fn lines_from_adjacency(
    board: &Board,
    adjacency: &DirectionMask,
    player: Color,
    pos: Position,
) -> DirectionMask {
    let mut lines = DirectionMask::empty();
    for direction in adjacency.directions() {
        lines.set(direction, is_valid_line(board, player, pos, direction));
    }
    lines
}

/// Every direction from `pos` in which `player` would capture.
#[instrument(skip(board))]
pub fn capture_lines(board: &Board, player: Color, pos: Position) -> DirectionMask {
    let adjacency = adjacent_opponents(board, player.opposite(), pos);
    lines_from_adjacency(board, &adjacency, player, pos)
}
