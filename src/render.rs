//! Plain-text rendering of boards, scores and results.

use crate::config::OthelloConfig;
use strictly_othello::{BOARD_SIZE, Color, GameState, Outcome, Piece};

/// Renders the board as a bordered grid with row and column labels.
///
/// Placed pieces are upper case, suggestions lower case (or blank when
/// `show_suggestions` is off).
pub fn board(game: &GameState, show_suggestions: bool) -> String {
    let cells = game.board().cells();
    let mut out = String::from("     ");
    let header: Vec<String> = (0..BOARD_SIZE).map(|c| c.to_string()).collect();
    out.push_str(&header.join("    "));
    out.push('\n');

    for (r, row) in cells.iter().enumerate() {
        out.push_str(&format!("{}  ||", r));
        for cell in row {
            out.push(cell_char(*cell, show_suggestions));
            out.push_str(" || ");
        }
        out.push('\n');
        if r + 1 != BOARD_SIZE {
            out.push_str("   =========================================\n");
        }
    }
    out
}

/// Renders both scores.
pub fn scores(game: &GameState) -> String {
    format!(
        "Player 1 score: {}\nPlayer 2 score: {}\n",
        game.player1_score(),
        game.player2_score()
    )
}

/// Announces the result of a finished game.
pub fn winner(outcome: Outcome, config: &OthelloConfig) -> String {
    match outcome {
        Outcome::Winner(color) => format!("{} wins!", config.player_name(color)),
        Outcome::Draw => "It's a tie!".to_string(),
    }
}

/// Full status view: turn, scores, board and either whose move it is or the result.
pub fn summary(game: &GameState, config: &OthelloConfig) -> String {
    let mut out = format!("Turn number: {}\n", game.turn_number());
    out.push_str(&scores(game));
    out.push('\n');
    out.push_str(&board(game, *config.show_suggestions()));
    out.push('\n');
    match game.outcome() {
        Some(outcome) => out.push_str(&winner(outcome, config)),
        None => out.push_str(&format!(
            "{} ({}) to move",
            config.player_name(game.current_player()),
            game.current_player()
        )),
    }
    out.push('\n');
    out
}

fn cell_char(cell: Option<Piece>, show_suggestions: bool) -> char {
    match cell {
        None => ' ',
        Some(piece) if piece.is_suggestion() && !show_suggestions => ' ',
        Some(piece) => match (piece.color(), piece.is_placed()) {
            (Color::Black, true) => 'B',
            (Color::Black, false) => 'b',
            (Color::White, true) => 'W',
            (Color::White, false) => 'w',
        },
    }
}
