//! Flat `key:value` save format.
//!
//! ```text
//! finished:false
//! turnNumber:0
//! player1Score:2
//! player2Score:2
//! currentPlayer:BLACK
//! board:
//! null;null;null;null;null;null;null;null;
//! ...
//! ```
//!
//! Rows hold eight cell tokens, each followed by `;`: `B`/`W` for placed
//! pieces, `b`/`w` for suggestions, `null` for empty cells. External
//! callers depend on this exact shape.

use crate::board::Board;
use crate::error::OthelloError;
use crate::game::GameState;
use crate::invariants::{Invariant, ScoreMatchesBoard};
use crate::types::{BOARD_SIZE, Color, Piece, Position};
use std::str::FromStr;
use tracing::{debug, instrument, warn};

const FINISHED: &str = "finished";
const TURN_NUMBER: &str = "turnNumber";
const PLAYER1_SCORE: &str = "player1Score";
const PLAYER2_SCORE: &str = "player2Score";
const CURRENT_PLAYER: &str = "currentPlayer";
const BOARD: &str = "board";

/// Serializes a game into the save format.
#[instrument(skip(game), fields(turn = game.turn_number()))]
pub fn to_save_string(game: &GameState) -> String {
    let header = [
        (FINISHED, game.is_finished().to_string()),
        (TURN_NUMBER, game.turn_number().to_string()),
        (PLAYER1_SCORE, game.player1_score().to_string()),
        (PLAYER2_SCORE, game.player2_score().to_string()),
        (CURRENT_PLAYER, game.current_player().to_string()),
        (BOARD, String::new()),
    ];

    let mut out = String::new();
    for (key, value) in header {
        out.push_str(key);
        out.push(':');
        out.push_str(&value);
        out.push('\n');
    }

    let cells = game.board().cells();
    for row in cells.iter() {
        for cell in row.iter() {
            out.push_str(cell_token(*cell));
            out.push(';');
        }
        out.push('\n');
    }
    out
}

/// Writes a game in the save format to `writer`.
pub fn save<W: std::io::Write>(game: &GameState, writer: &mut W) -> std::io::Result<()> {
    writer.write_all(to_save_string(game).as_bytes())
}

/// Rebuilds a game from save data.
///
/// Unknown keys are ignored. A finished game loads as finished; it is not
/// replaced with a new game. Suggestions are recomputed for the player to
/// move.
///
/// # Errors
///
/// [`OthelloError::MalformedSave`] when a required key is missing, a value
/// does not parse, the board section is short or holds unknown cell tokens,
/// or the scores disagree with the pieces on the board.
#[instrument(skip(input), fields(len = input.len()))]
pub fn load(input: &str) -> Result<GameState, OthelloError> {
    let mut finished = None;
    let mut turn_number = None;
    let mut player1_score = None;
    let mut player2_score = None;
    let mut current_player = None;
    let mut board = None;

    let mut tokens = input.split_whitespace();
    while let Some(token) = tokens.next() {
        let (key, value) = token.split_once(':').unwrap_or((token, ""));
        match key {
            FINISHED => finished = Some(parse_value::<bool>(key, value)?),
            TURN_NUMBER => turn_number = Some(parse_value::<u32>(key, value)?),
            PLAYER1_SCORE => player1_score = Some(parse_value::<u32>(key, value)?),
            PLAYER2_SCORE => player2_score = Some(parse_value::<u32>(key, value)?),
            CURRENT_PLAYER => current_player = Some(parse_value::<Color>(key, value)?),
            BOARD => board = Some(load_board(&mut tokens)?),
            _ => debug!(key, "Ignoring unknown save key"),
        }
    }

    let game = GameState::from_parts(
        board.ok_or_else(|| missing(BOARD))?,
        turn_number.ok_or_else(|| missing(TURN_NUMBER))?,
        player1_score.ok_or_else(|| missing(PLAYER1_SCORE))?,
        player2_score.ok_or_else(|| missing(PLAYER2_SCORE))?,
        current_player.ok_or_else(|| missing(CURRENT_PLAYER))?,
    );

    if !ScoreMatchesBoard::holds(&game) {
        return Err(OthelloError::malformed(format!(
            "scores {}/{} do not match the pieces on the board",
            game.player1_score(),
            game.player2_score()
        )));
    }

    if finished.is_some_and(|flag| flag != game.is_finished()) {
        warn!(
            saved = ?finished,
            actual = game.is_finished(),
            "Saved finished flag disagrees with board"
        );
    }

    debug!(turn = game.turn_number(), "Game loaded");
    Ok(game)
}

/// Reads a game from `reader`.
pub fn load_from<R: std::io::Read>(reader: &mut R) -> Result<GameState, OthelloError> {
    let mut input = String::new();
    reader
        .read_to_string(&mut input)
        .map_err(|e| OthelloError::malformed(format!("could not read save data: {}", e)))?;
    load(&input)
}

/// Reads only the turn number, without loading the board.
#[instrument(skip(input))]
pub fn peek_turn_number(input: &str) -> Result<u32, OthelloError> {
    input
        .split_whitespace()
        .filter_map(|token| token.split_once(':'))
        .find(|(key, _)| *key == TURN_NUMBER)
        .map(|(key, value)| parse_value::<u32>(key, value))
        .unwrap_or_else(|| Err(missing(TURN_NUMBER)))
}

/// Consumes exactly eight row tokens.
fn load_board<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Result<Board, OthelloError> {
    let mut board = Board::empty();
    for row in 0..BOARD_SIZE {
        let line = tokens.next().ok_or_else(|| {
            OthelloError::malformed(format!("board has {} rows, expected {}", row, BOARD_SIZE))
        })?;

        let cells: Vec<&str> = line.split_terminator(';').collect();
        if cells.len() != BOARD_SIZE {
            return Err(OthelloError::malformed(format!(
                "board row {} has {} cells, expected {}",
                row,
                cells.len(),
                BOARD_SIZE
            )));
        }

        for (col, token) in cells.into_iter().enumerate() {
            if let Some(piece) = parse_cell(token, row, col)? {
                board.place_at(Position::new(row, col)?, piece)?;
            }
        }
    }
    Ok(board)
}

fn cell_token(cell: Option<Piece>) -> &'static str {
    match cell {
        None => "null",
        Some(piece) => match (piece.color(), piece.is_placed()) {
            (Color::Black, true) => "B",
            (Color::Black, false) => "b",
            (Color::White, true) => "W",
            (Color::White, false) => "w",
        },
    }
}

fn parse_cell(token: &str, row: usize, col: usize) -> Result<Option<Piece>, OthelloError> {
    match token {
        "B" => Ok(Some(Piece::placed(Color::Black))),
        "b" => Ok(Some(Piece::suggestion(Color::Black))),
        "W" => Ok(Some(Piece::placed(Color::White))),
        "w" => Ok(Some(Piece::suggestion(Color::White))),
        "null" => Ok(None),
        other => Err(OthelloError::malformed(format!(
            "unknown cell token {:?} at ({}, {})",
            other, row, col
        ))),
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T, OthelloError> {
    value
        .parse()
        .map_err(|_| OthelloError::malformed(format!("bad value {:?} for key {}", value, key)))
}

fn missing(key: &str) -> OthelloError {
    OthelloError::malformed(format!("missing key {}", key))
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPENING: &str = "finished:false
turnNumber:0
player1Score:2
player2Score:2
currentPlayer:BLACK
board:
null;null;null;null;null;null;null;null;
null;null;null;null;null;null;null;null;
null;null;null;b;null;null;null;null;
null;null;b;W;B;null;null;null;
null;null;null;B;W;b;null;null;
null;null;null;null;b;null;null;null;
null;null;null;null;null;null;null;null;
null;null;null;null;null;null;null;null;
";

    #[test]
    fn test_new_game_serializes_exactly() {
        assert_eq!(to_save_string(&GameState::new_game()), OPENING);
    }

    #[test]
    fn test_save_writes_same_bytes() {
        let mut buf = Vec::new();
        save(&GameState::new_game(), &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), OPENING);
    }

    #[test]
    fn test_load_opening() {
        let game = load(OPENING).unwrap();
        assert_eq!(game, GameState::new_game());
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let input = format!("{OPENING}\nplayer1Name:Alice\n");
        assert!(load(&input).is_ok());
    }

    #[test]
    fn test_missing_key_rejected() {
        let input = OPENING.replace("turnNumber:0\n", "");
        let err = load(&input).unwrap_err();
        assert!(err.to_string().contains("turnNumber"), "{err}");
    }

    #[test]
    fn test_bad_number_rejected() {
        let input = OPENING.replace("player1Score:2", "player1Score:two");
        assert!(matches!(load(&input), Err(OthelloError::MalformedSave { .. })));
    }

    #[test]
    fn test_bad_player_rejected() {
        let input = OPENING.replace("currentPlayer:BLACK", "currentPlayer:RED");
        assert!(load(&input).is_err());
    }

    #[test]
    fn test_bad_cell_rejected() {
        let input = OPENING.replacen("null;", "X;", 1);
        assert!(load(&input).is_err());
    }

    #[test]
    fn test_short_board_rejected() {
        let rows: Vec<&str> = OPENING.lines().take(10).collect();
        assert!(load(&rows.join("\n")).is_err());
    }

    #[test]
    fn test_inconsistent_scores_rejected() {
        let input = OPENING.replace("player2Score:2", "player2Score:5");
        let err = load(&input).unwrap_err();
        assert!(err.to_string().contains("do not match"), "{err}");
    }

    #[test]
    fn test_peek_turn_number() {
        let input = OPENING.replace("turnNumber:0", "turnNumber:17");
        assert_eq!(peek_turn_number(&input), Ok(17));
        assert!(peek_turn_number("board:\n").is_err());
    }

    #[test]
    fn test_load_from_reader() {
        let mut reader = std::io::Cursor::new(OPENING.as_bytes());
        assert_eq!(load_from(&mut reader).unwrap(), GameState::new_game());
    }
}
