//! Consistency checks between scores, suggestions and the board.
//!
//! `play_turn` runs the full set after every applied move in debug builds.
//! `save::load` runs the score check on every build, since a save file is
//! outside input.

use crate::game::GameState;

mod scores;
mod suggestions;

pub use scores::ScoreMatchesBoard;
pub use suggestions::SuggestionsMatchLegalMoves;

/// One consistency rule over a game state.
pub trait Invariant<S> {
    /// False when `state` breaks the rule. Implementations log the details.
    fn holds(state: &S) -> bool;

    /// The rule in one sentence, used in violation reports.
    fn description() -> &'static str;
}

/// A rule that failed, named by its description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// The failed rule's [`Invariant::description`].
    pub description: String,
}

impl InvariantViolation {
    /// Wraps a rule description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Rules checked as a group, reporting every failure rather than the first.
pub trait InvariantSet<S> {
    /// Runs each rule in order and returns the failures, if any.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Scores agree with the pieces, and hints agree with the legal moves.
pub type OthelloInvariants = (ScoreMatchesBoard, SuggestionsMatchLegalMoves);

/// One-line report of the failed rules, separated by `; `.
pub fn describe(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(|v| v.description.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Panics on a broken game state in debug builds; release builds skip the check.
pub fn assert_invariants(game: &GameState) {
    if cfg!(debug_assertions) {
        if let Err(violations) = OthelloInvariants::check_all(game) {
            panic!("Invariant violation: {}", describe(&violations));
        }
    }
}
