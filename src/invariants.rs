//! First-class invariants over in-progress games.
//!
//! The typestate transitions make most illegal states unrepresentable; the
//! invariants here catch the remaining data-level properties that the types
//! cannot. They are checked in debug builds after every applied move and
//! are testable independently.

use crate::game::GameInProgress;
use crate::types::Player;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns `Ok(())` if every invariant holds, or the list of violations
    /// otherwise.
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

/// Invariant: mark counts match the turn.
///
/// X moves first and turns alternate, so X and O counts are equal when X is
/// to move and X leads by exactly one when O is to move.
pub struct MarkBalance;

impl Invariant<GameInProgress> for MarkBalance {
    fn holds(game: &GameInProgress) -> bool {
        let count = |player| {
            game.board
                .cells()
                .filter(|cell| cell.player() == Some(player))
                .count()
        };
        let x = count(Player::X);
        let o = count(Player::O);

        match game.to_move {
            Player::X => x == o,
            Player::O => x == o + 1,
        }
    }

    fn description() -> &'static str {
        "mark counts match the player to move"
    }
}

/// Invariant: the board shape matches the configuration.
pub struct GridShape;

impl Invariant<GameInProgress> for GridShape {
    fn holds(game: &GameInProgress) -> bool {
        game.board.size() == game.config.grid_size()
    }

    fn description() -> &'static str {
        "board side length matches the configured grid size"
    }
}

/// All in-progress invariants as a composable set.
pub type GameInvariants = (MarkBalance, GridShape);

/// Asserts all invariants after a move, in debug builds only.
pub(crate) fn assert_invariants(game: &GameInProgress) {
    debug_assert!(MarkBalance::holds(game), "{}", MarkBalance::description());
    debug_assert!(GridShape::holds(game), "{}", GridShape::description());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::game::GameTransition;
    use crate::types::Cell;

    fn after_one_move() -> GameInProgress {
        let game = Config::default().start();
        match game.place(1, 1).expect("legal move") {
            GameTransition::InProgress(game) => game,
            GameTransition::Finished(_) => panic!("game should continue"),
        }
    }

    #[test]
    fn test_invariants_hold_for_fresh_game() {
        let game = Config::default().start();
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariants_hold_after_move() {
        let game = after_one_move();
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_mark_balance_detects_corruption() {
        let mut game = after_one_move();
        // Corrupt the board: O marks a second cell without a turn passing.
        game.board.set(0, 0, Cell::Mark(Player::O));
        game.board.set(0, 1, Cell::Mark(Player::O));

        assert!(!MarkBalance::holds(&game));
        let violations = GameInvariants::check_all(&game).expect_err("corrupt state");
        assert_eq!(
            violations,
            vec![InvariantViolation::new(MarkBalance::description())]
        );
    }

    #[test]
    fn test_grid_shape_detects_mismatched_board() {
        let mut game = Config::default().start();
        game.board = crate::board::Board::new(4);

        assert!(!GridShape::holds(&game));
    }
}
