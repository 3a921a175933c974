//! Phase-specific game states with consuming transitions.
//!
//! Each phase is its own type: a [`Config`] starts into a
//! [`GameInProgress`], and a move either returns a new in-progress state or
//! a [`GameFinished`] that always carries an outcome. Illegal transitions
//! (moving in a finished game, reading a winner mid-game) are
//! unrepresentable rather than checked at run time.

use crate::board::Board;
use crate::config::Config;
use crate::invariants::assert_invariants;
use crate::rules;
use crate::types::{Cell, Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Starting a game
// ─────────────────────────────────────────────────────────────

impl Config {
    /// Starts a game with this configuration (consumes the config, returns
    /// the in-progress state).
    ///
    /// The board starts empty and X always moves first.
    #[instrument]
    pub fn start(self) -> GameInProgress {
        GameInProgress {
            board: Board::new(self.grid_size()),
            to_move: Player::X,
            config: self,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Game in progress, accepting moves.
///
/// Invariants enforced by type:
/// - `to_move` alternates
/// - no outcome yet (the outcome lives in [`GameFinished`])
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameInProgress {
    pub(crate) config: Config,
    pub(crate) board: Board,
    pub(crate) to_move: Player,
}

impl GameInProgress {
    /// Places the current player's mark at `(row, col)`, consuming self and
    /// transitioning to the next state.
    ///
    /// Validation runs before anything is written, so an `Err` means the
    /// caller's state is unchanged. A winning or board-filling move returns
    /// the finished phase; any other move hands the turn to the opponent.
    #[instrument(skip(self))]
    pub fn place(mut self, row: usize, col: usize) -> Result<GameTransition, MoveError> {
        let grid_size = self.config.grid_size();
        if row >= grid_size || col >= grid_size {
            return Err(MoveError::OutOfBounds { row, col });
        }
        if !self.board.is_empty(row, col) {
            return Err(MoveError::Occupied { row, col });
        }

        let player = self.to_move;
        self.board.set(row, col, Cell::Mark(player));

        if rules::check_win(&self.board, row, col, player, self.config.win_streak()) {
            return Ok(GameTransition::Finished(GameFinished {
                config: self.config,
                board: self.board,
                outcome: Outcome::Win(player),
            }));
        }

        // Win is checked first: a move that both completes a streak and
        // fills the board is a win, not a draw.
        if rules::is_full(&self.board) {
            return Ok(GameTransition::Finished(GameFinished {
                config: self.config,
                board: self.board,
                outcome: Outcome::Draw,
            }));
        }

        self.to_move = player.opponent();
        assert_invariants(&self);
        Ok(GameTransition::InProgress(self))
    }

    /// Returns the configuration the game was started with.
    pub fn config(&self) -> Config {
        self.config
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Game finished, outcome determined.
///
/// The outcome is always present, not `Option`; reaching this type is the
/// proof the game ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameFinished {
    config: Config,
    board: Board,
    outcome: Outcome,
}

impl GameFinished {
    /// Returns the configuration the game was played under.
    pub fn config(&self) -> Config {
        self.config
    }

    /// Returns the final board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the winner, or `None` for a draw.
    pub fn winner(&self) -> Option<Player> {
        self.outcome.winner()
    }
}

// ─────────────────────────────────────────────────────────────
//  Transition Type
// ─────────────────────────────────────────────────────────────

/// Result of placing a mark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameTransition {
    /// Game continues.
    InProgress(GameInProgress),
    /// Game finished.
    Finished(GameFinished),
}

/// Error produced when a move is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The coordinates fall outside the board.
    #[display("cell ({row}, {col}) is outside the board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The cell already holds a mark.
    #[display("cell ({row}, {col}) is already occupied")]
    Occupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The game has already finished.
    #[display("the game is already over")]
    GameOver,

    /// No game has been started yet.
    #[display("no game has been started")]
    NotStarted,
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_produces_empty_board_with_x_to_move() {
        let game = Config::default().start();
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.board().size(), 3);
        assert!(game.board().cells().all(|cell| cell == Cell::Empty));
    }

    #[test]
    fn test_place_alternates_turns() {
        let game = Config::default().start();
        let game = match game.place(0, 0).expect("legal move") {
            GameTransition::InProgress(game) => game,
            GameTransition::Finished(_) => panic!("game should continue"),
        };
        assert_eq!(game.to_move(), Player::O);
        assert_eq!(game.board().get(0, 0), Some(Cell::Mark(Player::X)));
    }

    #[test]
    fn test_place_rejects_out_of_bounds() {
        let game = Config::default().start();
        assert_eq!(
            game.place(0, 3),
            Err(MoveError::OutOfBounds { row: 0, col: 3 })
        );
    }

    #[test]
    fn test_place_rejects_occupied_cell() {
        let game = Config::default().start();
        let game = match game.place(1, 1).expect("legal move") {
            GameTransition::InProgress(game) => game,
            GameTransition::Finished(_) => panic!("game should continue"),
        };
        assert_eq!(game.place(1, 1), Err(MoveError::Occupied { row: 1, col: 1 }));
    }
}
