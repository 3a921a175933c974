//! Input events from the presentation layer.
//!
//! Events are plain data: a frontend forwards user intent without linking
//! against any game logic, and the aggregate in [`crate::GameState`]
//! interprets them. Keeping the boundary serializable also makes sessions
//! replayable from a logged event stream.

use crate::config::ConfigError;
use crate::game::MoveError;
use serde::{Deserialize, Serialize};

/// A user action delivered to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// Apply a configuration and start a game with it.
    Configure {
        /// Board side length.
        grid_size: usize,
        /// Consecutive marks required to win.
        win_streak: usize,
    },

    /// A click on the cell at `(row, col)`.
    CellClick {
        /// Clicked row.
        row: usize,
        /// Clicked column.
        col: usize,
    },

    /// Return to configuration, keeping the current settings.
    Reset,
}

/// Any error produced while handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The configuration was rejected.
    #[display("{_0}")]
    Config(ConfigError),

    /// The move was rejected.
    #[display("{_0}")]
    Move(MoveError),
}

impl std::error::Error for GameError {}

impl From<ConfigError> for GameError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<MoveError> for GameError {
    fn from(err: MoveError) -> Self {
        Self::Move(err)
    }
}
