//! Streak tic-tac-toe game core.
//!
//! A configurable n-by-n tic-tac-toe engine: two players alternate placing
//! marks on a square grid until one completes a streak of consecutive marks
//! along a row, column, or diagonal, or the board fills for a draw. Board
//! side length and streak length are chosen per game.
//!
//! # Architecture
//!
//! - **Typestate phases**: [`Config`] starts into [`GameInProgress`]; a
//!   move consumes it and returns either a new in-progress state or a
//!   [`GameFinished`] that always carries an [`Outcome`]
//! - **Rules**: pure win/draw evaluation over a [`Board`], independent of
//!   the game lifecycle
//! - **Aggregate**: [`GameState`] wraps the phases in one serializable enum
//!   and interprets presentation [`Event`]s
//! - **Invariants**: first-class checks over in-progress states, asserted
//!   in debug builds
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Event, GameState, Phase, Player};
//!
//! let mut game = GameState::new();
//! game.handle(Event::Configure { grid_size: 3, win_streak: 3 })?;
//! assert_eq!(game.phase(), Phase::Playing);
//! assert_eq!(game.to_move(), Some(Player::X));
//!
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
//!     game.handle(Event::CellClick { row, col })?;
//! }
//! assert_eq!(game.winner(), Some(Player::X));
//! # Ok::<(), tictactoe_core::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod config;
mod event;
mod game;
mod invariants;
mod rules;
mod state;
mod types;

// Crate-level exports - Core types
pub use types::{Cell, Outcome, Player};

// Crate-level exports - Board
pub use board::Board;

// Crate-level exports - Configuration
pub use config::{Config, ConfigError, GRID_SIZE_MAX, GRID_SIZE_MIN, WIN_STREAK_MIN};

// Crate-level exports - Typestate phases
pub use game::{GameFinished, GameInProgress, GameTransition, MoveError};

// Crate-level exports - Rules
pub use rules::{check_win, is_full, Axis};

// Crate-level exports - Invariants
pub use invariants::{
    GameInvariants, GridShape, Invariant, InvariantSet, InvariantViolation, MarkBalance,
};

// Crate-level exports - Presentation boundary
pub use event::{Event, GameError};
pub use state::{GameState, Phase};
