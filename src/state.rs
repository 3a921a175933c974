//! Serializable aggregate over the game phases.
//!
//! The typestate transitions in [`crate::game`] consume and return values,
//! which is awkward for a presentation layer that owns one long-lived game.
//! [`GameState`] wraps the phases in a single enum that can be held by
//! `&mut`, fed [`Event`]s, and serialized whole.

use crate::board::Board;
use crate::config::{Config, ConfigError};
use crate::event::{Event, GameError};
use crate::game::{GameFinished, GameInProgress, GameTransition, MoveError};
use crate::types::{Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Coarse lifecycle phase, for presentation dispatch.
///
/// A finished game still reports [`Phase::Playing`]: the board stays
/// visible with its final marks until the user resets, and only
/// [`Event::Reset`] returns to [`Phase::Configuring`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Collecting configuration; no board exists yet.
    Configuring,
    /// A board exists and is rendered.
    Playing,
}

/// A game in any phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// Collecting configuration before a game starts.
    Configuring {
        /// Settings prefilled into the configuration form.
        config: Config,
    },
    /// Game running.
    Playing(GameInProgress),
    /// Game over, final board still displayed.
    Finished(GameFinished),
}

impl GameState {
    /// Creates a state ready to configure, prefilled with the classic 3x3
    /// defaults.
    pub fn new() -> Self {
        GameState::Configuring {
            config: Config::default(),
        }
    }

    /// Handles one presentation event.
    ///
    /// This is the single entry point a frontend needs: wire each widget to
    /// an [`Event`] and surface the returned error text on rejection.
    #[instrument(skip(self))]
    pub fn handle(&mut self, event: Event) -> Result<(), GameError> {
        match event {
            Event::Configure {
                grid_size,
                win_streak,
            } => {
                let config = Config::new(grid_size, win_streak)?;
                self.start(config)?;
            }
            Event::CellClick { row, col } => self.place_mark(row, col)?,
            Event::Reset => self.reset(),
        }
        Ok(())
    }

    /// Starts a game with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::AlreadyStarted`] unless the state is
    /// currently configuring.
    #[instrument(skip(self, config), fields(grid_size = config.grid_size(), win_streak = config.win_streak()))]
    pub fn start(&mut self, config: Config) -> Result<(), ConfigError> {
        match self {
            GameState::Configuring { .. } => {
                debug!("starting game");
                *self = GameState::Playing(config.start());
                Ok(())
            }
            GameState::Playing(_) | GameState::Finished(_) => {
                warn!("configuration rejected: game already started");
                Err(ConfigError::AlreadyStarted)
            }
        }
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// On `Err` the state is unchanged, so a frontend can report the
    /// rejection and keep accepting input.
    #[instrument(skip(self))]
    pub fn place_mark(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        match self {
            GameState::Configuring { .. } => Err(MoveError::NotStarted),
            GameState::Finished(_) => Err(MoveError::GameOver),
            GameState::Playing(game) => match game.clone().place(row, col) {
                Ok(next) => {
                    if let GameTransition::Finished(finished) = &next {
                        debug!(outcome = %finished.outcome(), "game over");
                    }
                    *self = next.into();
                    Ok(())
                }
                Err(err) => {
                    warn!(error = %err, "move rejected");
                    Err(err)
                }
            },
        }
    }

    /// Returns to configuration, keeping the current settings prefilled for
    /// the next game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("returning to configuration");
        *self = GameState::Configuring {
            config: self.config(),
        };
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        match self {
            GameState::Configuring { .. } => Phase::Configuring,
            GameState::Playing(_) | GameState::Finished(_) => Phase::Playing,
        }
    }

    /// Returns the active configuration in any phase.
    pub fn config(&self) -> Config {
        match self {
            GameState::Configuring { config } => *config,
            GameState::Playing(game) => game.config(),
            GameState::Finished(game) => game.config(),
        }
    }

    /// Returns the board once a game has started.
    pub fn board(&self) -> Option<&Board> {
        match self {
            GameState::Configuring { .. } => None,
            GameState::Playing(game) => Some(game.board()),
            GameState::Finished(game) => Some(game.board()),
        }
    }

    /// Returns the player to move while the game is running.
    pub fn to_move(&self) -> Option<Player> {
        match self {
            GameState::Playing(game) => Some(game.to_move()),
            _ => None,
        }
    }

    /// Returns the outcome once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            GameState::Finished(game) => Some(game.outcome()),
            _ => None,
        }
    }

    /// Returns the winner, if the game ended with one.
    pub fn winner(&self) -> Option<Player> {
        self.outcome().and_then(|outcome| outcome.winner())
    }

    /// Returns true once the game is over.
    pub fn is_over(&self) -> bool {
        matches!(self, GameState::Finished(_))
    }

    /// Returns a status line for display.
    pub fn status_line(&self) -> String {
        match self {
            GameState::Configuring { .. } => "Ready to start".to_string(),
            GameState::Playing(game) => format!("Current Player: {}", game.to_move()),
            GameState::Finished(game) => match game.outcome() {
                Outcome::Win(player) => format!("Player {player} Wins!"),
                Outcome::Draw => "It's a Draw!".to_string(),
            },
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Phase conversions
// ─────────────────────────────────────────────────────────────

impl From<GameInProgress> for GameState {
    fn from(game: GameInProgress) -> Self {
        GameState::Playing(game)
    }
}

impl From<GameFinished> for GameState {
    fn from(game: GameFinished) -> Self {
        GameState::Finished(game)
    }
}

impl From<GameTransition> for GameState {
    fn from(transition: GameTransition) -> Self {
        match transition {
            GameTransition::InProgress(game) => game.into(),
            GameTransition::Finished(game) => game.into(),
        }
    }
}
