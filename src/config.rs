//! Game configuration: grid size and win-streak length.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Smallest allowed grid side length.
pub const GRID_SIZE_MIN: usize = 3;

/// Largest allowed grid side length.
pub const GRID_SIZE_MAX: usize = 10;

/// Smallest allowed win streak.
pub const WIN_STREAK_MIN: usize = 3;

/// Validated game configuration.
///
/// Holds the board side length and the number of consecutive marks needed to
/// win, with the invariant `3 <= win_streak <= grid_size <= 10`. Values are
/// checked eagerly on construction and are immutable for the duration of a
/// game. The exported range constants let the presentation layer bound its
/// input widgets to the same values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Config {
    grid_size: usize,
    win_streak: usize,
}

impl Config {
    /// Creates a configuration, validating both ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::GridSize`] or [`ConfigError::WinStreak`] when a
    /// value falls outside its allowed range. No clamping is performed; the
    /// caller re-prompts with corrected values.
    #[instrument]
    pub fn new(grid_size: usize, win_streak: usize) -> Result<Self, ConfigError> {
        if !(GRID_SIZE_MIN..=GRID_SIZE_MAX).contains(&grid_size) {
            return Err(ConfigError::GridSize(grid_size));
        }
        if !(WIN_STREAK_MIN..=grid_size).contains(&win_streak) {
            return Err(ConfigError::WinStreak {
                win_streak,
                grid_size,
            });
        }
        Ok(Self {
            grid_size,
            win_streak,
        })
    }

    /// Board side length.
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Consecutive marks required to win.
    pub fn win_streak(&self) -> usize {
        self.win_streak
    }
}

impl Default for Config {
    /// The classic game: a 3x3 board with a 3-mark streak.
    fn default() -> Self {
        Self {
            grid_size: 3,
            win_streak: 3,
        }
    }
}

/// Error produced when a configuration is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ConfigError {
    /// Grid size outside the allowed range.
    #[display("grid size {_0} must be between 3 and 10")]
    GridSize(usize),

    /// Win streak outside `3..=grid_size`.
    #[display("win streak {win_streak} must be between 3 and the grid size {grid_size}")]
    WinStreak {
        /// The rejected streak length.
        win_streak: usize,
        /// The grid size it was checked against.
        grid_size: usize,
    },

    /// Configuration attempted while a game is running or finished.
    #[display("configuration cannot change once a game has started")]
    AlreadyStarted,
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_full_valid_range() {
        for grid_size in GRID_SIZE_MIN..=GRID_SIZE_MAX {
            for win_streak in WIN_STREAK_MIN..=grid_size {
                let config = Config::new(grid_size, win_streak).expect("valid configuration");
                assert_eq!(config.grid_size(), grid_size);
                assert_eq!(config.win_streak(), win_streak);
            }
        }
    }

    #[test]
    fn test_rejects_grid_size_out_of_range() {
        assert_eq!(Config::new(2, 3), Err(ConfigError::GridSize(2)));
        assert_eq!(Config::new(11, 3), Err(ConfigError::GridSize(11)));
    }

    #[test]
    fn test_rejects_win_streak_longer_than_grid() {
        assert_eq!(
            Config::new(3, 5),
            Err(ConfigError::WinStreak {
                win_streak: 5,
                grid_size: 3
            })
        );
    }

    #[test]
    fn test_rejects_win_streak_below_minimum() {
        assert_eq!(
            Config::new(5, 2),
            Err(ConfigError::WinStreak {
                win_streak: 2,
                grid_size: 5
            })
        );
    }

    #[test]
    fn test_default_is_classic_three_by_three() {
        let config = Config::default();
        assert_eq!(config.grid_size(), 3);
        assert_eq!(config.win_streak(), 3);
    }
}
