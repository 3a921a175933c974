//! Game rules for streak tic-tac-toe.
//!
//! Pure functions for evaluating a board position. Rules are separated from
//! board storage so the game states stay thin and the logic tests without
//! any game lifecycle setup.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{check_win, Axis};
