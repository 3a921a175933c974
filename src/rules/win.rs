//! Streak win detection.
//!
//! A move wins when it completes `win_streak` consecutive marks for the
//! moving player along any of the four board axes. Detection walks outward
//! from the cell just placed, so the cost of a check scales with the streak
//! length rather than with the board area.

use crate::board::Board;
use crate::types::{Cell, Player};
use strum::IntoEnumIterator;
use tracing::instrument;

/// The four axes a winning streak can lie on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Axis {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    Vertical,
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Axis {
    /// Unit step `(row, col)` along this axis.
    pub const fn step(self) -> (isize, isize) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::Diagonal => (1, 1),
            Axis::AntiDiagonal => (1, -1),
        }
    }
}

/// Checks whether the mark just placed at `(row, col)` completes a winning
/// streak for `player`.
///
/// Only lines through the placed cell can change the result, so the rest of
/// the board is never scanned. The cell at `(row, col)` is assumed to
/// already hold the player's mark.
#[instrument(skip(board))]
pub fn check_win(board: &Board, row: usize, col: usize, player: Player, win_streak: usize) -> bool {
    Axis::iter().any(|axis| axis_reaches(board, row, col, player, axis, win_streak))
}

/// Counts consecutive marks for `player` through `(row, col)` along `axis`,
/// stopping as soon as `target` is reached.
fn axis_reaches(
    board: &Board,
    row: usize,
    col: usize,
    player: Player,
    axis: Axis,
    target: usize,
) -> bool {
    let (dr, dc) = axis.step();
    // The placed cell itself counts toward the streak.
    let mut count = 1;
    if count >= target {
        return true;
    }
    for dir in [-1, 1] {
        let mut r = row as isize + dir * dr;
        let mut c = col as isize + dir * dc;
        while cell_at(board, r, c) == Some(Cell::Mark(player)) {
            count += 1;
            if count >= target {
                return true;
            }
            r += dir * dr;
            c += dir * dc;
        }
    }
    false
}

/// Bounds-safe lookup with signed coordinates, for walks that run past the
/// board edge.
fn cell_at(board: &Board, row: isize, col: isize) -> Option<Cell> {
    if row < 0 || col < 0 {
        return None;
    }
    board.get(row as usize, col as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(size: usize, marks: &[(usize, usize, Player)]) -> Board {
        let mut board = Board::new(size);
        for &(row, col, player) in marks {
            board.set(row, col, Cell::Mark(player));
        }
        board
    }

    #[test]
    fn test_horizontal_win_from_either_end() {
        let board = board_with(3, &[(0, 0, Player::X), (0, 1, Player::X), (0, 2, Player::X)]);
        assert!(check_win(&board, 0, 2, Player::X, 3));
        assert!(check_win(&board, 0, 0, Player::X, 3));
    }

    #[test]
    fn test_win_through_middle_of_streak() {
        // The placed cell sits between its neighbors, so both walk
        // directions contribute to the count.
        let board = board_with(3, &[(1, 0, Player::O), (1, 1, Player::O), (1, 2, Player::O)]);
        assert!(check_win(&board, 1, 1, Player::O, 3));
    }

    #[test]
    fn test_vertical_win() {
        let board = board_with(4, &[(1, 2, Player::X), (2, 2, Player::X), (3, 2, Player::X)]);
        assert!(check_win(&board, 3, 2, Player::X, 3));
    }

    #[test]
    fn test_diagonal_win() {
        let board = board_with(3, &[(0, 0, Player::O), (1, 1, Player::O), (2, 2, Player::O)]);
        assert!(check_win(&board, 1, 1, Player::O, 3));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let board = board_with(3, &[(0, 2, Player::X), (1, 1, Player::X), (2, 0, Player::X)]);
        assert!(check_win(&board, 2, 0, Player::X, 3));
    }

    #[test]
    fn test_opponent_mark_breaks_streak() {
        let board = board_with(
            5,
            &[
                (0, 0, Player::X),
                (0, 1, Player::X),
                (0, 2, Player::O),
                (0, 3, Player::X),
                (0, 4, Player::X),
            ],
        );
        assert!(!check_win(&board, 0, 1, Player::X, 3));
        assert!(!check_win(&board, 0, 3, Player::X, 3));
    }

    #[test]
    fn test_streak_shorter_than_target() {
        let board = board_with(5, &[(2, 0, Player::X), (2, 1, Player::X), (2, 2, Player::X)]);
        assert!(!check_win(&board, 2, 2, Player::X, 4));
    }

    #[test]
    fn test_streak_longer_than_target_still_wins() {
        let board = board_with(
            5,
            &[
                (1, 1, Player::O),
                (2, 1, Player::O),
                (3, 1, Player::O),
                (4, 1, Player::O),
            ],
        );
        assert!(check_win(&board, 2, 1, Player::O, 3));
    }

    #[test]
    fn test_walks_stop_at_board_edge() {
        // From a corner every axis immediately leaves the board in one
        // direction; the walk must not panic or wrap.
        let board = board_with(3, &[(0, 0, Player::X)]);
        assert!(!check_win(&board, 0, 0, Player::X, 3));
    }
}
