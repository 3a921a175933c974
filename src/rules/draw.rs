//! Draw detection.

use crate::board::Board;
use crate::types::Cell;
use tracing::instrument;

/// Checks if the board is full (no empty cells remain).
///
/// A move that fills the last cell without completing a streak ends the
/// game in a draw, so callers evaluate the win rule first.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().all(|cell| cell != Cell::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new(3);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new(3);
        board.set(1, 1, Cell::Mark(Player::X));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(3);
        for row in 0..3 {
            for col in 0..3 {
                let player = if (row + col) % 2 == 0 { Player::X } else { Player::O };
                board.set(row, col, Cell::Mark(player));
            }
        }
        assert!(is_full(&board));
    }
}
