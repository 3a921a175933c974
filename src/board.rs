//! Board storage for an n-by-n grid.

use crate::types::Cell;
use serde::{Deserialize, Serialize};

/// Square game board, cells stored in row-major order.
///
/// Boards are created and written by the game states; the public surface is
/// read-only so the presentation layer renders from it without being able to
/// bypass move validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board with the given side length.
    pub(crate) fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Board side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the cell at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.size && col < self.size {
            Some(self.cells[row * self.size + col])
        } else {
            None
        }
    }

    /// Checks if the cell at `(row, col)` is in bounds and empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Cell::Empty))
    }

    /// Iterates all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Iterates the board row by row, for rendering.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// Writes a cell. Callers validate bounds first.
    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.size + col] = cell;
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row_index, row) in self.rows().enumerate() {
            if row_index > 0 {
                writeln!(f)?;
                for col in 0..self.size {
                    if col > 0 {
                        write!(f, "+")?;
                    }
                    write!(f, "-")?;
                }
                writeln!(f)?;
            }
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, "|")?;
                }
                match cell {
                    Cell::Empty => write!(f, ".")?,
                    Cell::Mark(player) => write!(f, "{player}")?,
                }
            }
        }
        Ok(())
    }
}
