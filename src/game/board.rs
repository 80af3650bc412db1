use std::fmt;

use crate::error::MoveError;

pub const ROWS: usize = 3;
pub const COLS: usize = 4;

/// What a single grid cell may hold. The out-of-bounds sentinel lives on the
/// boundary type [`Piece`](super::Piece), not here, so it can never be stored
/// on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    /// Single-character symbol used when rendering the board.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

/// The 3x4 Piezas grid. Row 0 is the bottom row; pieces settle on the lowest
/// empty row of their column, so occupied cells in a column always form a
/// contiguous block from row 0 upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position, or `None` when out of bounds.
    /// Row 0 is the bottom, row 2 is the top.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Clear every cell back to `Empty`.
    pub fn clear(&mut self) {
        self.cells = [[Cell::Empty; COLS]; ROWS];
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[ROWS - 1][col] != Cell::Empty
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }

        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull(col));
        }

        // Find the lowest empty row in this column
        for row in 0..ROWS {
            if self.cells[row][col] == Cell::Empty {
                self.cells[row][col] = cell;
                return Ok(row);
            }
        }

        unreachable!("Column should not be full if is_column_full returned false");
    }

    /// Longest contiguous run of `cell` along any single row (left to right)
    /// or any single column (bottom to top). Runs never wrap and never
    /// combine across the two axes; diagonals are not considered.
    pub fn max_run(&self, cell: Cell) -> usize {
        let mut best = 0;

        for row in 0..ROWS {
            let mut run = 0;
            for col in 0..COLS {
                if self.cells[row][col] == cell {
                    run += 1;
                    best = best.max(run);
                } else {
                    run = 0;
                }
            }
        }

        for col in 0..COLS {
            let mut run = 0;
            for row in 0..ROWS {
                if self.cells[row][col] == cell {
                    run += 1;
                    best = best.max(run);
                } else {
                    run = 0;
                }
            }
        }

        best
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    /// Renders top row first so the output reads like the physical board.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..ROWS).rev() {
            for col in 0..COLS {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.cells[row][col].symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
