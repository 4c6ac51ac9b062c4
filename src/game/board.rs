use crate::error::{ConfigError, PlacementError};

use super::player::Piece;

/// Smallest run length a game can be played to.
pub const MIN_WIN_LENGTH: usize = 3;

/// Largest run length a game can be played to (a 32x32 grid).
pub const MAX_WIN_LENGTH: usize = 16;

/// Step directions scanned from every cell: right, down, down-right, up-right.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    /// The piece occupying this cell, if any
    pub fn piece(self) -> Option<Piece> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Piece::X),
            Cell::O => Some(Piece::O),
        }
    }

    /// Character used for this cell in plain-text output
    pub fn marker(self) -> char {
        self.piece().map_or('_', Piece::marker)
    }
}

/// A square grid whose side is twice the winning run length.
///
/// Row 0 is the top, row `rows() - 1` is the bottom. Pieces only ever enter
/// through [`Board::drop_piece`], so every column is filled from the bottom
/// up and no cell is ever cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    win_length: usize,
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board sized for `win_length`
    pub fn new(win_length: usize) -> Result<Self, ConfigError> {
        if !(MIN_WIN_LENGTH..=MAX_WIN_LENGTH).contains(&win_length) {
            return Err(ConfigError::InvalidWinLength { win_length });
        }
        // Bounded above, so neither product can overflow
        let side = win_length * 2;
        Ok(Board {
            win_length,
            rows: side,
            cols: side,
            cells: vec![Cell::Empty; side * side],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    /// All cells of one row, left to right
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Rows from top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.cols)
    }

    /// Check if a column is full. Columns outside the board count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.cols {
            return true;
        }
        self.get(0, col) != Cell::Empty
    }

    /// Columns that can still take a piece
    pub fn open_columns(&self) -> Vec<usize> {
        (0..self.cols)
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    /// Convert a caller-supplied column into an index on this board
    pub fn column_index(&self, column: isize) -> Result<usize, PlacementError> {
        usize::try_from(column)
            .ok()
            .filter(|&col| col < self.cols)
            .ok_or(PlacementError::OutOfRange {
                column,
                cols: self.cols,
            })
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, column: isize, piece: Piece) -> Result<usize, PlacementError> {
        let col = self.column_index(column)?;

        // Find the lowest empty row in this column
        let row = (0..self.rows)
            .rev()
            .find(|&row| self.get(row, col) == Cell::Empty)
            .ok_or(PlacementError::ColumnFull { column: col })?;

        self.cells[row * self.cols + col] = piece.to_cell();
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    /// Scan the whole grid for `win_length` consecutive cells holding `piece`
    /// in any of the four directions.
    pub fn check_win(&self, piece: Piece, win_length: usize) -> bool {
        if win_length == 0 {
            return false;
        }
        let cell = piece.to_cell();

        for row in 0..self.rows {
            for col in 0..self.cols {
                if self.get(row, col) != cell {
                    continue;
                }
                let found = DIRECTIONS
                    .iter()
                    .any(|&(dr, dc)| self.run_matches(row, col, dr, dc, win_length, cell));
                if found {
                    return true;
                }
            }
        }

        false
    }

    /// Whether the `len` cells starting at (row, col) and stepping by (dr, dc)
    /// are all in bounds and all equal to `cell`.
    fn run_matches(
        &self,
        row: usize,
        col: usize,
        dr: isize,
        dc: isize,
        len: usize,
        cell: Cell,
    ) -> bool {
        (0..len as isize).all(|step| {
            self.cell_at(row as isize + dr * step, col as isize + dc * step) == Some(cell)
        })
    }

    fn cell_at(&self, row: isize, col: isize) -> Option<Cell> {
        let row = usize::try_from(row).ok().filter(|&r| r < self.rows)?;
        let col = usize::try_from(col).ok().filter(|&c| c < self.cols)?;
        Some(self.get(row, col))
    }
}
