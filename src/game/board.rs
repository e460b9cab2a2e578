use std::fmt;

use super::Piece;
use crate::error::EngineError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
pub const CENTER_COL: usize = COLS / 2;

/// A 6x7 Connect Four grid.
///
/// Row 0 is the bottom row; pieces fall towards it, so every column holds a
/// contiguous run of pieces starting at row 0.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Piece; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Piece::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the bottom, row 5 is the top
    pub fn get(&self, row: usize, col: usize) -> Piece {
        self.cells[row][col]
    }

    /// Check if a piece can still be dropped into `col`
    pub fn is_valid_column(&self, col: usize) -> bool {
        col < COLS && self.cells[ROWS - 1][col].is_empty()
    }

    /// Lowest empty row of `col`, or `None` if the column is full.
    pub fn next_open_row(&self, col: usize) -> Result<Option<usize>, EngineError> {
        if col >= COLS {
            return Err(EngineError::InvalidColumn { col });
        }
        Ok(self.open_row(col))
    }

    /// Playable columns in ascending order. Empty when the board is full.
    pub fn valid_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| self.is_valid_column(col)).collect()
    }

    /// Place `piece` at (`row`, `col`).
    ///
    /// `row` must be the column's next open row, so a drop can never leave a
    /// gap below a piece or overwrite one.
    pub fn drop_piece(&mut self, row: usize, col: usize, piece: Piece) -> Result<(), EngineError> {
        if col >= COLS {
            return Err(EngineError::InvalidColumn { col });
        }
        if row >= ROWS {
            return Err(EngineError::InvalidRow { row });
        }
        if piece.is_empty() {
            return Err(EngineError::EmptyPiece);
        }
        match self.open_row(col) {
            None => Err(EngineError::ColumnFull { col }),
            Some(expected) if expected != row => Err(EngineError::RowNotOpen { row, col, expected }),
            Some(_) => {
                self.cells[row][col] = piece;
                Ok(())
            }
        }
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn play(&mut self, col: usize, piece: Piece) -> Result<usize, EngineError> {
        let row = self
            .next_open_row(col)?
            .ok_or(EngineError::ColumnFull { col })?;
        self.drop_piece(row, col, piece)?;
        Ok(row)
    }

    /// Copy of this board with `piece` dropped into `col`.
    ///
    /// Callers pass a column taken from `valid_columns`; the parent board is
    /// left untouched.
    pub(crate) fn with_move(&self, col: usize, piece: Piece) -> Board {
        let mut next = self.clone();
        if let Some(row) = next.open_row(col) {
            next.cells[row][col] = piece;
        }
        next
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| !self.is_valid_column(col))
    }

    /// Number of cells holding `piece`.
    pub fn count(&self, piece: Piece) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell == piece)
            .count()
    }

    fn open_row(&self, col: usize) -> Option<usize> {
        (0..ROWS).find(|&row| self.cells[row][col].is_empty())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..ROWS).rev() {
            let line: String = (0..COLS)
                .map(|col| self.cells[row][col].symbol())
                .flat_map(|symbol| [symbol, ' '])
                .collect();
            writeln!(f, "{}", line.trim_end())?;
        }
        let footer: Vec<String> = (0..COLS).map(|col| col.to_string()).collect();
        write!(f, "{}", footer.join(" "))
    }
}
