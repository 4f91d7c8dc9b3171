use std::fmt;

use super::Player;
use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
pub const WIN_LENGTH: usize = 4;

/// Columns that can still accept a token, in ascending order.
pub type LegalActions = Vec<usize>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    /// Symbol used when rendering the board
    pub fn symbol(self) -> &'static str {
        match self {
            Cell::Empty => "-",
            Cell::X => "X",
            Cell::O => "O",
        }
    }

    /// Owner of the token in this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }

    fn from_symbol(symbol: char) -> Option<Cell> {
        match symbol {
            '-' | '.' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            _ => None,
        }
    }
}

/// An immutable 6x7 snapshot. Placing a token yields a new board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
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

    /// Parse a board from one string per row, top row first.
    ///
    /// Accepts `X`, `O` and `-` (or `.`) for empty; whitespace is ignored.
    /// Gravity is not checked, so fixtures can describe any grid.
    pub fn from_rows(rows: &[&str; ROWS]) -> Result<Self, MoveError> {
        let mut cells = [[Cell::Empty; COLS]; ROWS];
        for (row, line) in rows.iter().enumerate() {
            let symbols: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if symbols.len() != COLS {
                return Err(MoveError::RowLength {
                    row,
                    len: symbols.len(),
                    expected: COLS,
                });
            }
            for (col, &symbol) in symbols.iter().enumerate() {
                cells[row][col] = Cell::from_symbol(symbol)
                    .ok_or(MoveError::InvalidSymbol { row, col, symbol })?;
            }
        }
        Ok(Board { cells })
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    ///
    /// # Panics
    ///
    /// Panics if `row >= ROWS` or `col >= COLS`.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Return a new board with `cell` dropped into `column`.
    pub fn place(&self, cell: Cell, column: usize) -> Result<Board, MoveError> {
        if column >= COLS {
            return Err(MoveError::InvalidColumn { column });
        }
        if self.is_column_full(column) {
            return Err(MoveError::ColumnFull { column });
        }
        if cell == Cell::Empty {
            return Err(MoveError::InvalidPlayer);
        }

        let mut next = *self;
        let row = (0..ROWS)
            .rev()
            .find(|&row| next.cells[row][column] == Cell::Empty)
            .ok_or(MoveError::ColumnFull { column })?;
        next.cells[row][column] = cell;
        Ok(next)
    }

    /// Columns whose top cell is still empty
    pub fn legal_columns(&self) -> LegalActions {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Number of tokens on the board
    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// Player whose turn it is. X moves on even token counts.
    pub fn to_move(&self) -> Player {
        if self.occupied_count() % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Topmost occupied cell of a column, or `Cell::Empty` for an empty column
    ///
    /// # Panics
    ///
    /// Panics if `column >= COLS`; validate with [`Board::place`] or
    /// [`Board::legal_columns`] first.
    pub fn top_cell(&self, column: usize) -> Cell {
        (0..ROWS)
            .map(|row| self.cells[row][column])
            .find(|&cell| cell != Cell::Empty)
            .unwrap_or(Cell::Empty)
    }

    /// Grid of `"X"`, `"O"` and `"-"` for renderers
    pub fn symbols(&self) -> [[&'static str; COLS]; ROWS] {
        self.cells.map(|row| row.map(Cell::symbol))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.symbols() {
            writeln!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}
