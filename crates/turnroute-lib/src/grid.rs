use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};

/// A single maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Free,
    Wall,
}

/// Integer (row, col) coordinate within a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Rectangular maze grid, stored row-major. Read-only during search.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Build a grid from numeric rows where `0` marks a free cell and
    /// `1` marks a wall. Rejects empty and ragged input.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Grid> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(Error::EmptyGrid);
        }

        let cols = rows[0].len();
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (row_index, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(Error::NonRectangularGrid {
                    row: row_index,
                    expected: cols,
                    found: row.len(),
                });
            }
            for (col_index, &marker) in row.iter().enumerate() {
                cells.push(match marker {
                    0 => Cell::Free,
                    1 => Cell::Wall,
                    other => {
                        return Err(Error::InvalidCell {
                            row: row_index,
                            col: col_index,
                            symbol: char::from_digit(u32::from(other), 10).unwrap_or('?'),
                        })
                    }
                });
            }
        }

        Ok(Grid {
            cells,
            rows: rows.len(),
            cols,
        })
    }

    /// Parse a grid from text, one row per line. `0` or `.` marks a
    /// free cell, `1` or `#` a wall. Spaces and commas within a line
    /// are ignored, as are blank lines.
    pub fn parse(text: &str) -> Result<Grid> {
        let mut rows: Vec<Vec<u8>> = Vec::new();
        for (line_index, line) in text.lines().filter(|l| !l.trim().is_empty()).enumerate() {
            let mut row = Vec::new();
            for symbol in line.chars() {
                match symbol {
                    '0' | '.' => row.push(0),
                    '1' | '#' => row.push(1),
                    ' ' | '\t' | ',' => {}
                    other => {
                        return Err(Error::InvalidCell {
                            row: line_index,
                            col: row.len(),
                            symbol: other,
                        })
                    }
                }
            }
            rows.push(row);
        }
        Grid::from_rows(rows)
    }

    /// Number of rows in the grid.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns in the grid.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the position lies within the grid bounds.
    pub fn in_bounds(&self, position: Position) -> bool {
        position.row < self.rows && position.col < self.cols
    }

    /// Whether the position is an in-bounds, non-wall cell.
    pub fn is_free(&self, position: Position) -> bool {
        self.cell(position) == Some(Cell::Free)
    }

    /// Return the cell at `position`, or `None` when out of bounds.
    pub fn cell(&self, position: Position) -> Option<Cell> {
        if self.in_bounds(position) {
            Some(self.cells[position.row * self.cols + position.col])
        } else {
            None
        }
    }
}
