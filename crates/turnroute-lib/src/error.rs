use thiserror::Error;

use crate::grid::Position;

/// Convenient result alias for the turnroute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a grid is constructed without any cells.
    #[error("grid has no cells")]
    EmptyGrid,

    /// Raised when grid rows have differing lengths.
    #[error("grid is not rectangular: row {row} has {found} cells, expected {expected}")]
    NonRectangularGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Raised when a cell marker is neither free nor wall.
    #[error("unrecognized cell marker {symbol:?} at row {row}, column {col}")]
    InvalidCell {
        row: usize,
        col: usize,
        symbol: char,
    },

    /// Raised when a start or goal position lies outside the grid.
    #[error("{which} position {position} is outside the {rows}x{cols} grid")]
    OutOfBounds {
        which: &'static str,
        position: Position,
        rows: usize,
        cols: usize,
    },

    /// Raised when a start or goal position sits on a wall cell.
    #[error("{which} position {position} is a wall cell")]
    BlockedEndpoint {
        which: &'static str,
        position: Position,
    },

    /// Raised when no route could be found between two cells.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: Position, goal: Position },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
