//! Error types reported by grid construction and by the solver.

use thiserror::Error;

use crate::types::Coordinate;

/// Rejection of a grid at construction time.
///
/// This enumeration holds the reasons a set of rows cannot become a [`Grid`](crate::Grid). The
/// check runs before any search state exists, so a rejected grid never reaches the solver.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidGridError {
    /// The grid has no rows, or its rows have no cells.
    #[error("grid must have at least one row and one column")]
    Empty,
    /// A row does not have the same length as the first one.
    #[error("row {row} has {actual} cells, expected {expected}")]
    Ragged {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        actual: usize,
    },
    /// The number of cells overflows `usize` or cannot be allocated.
    #[error("a {rows}x{cols} grid is too large to allocate")]
    TooLarge {
        /// Requested number of rows.
        rows: usize,
        /// Requested number of columns.
        cols: usize,
    },
    /// Requested dimensions cannot hold a generated maze.
    #[error("a generated maze needs at least 3x3 cells, got {rows}x{cols}")]
    TooSmall {
        /// Requested number of rows.
        rows: usize,
        /// Requested number of columns.
        cols: usize,
    },
}

/// Rejection of a start or end cell before a search.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidEndpointError {
    /// The coordinate lies outside the grid.
    #[error("endpoint {cell} is outside the {rows}x{cols} grid")]
    OutOfBounds {
        /// The rejected coordinate.
        cell: Coordinate,
        /// Number of rows in the grid.
        rows: usize,
        /// Number of columns in the grid.
        cols: usize,
    },
    /// The coordinate names a wall.
    #[error("endpoint {cell} is a wall")]
    Wall {
        /// The rejected coordinate.
        cell: Coordinate,
    },
}

/// Failure of a single solve call.
///
/// This enumeration is generic over the error type of the observer driving the search, so an
/// observer that aborts hands its own error back to the caller untouched.
#[derive(Debug, Error)]
pub enum SolveError<E> {
    /// The start or the end cell was rejected before the search began.
    #[error(transparent)]
    Endpoint(#[from] InvalidEndpointError),
    /// The observer stopped the search.
    #[error("search aborted by observer: {0}")]
    Observer(E),
}
