//! Rectangular grid of wall and open cells.
//!
//! This module contains the [`Grid`] type the solver reads from. Rows are validated once, on
//! construction, so every grid in circulation is non-empty and rectangular.

use crate::{
    errors::{InvalidEndpointError, InvalidGridError},
    types::{Cell, Coordinate},
};

/// Immutable 2-D array of cell states.
///
/// This structure stores the cells in row-major order inside a single vector. Its public surface
/// is read-only; only the maze generator within this crate writes into a grid while carving it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    /// Number of rows, always at least one.
    rows: usize,
    /// Number of columns, always at least one.
    cols: usize,
    /// Number of cells, checked against overflow on construction.
    area: usize,
    /// Cell states in row-major order.
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a grid from a sequence of rows.
    ///
    /// # Errors
    ///
    /// This function returns [`InvalidGridError::Empty`] if there are no rows or the first row is
    /// empty, [`InvalidGridError::Ragged`] for the first row whose length differs from the
    /// length of the first row, and [`InvalidGridError::TooLarge`] if the cells cannot be stored.
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Result<Self, InvalidGridError> {
        let expected = rows
            .first()
            .map(|row| row.as_ref().len())
            .ok_or(InvalidGridError::Empty)?;
        if expected == 0 {
            return Err(InvalidGridError::Empty);
        }

        let (mut cells, area) = allocate(rows.len(), expected)?;
        for (index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != expected {
                return Err(InvalidGridError::Ragged {
                    row: index,
                    expected,
                    actual: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }

        Ok(Self {
            rows: rows.len(),
            cols: expected,
            area,
            cells,
        })
    }

    /// Builds a grid where every cell holds the same state.
    ///
    /// # Errors
    ///
    /// This function returns [`InvalidGridError::Empty`] if either dimension is zero and
    /// [`InvalidGridError::TooLarge`] if `rows * cols` cells cannot be stored.
    pub fn filled(rows: usize, cols: usize, state: Cell) -> Result<Self, InvalidGridError> {
        if rows == 0 || cols == 0 {
            return Err(InvalidGridError::Empty);
        }

        let (mut cells, area) = allocate(rows, cols)?;
        cells.resize(area, state);

        Ok(Self {
            rows,
            cols,
            area,
            cells,
        })
    }

    /// Returns the number of rows.
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the total number of cells.
    pub const fn area(&self) -> usize {
        self.area
    }

    /// Returns the row-major index of a coordinate, or `None` if it lies outside the grid.
    pub const fn index_of(&self, cell: Coordinate) -> Option<usize> {
        if cell.row < self.rows && cell.col < self.cols {
            Some(cell.row * self.cols + cell.col)
        } else {
            None
        }
    }

    /// Returns the state of a cell, or `None` if it lies outside the grid.
    pub fn get(&self, cell: Coordinate) -> Option<Cell> {
        self.index_of(cell)
            .and_then(|index| self.cells.get(index))
            .copied()
    }

    /// Returns whether a coordinate is inside the grid and open.
    pub fn is_open(&self, cell: Coordinate) -> bool {
        self.get(cell).is_some_and(Cell::is_open)
    }

    /// Checks that a coordinate can serve as the start or end of a search.
    ///
    /// # Errors
    ///
    /// This function returns [`InvalidEndpointError::OutOfBounds`] when the coordinate is outside
    /// the grid and [`InvalidEndpointError::Wall`] when it names a wall.
    pub fn check_endpoint(&self, cell: Coordinate) -> Result<(), InvalidEndpointError> {
        match self.get(cell) {
            None => Err(InvalidEndpointError::OutOfBounds {
                cell,
                rows: self.rows,
                cols: self.cols,
            }),
            Some(Cell::Wall) => Err(InvalidEndpointError::Wall { cell }),
            Some(Cell::Open) => Ok(()),
        }
    }

    /// Returns an iterator over every coordinate and its state, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coordinate, Cell)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, state)| (Coordinate::new(index / cols, index % cols), *state))
    }

    /// Overwrites the state of a cell, returning `false` if it lies outside the grid.
    pub(crate) fn set(&mut self, cell: Coordinate, state: Cell) -> bool {
        let Some(slot) = self
            .index_of(cell)
            .and_then(|index| self.cells.get_mut(index))
        else {
            return false;
        };

        *slot = state;
        true
    }
}

/// Reserves room for `rows * cols` cells, returning the empty buffer and the cell count.
fn allocate(rows: usize, cols: usize) -> Result<(Vec<Cell>, usize), InvalidGridError> {
    let Some(area) = rows.checked_mul(cols) else {
        return Err(InvalidGridError::TooLarge { rows, cols });
    };

    let mut cells = Vec::new();
    if cells.try_reserve_exact(area).is_err() {
        return Err(InvalidGridError::TooLarge { rows, cols });
    }

    Ok((cells, area))
}
