//! Value types shared by the grid, the solver and the observer surface.

use std::{fmt, num::ParseIntError, str::FromStr};

use thiserror::Error;

/// State of a single grid cell.
///
/// This enumeration holds the only two states a maze cell can be in. The solver only ever steps
/// onto [`Cell::Open`] cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Impassable cell.
    Wall,
    /// Walkable cell.
    Open,
}

impl Cell {
    /// Returns whether the cell can be stepped on.
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Position of a cell in a grid.
///
/// This structure identifies a cell by its 0-indexed row and column. It is a plain value type and
/// is copied freely between the grid, the solver and the observers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate {
    /// Row index, counted from the top.
    pub row: usize,
    /// Column index, counted from the left.
    pub col: usize,
}

impl Coordinate {
    /// Builds a coordinate from a row and a column index.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the coordinate displaced by the given row and column offsets.
    ///
    /// This function returns `None` when the displacement would move the coordinate above the
    /// first row or left of the first column. Bounds on the other two sides depend on the grid and
    /// are checked there.
    pub const fn offset(self, row_delta: isize, col_delta: isize) -> Option<Self> {
        let Some(row) = self.row.checked_add_signed(row_delta) else {
            return None;
        };
        let Some(col) = self.col.checked_add_signed(col_delta) else {
            return None;
        };

        Some(Self { row, col })
    }

    /// Returns the number of grid steps separating two coordinates.
    pub const fn manhattan(self, other: Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.row, self.col)
    }
}

/// Failure to read a coordinate from its `row,col` text form.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseCoordinateError {
    /// The input has no comma separating the two indices.
    #[error("expected a coordinate in the form ROW,COL, got {0:?}")]
    MissingSeparator(String),
    /// One of the two indices is not a non-negative integer.
    #[error("invalid coordinate index: {0}")]
    Index(#[from] ParseIntError),
}

impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (row, col) = input
            .split_once(',')
            .ok_or_else(|| ParseCoordinateError::MissingSeparator(input.to_owned()))?;

        Ok(Self {
            row: row.trim().parse()?,
            col: col.trim().parse()?,
        })
    }
}

/// Direction a search frontier grows from.
///
/// This enumeration tells observers which of the two frontiers of a bidirectional search expanded
/// a given cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Frontier rooted at the start cell.
    Start,
    /// Frontier rooted at the end cell.
    End,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_is_open() {
        assert!(Cell::Open.is_open(), "open cells should be walkable");
        assert!(!Cell::Wall.is_open(), "walls should not be walkable");
    }

    #[test]
    fn test_coordinate_offset_within_bounds() {
        let origin = Coordinate::new(2, 3);

        assert_eq!(origin.offset(0, 1), Some(Coordinate::new(2, 4)));
        assert_eq!(origin.offset(-1, 0), Some(Coordinate::new(1, 3)));
        assert_eq!(origin.offset(-2, -3), Some(Coordinate::new(0, 0)));
    }

    #[test]
    fn test_coordinate_offset_underflow() {
        let corner = Coordinate::new(0, 0);

        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, -1), None);
    }

    #[test]
    fn test_coordinate_manhattan() {
        assert_eq!(Coordinate::new(0, 0).manhattan(Coordinate::new(4, 4)), 8);
        assert_eq!(Coordinate::new(3, 1).manhattan(Coordinate::new(1, 3)), 4);
        assert_eq!(Coordinate::new(5, 5).manhattan(Coordinate::new(5, 5)), 0);
    }

    #[test]
    fn test_coordinate_display() {
        assert_eq!(Coordinate::new(4, 7).to_string(), "(4, 7)");
    }

    #[test]
    fn test_coordinate_from_str() {
        assert_eq!("1,2".parse::<Coordinate>(), Ok(Coordinate::new(1, 2)));
        assert_eq!(" 10 , 0 ".parse::<Coordinate>(), Ok(Coordinate::new(10, 0)));
    }

    #[test]
    fn test_coordinate_from_str_errors() {
        assert_eq!(
            "12".parse::<Coordinate>(),
            Err(ParseCoordinateError::MissingSeparator("12".to_owned()))
        );
        assert!(matches!(
            "1,-2".parse::<Coordinate>(),
            Err(ParseCoordinateError::Index(_))
        ));
        assert!(matches!(
            "a,2".parse::<Coordinate>(),
            Err(ParseCoordinateError::Index(_))
        ));
    }
}
