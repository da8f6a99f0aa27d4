//! Random maze generation.
//!
//! This module carves perfect mazes with a randomized backtracker. The walk keeps its own stack
//! instead of recursing, so the size of a maze is bounded by memory alone.

use color_eyre::eyre::Result;
use rand::{seq::SliceRandom as _, Rng};
use tracing::debug;

use crate::{
    errors::InvalidGridError,
    grid::Grid,
    map::Map,
    types::{Cell, Coordinate},
};

/// Name given to generated maps.
pub const GENERATED_KEY: &str = "Generated";

/// Unit steps between carved cells: east, south, west, north.
const CARVE_DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Returns the greatest odd index that is not on the last line of a dimension of `size` cells.
const fn last_odd(size: usize) -> usize {
    let candidate = size - 2;
    if candidate % 2 == 1 {
        candidate
    } else {
        candidate - 1
    }
}

/// Generates a perfect maze of `rows` by `cols` cells.
///
/// Cells at odd coordinates are rooms and every other cell starts out as a wall. Starting from
/// `(1, 1)`, the walk repeatedly picks a random unvisited room two steps away, knocks down the wall
/// in between and moves there, backing up whenever the current room has no unvisited neighbor.
/// Every room ends up connected to every other by exactly one route. The map starts at `(1, 1)`
/// and ends at the bottom-right-most room.
///
/// # Errors
///
/// This function returns [`InvalidGridError::TooSmall`] if either dimension is below 3 and
/// [`InvalidGridError::TooLarge`] if the grid cannot be allocated.
pub fn generate<R>(rows: usize, cols: usize, rng: &mut R) -> Result<Map>
where
    R: Rng + ?Sized,
{
    if rows < 3 || cols < 3 {
        return Err(InvalidGridError::TooSmall { rows, cols }.into());
    }

    let mut grid = Grid::filled(rows, cols, Cell::Wall)?;
    let start = Coordinate::new(1, 1);
    let _ = grid.set(start, Cell::Open);

    let mut stack = vec![start];
    while let Some(&current) = stack.last() {
        let candidates: Vec<(Coordinate, Coordinate)> = CARVE_DIRECTIONS
            .into_iter()
            .filter_map(|(row_delta, col_delta)| {
                let wall = current.offset(row_delta, col_delta)?;
                let room = wall.offset(row_delta, col_delta)?;
                (room.row < rows - 1 && room.col < cols - 1 && !grid.is_open(room))
                    .then_some((wall, room))
            })
            .collect();

        if let Some(&(wall, room)) = candidates.choose(rng) {
            let _ = grid.set(wall, Cell::Open);
            let _ = grid.set(room, Cell::Open);
            stack.push(room);
        } else {
            let _ = stack.pop();
        }
    }

    let end = Coordinate::new(last_odd(rows), last_odd(cols));
    debug!(rows, cols, %end, "generated maze");

    Ok(Map::from_grid(
        GENERATED_KEY.to_owned(),
        grid,
        start,
        end,
    )?)
}
