//! Bidirectional breadth-first search over a grid.
//!
//! This module contains the [`PathFinder`] engine and the [`Path`] it produces. The search grows
//! one frontier from the start and one from the end, alternating full rounds between them, and
//! stops as soon as one side discovers a cell the other side has already reached.

use std::{collections::VecDeque, slice};

use tracing::{debug, trace};

use crate::{
    errors::{InvalidEndpointError, SolveError},
    events::{NoopObserver, Observer},
    grid::Grid,
    types::{Coordinate, Side},
};

/// Neighbor offsets as `(row, col)` deltas, in enumeration order: east, south, west, north.
///
/// The order decides which of several equally short paths a search returns.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Shortest route between two cells.
///
/// This structure holds the cells of a path in order from start to end, both included. Every two
/// consecutive cells are one grid step apart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    /// Cells from start to end.
    cells: Vec<Coordinate>,
}

impl Path {
    /// Builds the path that starts and ends on the same cell.
    fn single(cell: Coordinate) -> Self {
        Self { cells: vec![cell] }
    }

    /// Returns the cells of the path, start first.
    pub fn cells(&self) -> &[Coordinate] {
        &self.cells
    }

    /// Consumes the path, returning its cells.
    pub fn into_cells(self) -> Vec<Coordinate> {
        self.cells
    }

    /// Returns the number of cells on the path.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns whether the path has no cells, which never holds for a path built by a search.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the number of steps taken along the path.
    pub fn edge_count(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    /// Returns the first cell of the path.
    pub fn start(&self) -> Option<Coordinate> {
        self.cells.first().copied()
    }

    /// Returns the last cell of the path.
    pub fn end(&self) -> Option<Coordinate> {
        self.cells.last().copied()
    }

    /// Returns whether the path goes through a cell.
    pub fn contains(&self, cell: Coordinate) -> bool {
        self.cells.contains(&cell)
    }

    /// Returns an iterator over the cells of the path, start first.
    pub fn iter(&self) -> slice::Iter<'_, Coordinate> {
        self.cells.iter()
    }
}

impl<'path> IntoIterator for &'path Path {
    type Item = &'path Coordinate;
    type IntoIter = slice::Iter<'path, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Search state of one side of a bidirectional search.
///
/// This structure bundles the FIFO queue, the visited set and the parent map of a side. Visited
/// flags and parents live in vectors indexed like the grid's cells.
struct Frontier<'grid> {
    /// Grid the search runs on, used to index the per-cell vectors.
    grid: &'grid Grid,
    /// Side this frontier grows from.
    side: Side,
    /// Cells waiting to be expanded.
    queue: VecDeque<Coordinate>,
    /// Cells enqueued or expanded so far.
    visited: Vec<bool>,
    /// Cell from which each cell was first reached, written once per cell.
    parents: Vec<Option<Coordinate>>,
}

impl<'grid> Frontier<'grid> {
    /// Creates a frontier holding only its root.
    fn new(grid: &'grid Grid, root: Coordinate, side: Side) -> Self {
        let mut frontier = Self {
            grid,
            side,
            queue: VecDeque::from([root]),
            visited: vec![false; grid.area()],
            parents: vec![None; grid.area()],
        };
        let _ = frontier.visit(root);

        frontier
    }

    /// Returns whether a cell has been reached by this side.
    fn has_visited(&self, cell: Coordinate) -> bool {
        self.grid
            .index_of(cell)
            .and_then(|index| self.visited.get(index))
            .is_some_and(|seen| *seen)
    }

    /// Marks a cell as reached, returning `false` if it already was.
    fn visit(&mut self, cell: Coordinate) -> bool {
        match self
            .grid
            .index_of(cell)
            .and_then(|index| self.visited.get_mut(index))
        {
            Some(seen) if !*seen => {
                *seen = true;
                true
            }
            _ => false,
        }
    }

    /// Records the cell from which `cell` was first reached.
    fn set_parent(&mut self, cell: Coordinate, parent: Coordinate) {
        if let Some(slot) = self
            .grid
            .index_of(cell)
            .and_then(|index| self.parents.get_mut(index))
        {
            *slot = Some(parent);
        }
    }

    /// Returns the cell from which `cell` was first reached, or `None` for the root.
    fn parent_of(&self, cell: Coordinate) -> Option<Coordinate> {
        self.grid
            .index_of(cell)
            .and_then(|index| self.parents.get(index))
            .copied()
            .flatten()
    }
}

/// Bidirectional breadth-first search engine.
///
/// This structure borrows a [`Grid`] for as long as it is used and keeps no other state: every
/// call to [`solve`](PathFinder::solve) builds its frontiers from scratch and drops them on
/// return, so repeated calls with the same arguments return the same path.
#[derive(Clone, Copy, Debug)]
pub struct PathFinder<'grid> {
    /// Grid searched by every call.
    grid: &'grid Grid,
}

impl<'grid> PathFinder<'grid> {
    /// Creates a path finder over a grid.
    ///
    /// Grids are validated when they are built, see [`Grid::from_rows`], so this step cannot
    /// fail.
    pub const fn new(grid: &'grid Grid) -> Self {
        Self { grid }
    }

    /// Returns the grid this path finder searches.
    pub const fn grid(&self) -> &'grid Grid {
        self.grid
    }

    /// Returns the open cells one step away from `cell`, in east, south, west, north order.
    pub fn neighbors(&self, cell: Coordinate) -> impl Iterator<Item = Coordinate> + 'grid {
        let grid = self.grid;

        DIRECTIONS
            .into_iter()
            .filter_map(move |(row_delta, col_delta)| cell.offset(row_delta, col_delta))
            .filter(move |neighbor| grid.is_open(*neighbor))
    }

    /// Finds a shortest path from `start` to `end`, reporting every expansion to `observer`.
    ///
    /// The two sides take turns. In each turn, a side expands every cell that was in its queue
    /// when the turn began, calling the observer for each one before looking at its neighbors. A
    /// neighbor already reached by the other side ends the search at once, in the middle of the
    /// turn; other unvisited neighbors are queued for the side's next turn. The search gives up
    /// when either queue runs dry.
    ///
    /// When `start` equals `end` the path is that single cell and the observer is never called.
    ///
    /// # Errors
    ///
    /// This function returns [`SolveError::Endpoint`] if `start` or `end` is outside the grid or a
    /// wall, before any cell is expanded, and [`SolveError::Observer`] with the observer's own
    /// error if the observer aborts the search.
    pub fn solve<O>(
        &self,
        start: Coordinate,
        end: Coordinate,
        observer: &mut O,
    ) -> Result<Option<Path>, SolveError<O::Error>>
    where
        O: Observer + ?Sized,
    {
        self.grid.check_endpoint(start)?;
        self.grid.check_endpoint(end)?;

        if start == end {
            debug!(%start, "start and end coincide");
            return Ok(Some(Path::single(start)));
        }

        debug!(
            %start,
            %end,
            rows = self.grid.rows(),
            cols = self.grid.cols(),
            "starting bidirectional search"
        );

        let mut forward = Frontier::new(self.grid, start, Side::Start);
        let mut backward = Frontier::new(self.grid, end, Side::End);

        while !forward.queue.is_empty() && !backward.queue.is_empty() {
            if let Some(meeting) = self
                .expand_round(&mut forward, &backward, observer)
                .map_err(SolveError::Observer)?
            {
                return Ok(Some(Self::join(meeting, &forward, &backward)));
            }

            if let Some(meeting) = self
                .expand_round(&mut backward, &forward, observer)
                .map_err(SolveError::Observer)?
            {
                return Ok(Some(Self::join(meeting, &forward, &backward)));
            }
        }

        debug!(%start, %end, "frontiers exhausted without meeting");
        Ok(None)
    }

    /// Finds a shortest path from `start` to `end` without observing the search.
    ///
    /// # Errors
    ///
    /// This function returns an [`InvalidEndpointError`] if `start` or `end` is outside the grid
    /// or a wall.
    pub fn find_path(
        &self,
        start: Coordinate,
        end: Coordinate,
    ) -> Result<Option<Path>, InvalidEndpointError> {
        self.solve(start, end, &mut NoopObserver)
            .map_err(|error| match error {
                SolveError::Endpoint(endpoint) => endpoint,
                SolveError::Observer(never) => match never {},
            })
    }

    /// Expands every cell queued on one side when the round begins.
    ///
    /// This function returns the meeting cell as soon as a neighbor of an expanded cell turns out
    /// to have been reached by `other`, leaving the rest of the round undone.
    fn expand_round<O>(
        &self,
        frontier: &mut Frontier<'grid>,
        other: &Frontier<'grid>,
        observer: &mut O,
    ) -> Result<Option<Coordinate>, O::Error>
    where
        O: Observer + ?Sized,
    {
        let round = frontier.queue.len();

        for _ in 0..round {
            let Some(cell) = frontier.queue.pop_front() else {
                break;
            };

            trace!(%cell, side = ?frontier.side, "expanding");
            observer.on_explore(cell, frontier.side)?;

            for neighbor in self.neighbors(cell) {
                if other.has_visited(neighbor) {
                    frontier.set_parent(neighbor, cell);
                    debug!(meeting = %neighbor, side = ?frontier.side, "frontiers met");
                    return Ok(Some(neighbor));
                }

                if frontier.visit(neighbor) {
                    frontier.set_parent(neighbor, cell);
                    frontier.queue.push_back(neighbor);
                }
            }
        }

        Ok(None)
    }

    /// Stitches the two half paths meeting at `meeting` into a single start-to-end path.
    fn join(meeting: Coordinate, forward: &Frontier<'_>, backward: &Frontier<'_>) -> Path {
        let mut cells = vec![meeting];

        let mut current = meeting;
        while let Some(parent) = forward.parent_of(current) {
            cells.push(parent);
            current = parent;
        }
        cells.reverse();

        current = meeting;
        while let Some(parent) = backward.parent_of(current) {
            cells.push(parent);
            current = parent;
        }

        Path { cells }
    }
}
