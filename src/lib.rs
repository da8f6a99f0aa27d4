//! Bidirectional breadth-first search over rectangular labyrinths.
//!
//! The crate models a labyrinth as a [`Grid`] of wall and open cells and finds shortest paths
//! between two of its cells with a [`PathFinder`]. The search grows one frontier from each
//! endpoint and alternates between them round by round, reporting every cell it expands to an
//! [`Observer`] so callers can trace, record or abort the search as it runs.
//!
//! Around the search sit the pieces of the `bilabyrinth` binary: the `.labmap` file format, a
//! random maze generator and a plain-text renderer.
//!
//! ```
//! use bilabyrinth::{Cell, Coordinate, Grid, PathFinder};
//!
//! let grid = Grid::from_rows(&[
//!     [Cell::Open, Cell::Open, Cell::Open],
//!     [Cell::Wall, Cell::Wall, Cell::Open],
//!     [Cell::Open, Cell::Open, Cell::Open],
//! ])?;
//! let path = PathFinder::new(&grid)
//!     .find_path(Coordinate::new(0, 0), Coordinate::new(2, 0))?
//!     .expect("the corridor joins both corners");
//!
//! assert_eq!(path.edge_count(), 6);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

pub mod app;
pub mod cli;
pub mod errors;
pub mod events;
pub mod file_loader;
pub mod generator;
pub mod grid;
pub mod map;
pub mod pathfinding;
pub mod types;
pub mod ui;

pub use app::App;
pub use cli::Cli;
pub use errors::{InvalidEndpointError, InvalidGridError, SolveError};
pub use events::{Exploration, ExplorationLimit, Inspector, NoopObserver, Observer, Recorder};
pub use grid::Grid;
pub use map::Map;
pub use pathfinding::{Path, PathFinder};
pub use types::{Cell, Coordinate, ParseCoordinateError, Side};
