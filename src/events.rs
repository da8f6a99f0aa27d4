//! Observer interface through which the solver reports its progress.
//!
//! The solver calls [`Observer::on_explore`] once for every cell it expands, synchronously and
//! before looking at that cell's neighbors. An observer that returns an error stops the search on
//! the spot and the error reaches the caller of [`PathFinder::solve`](crate::PathFinder::solve)
//! unchanged.

use std::convert::Infallible;

use thiserror::Error;

use crate::types::{Coordinate, Side};

/// Receiver of exploration notifications.
///
/// Any `FnMut(Coordinate, Side) -> Result<(), E>` closure is an observer. Observers that can never
/// fail use [`Infallible`] as their error type.
pub trait Observer {
    /// Error returned to abort the search.
    type Error;

    /// Called once for every cell taken off a frontier for expansion.
    ///
    /// # Errors
    ///
    /// Returning an error aborts the search, which then fails with
    /// [`SolveError::Observer`](crate::SolveError::Observer) carrying this error.
    fn on_explore(&mut self, cell: Coordinate, side: Side) -> Result<(), Self::Error>;
}

impl<F, E> Observer for F
where
    F: FnMut(Coordinate, Side) -> Result<(), E>,
{
    type Error = E;

    fn on_explore(&mut self, cell: Coordinate, side: Side) -> Result<(), E> {
        self(cell, side)
    }
}

/// Observer that ignores every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {
    type Error = Infallible;

    fn on_explore(&mut self, _cell: Coordinate, _side: Side) -> Result<(), Infallible> {
        Ok(())
    }
}

/// Adapter turning an infallible closure into an observer.
///
/// This structure saves callers that only want to watch the search from spelling out an error
/// type for their closure.
#[derive(Clone, Copy, Debug)]
pub struct Inspector<F>(pub F);

impl<F> Observer for Inspector<F>
where
    F: FnMut(Coordinate, Side),
{
    type Error = Infallible;

    fn on_explore(&mut self, cell: Coordinate, side: Side) -> Result<(), Infallible> {
        (self.0)(cell, side);
        Ok(())
    }
}

/// A single expansion reported by the solver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Exploration {
    /// The expanded cell.
    pub cell: Coordinate,
    /// The frontier that expanded it.
    pub side: Side,
}

/// Error raised by a [`Recorder`] once it has seen as many expansions as it allows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("exploration limit of {limit} cells reached")]
pub struct ExplorationLimit {
    /// Number of expansions the recorder accepted before refusing.
    pub limit: usize,
}

/// Observer that keeps every expansion, in order.
///
/// This structure turns the callback into an event stream the caller can replay after the search,
/// for instance to overlay the explored cells on a rendering of the maze. With a limit set, it
/// also acts as a cancellation switch for searches that run too long.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Recorder {
    /// Expansions seen so far, in the order the solver reported them.
    events: Vec<Exploration>,
    /// Maximum number of expansions accepted, if any.
    limit: Option<usize>,
}

impl Recorder {
    /// Creates a recorder without a limit.
    pub const fn new() -> Self {
        Self {
            events: Vec::new(),
            limit: None,
        }
    }

    /// Creates a recorder that aborts the search after `limit` expansions.
    pub const fn with_limit(limit: usize) -> Self {
        Self {
            events: Vec::new(),
            limit: Some(limit),
        }
    }

    /// Returns the recorded expansions.
    pub fn events(&self) -> &[Exploration] {
        &self.events
    }

    /// Returns the number of recorded expansions.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns the number of expansions made by one side of the search.
    pub fn count(&self, side: Side) -> usize {
        self.events
            .iter()
            .filter(|event| event.side == side)
            .count()
    }
}

impl Observer for Recorder {
    type Error = ExplorationLimit;

    fn on_explore(&mut self, cell: Coordinate, side: Side) -> Result<(), ExplorationLimit> {
        if let Some(limit) = self.limit {
            if self.events.len() >= limit {
                return Err(ExplorationLimit { limit });
            }
        }

        self.events.push(Exploration { cell, side });
        Ok(())
    }
}
