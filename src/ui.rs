//! Text rendering of maps, solutions and search traces.

use crate::{
    events::{Exploration, Recorder},
    map::Map,
    pathfinding::Path,
    types::{Cell, Coordinate, Side},
};

/// Glyph drawn for walls.
pub const WALL_GLYPH: char = '#';
/// Glyph drawn for open cells nothing else claimed.
pub const OPEN_GLYPH: char = ' ';
/// Glyph drawn for the start cell.
pub const START_GLYPH: char = 'S';
/// Glyph drawn for the end cell.
pub const END_GLYPH: char = 'E';
/// Glyph drawn for cells on the path.
pub const PATH_GLYPH: char = '*';
/// Glyph drawn for cells expanded from the start side.
pub const START_SIDE_GLYPH: char = '.';
/// Glyph drawn for cells expanded from the end side.
pub const END_SIDE_GLYPH: char = ',';

/// Overwrites the glyph of one cell, ignoring coordinates outside the canvas.
fn paint(canvas: &mut [Vec<char>], cell: Coordinate, glyph: char) {
    if let Some(slot) = canvas
        .get_mut(cell.row)
        .and_then(|row| row.get_mut(cell.col))
    {
        *slot = glyph;
    }
}

/// Renders a map as text, one line per row.
///
/// This function draws the grid, then the cells expanded by each side of the search, then the
/// path, and finally the two endpoints, each layer covering the previous ones.
pub fn render(map: &Map, path: Option<&Path>, explored: &[Exploration]) -> String {
    let grid = map.grid();
    let mut canvas: Vec<Vec<char>> = (0..grid.rows())
        .map(|_| Vec::with_capacity(grid.cols()))
        .collect();

    for (cell, state) in grid.cells() {
        if let Some(row) = canvas.get_mut(cell.row) {
            row.push(match state {
                Cell::Wall => WALL_GLYPH,
                Cell::Open => OPEN_GLYPH,
            });
        }
    }

    for event in explored {
        let glyph = match event.side {
            Side::Start => START_SIDE_GLYPH,
            Side::End => END_SIDE_GLYPH,
        };
        paint(&mut canvas, event.cell, glyph);
    }

    for cell in path.into_iter().flatten() {
        paint(&mut canvas, *cell, PATH_GLYPH);
    }

    paint(&mut canvas, map.start(), START_GLYPH);
    paint(&mut canvas, map.end(), END_GLYPH);

    let mut output = String::with_capacity(grid.area() + grid.rows());
    for row in &canvas {
        output.extend(row.iter());
        output.push('\n');
    }

    output
}

/// Describes the outcome of a search in one line.
pub fn summary(path: Option<&Path>, recorder: &Recorder) -> String {
    let expanded = format!(
        "{} cells expanded, {} from the start and {} from the end",
        recorder.len(),
        recorder.count(Side::Start),
        recorder.count(Side::End)
    );

    match path {
        Some(path) => format!("path found: {} steps ({expanded})", path.edge_count()),
        None => format!("no path found ({expanded})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{events::Observer as _, pathfinding::PathFinder};

    /// Creates a test map for rendering.
    fn create_test_map() -> Map {
        Map::new("test_map.labmap".into(), "22222\n21332\n23234\n22222")
            .expect("test map should be valid")
    }

    #[test]
    fn test_render_plain_map() {
        let map = create_test_map();

        assert_eq!(
            render(&map, None, &[]),
            "#####\n#S  #\n# # E\n#####\n"
        );
    }

    #[test]
    fn test_render_solution() {
        let map = create_test_map();
        let finder = PathFinder::new(map.grid());
        let mut recorder = Recorder::new();

        let path = finder
            .solve(map.start(), map.end(), &mut recorder)
            .expect("endpoints are valid")
            .expect("test map is solvable");

        assert_eq!(
            render(&map, Some(&path), &[]),
            "#####\n#S**#\n# #*E\n#####\n"
        );
    }

    #[test]
    fn test_render_explored_cells() {
        let map = create_test_map();
        let mut recorder = Recorder::new();
        recorder
            .on_explore(Coordinate::new(2, 1), Side::Start)
            .expect("recorder has no limit");
        recorder
            .on_explore(Coordinate::new(1, 3), Side::End)
            .expect("recorder has no limit");
        recorder
            .on_explore(Coordinate::new(1, 1), Side::Start)
            .expect("recorder has no limit");

        assert_eq!(
            render(&map, None, recorder.events()),
            "#####\n#S ,#\n#.# E\n#####\n"
        );
    }

    #[test]
    fn test_summary_found() {
        let map = create_test_map();
        let finder = PathFinder::new(map.grid());
        let mut recorder = Recorder::new();

        let path = finder
            .solve(map.start(), map.end(), &mut recorder)
            .expect("endpoints are valid");

        assert_eq!(
            summary(path.as_ref(), &recorder),
            "path found: 4 steps (5 cells expanded, 3 from the start and 2 from the end)"
        );
    }

    #[test]
    fn test_summary_not_found() {
        let recorder = Recorder::new();

        assert_eq!(
            summary(None, &recorder),
            "no path found (0 cells expanded, 0 from the start and 0 from the end)"
        );
    }
}
