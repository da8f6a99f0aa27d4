//! Map data and management module.
//!
//! This module contains the `Map` struct and related functionality for handling labyrinth map data,
//! including parsing the `.labmap` text format, endpoint overrides, and the default map.

use std::{ffi::OsString, sync::LazyLock};

use color_eyre::eyre::{bail, OptionExt as _, Result, WrapErr as _};

use crate::{
    errors::InvalidEndpointError,
    grid::Grid,
    types::{Cell, Coordinate},
};

/// File extension of labyrinth map files.
pub const LABMAP_EXTENSION: &str = ".labmap";

/// Labyrinth map data container.
///
/// This structure pairs a validated [`Grid`] with the name it is known by and the two cells a
/// search runs between. Both endpoints are guaranteed to be open cells of the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Map {
    /// Display name of the map, the filename without its extension for maps read from disk.
    key: String,
    /// Cells of the labyrinth.
    grid: Grid,
    /// Cell the search starts from.
    start: Coordinate,
    /// Cell the search heads for.
    end: Coordinate,
}

impl Default for Map {
    fn default() -> Self {
        Self::new("Default.labmap".into(), *DEFAULT_MAP).expect("failed to create default map")
    }
}

impl Map {
    /// Builds a new map from a filename and multiline string content.
    ///
    /// This function parses the provided string data with [`parse_labmap`] and extracts a clean
    /// name by removing the .labmap extension from the filename.
    ///
    /// # Errors
    ///
    /// This function may return errors if:
    /// - The `OsString` cannot be converted to a string slice
    /// - The filename doesn't contain the expected ".labmap" extension
    /// - The contents are not a valid labyrinth map
    pub fn new(key: OsString, data: &str) -> Result<Self> {
        let mut file_name = key
            .to_str()
            .ok_or_eyre("failed to convert osstring to string slice")?
            .to_owned();
        file_name.truncate({
            file_name
                .rfind(LABMAP_EXTENSION)
                .ok_or_eyre("failed to find extension in file name")?
        });

        let (grid, start, end) =
            parse_labmap(data).wrap_err_with(|| format!("failed to parse map {file_name}"))?;

        Ok(Self {
            key: file_name,
            grid,
            start,
            end,
        })
    }

    /// Builds a map from an already constructed grid.
    ///
    /// # Errors
    ///
    /// This function returns an [`InvalidEndpointError`] if either endpoint is outside the grid
    /// or a wall.
    pub fn from_grid(
        key: String,
        grid: Grid,
        start: Coordinate,
        end: Coordinate,
    ) -> Result<Self, InvalidEndpointError> {
        grid.check_endpoint(start)?;
        grid.check_endpoint(end)?;

        Ok(Self {
            key,
            grid,
            start,
            end,
        })
    }

    /// Returns the same map with different endpoints.
    ///
    /// # Errors
    ///
    /// This function returns an [`InvalidEndpointError`] if either endpoint is outside the grid
    /// or a wall.
    pub fn with_endpoints(
        self,
        start: Coordinate,
        end: Coordinate,
    ) -> Result<Self, InvalidEndpointError> {
        Self::from_grid(self.key, self.grid, start, end)
    }

    /// Returns the display name of the map.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the cells of the map.
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the cell the search starts from.
    pub const fn start(&self) -> Coordinate {
        self.start
    }

    /// Returns the cell the search heads for.
    pub const fn end(&self) -> Coordinate {
        self.end
    }
}

/// Parses the contents of a `.labmap` file.
///
/// The format holds one line per grid row: `2` is a wall, `3` an open cell, `1` the open start
/// cell and `4` the open end cell. Surrounding whitespace is ignored.
///
/// # Errors
///
/// This function returns an error if the contents hold a character other than `1` to `4`, rows of
/// different lengths, no rows at all, or anything but exactly one start and one end.
pub fn parse_labmap(data: &str) -> Result<(Grid, Coordinate, Coordinate)> {
    let mut rows = Vec::new();
    let mut start = None;
    let mut end = None;

    for (row_idx, line) in data.trim().lines().enumerate() {
        let mut row = Vec::with_capacity(line.len());

        for (col_idx, byte) in line.bytes().enumerate() {
            let here = Coordinate::new(row_idx, col_idx);
            match byte {
                b'1' => {
                    if start.replace(here).is_some() {
                        bail!("map has more than one entry point");
                    }
                    row.push(Cell::Open);
                }
                b'4' => {
                    if end.replace(here).is_some() {
                        bail!("map has more than one exit point");
                    }
                    row.push(Cell::Open);
                }
                b'2' => row.push(Cell::Wall),
                b'3' => row.push(Cell::Open),
                _ => bail!(
                    "invalid character {:?} at {here}",
                    char::from(byte)
                ),
            }
        }

        rows.push(row);
    }

    let grid = Grid::from_rows(&rows)?;
    let start = start.ok_or_eyre("map has no entry point")?;
    let end = end.ok_or_eyre("map has no exit point")?;

    Ok((grid, start, end))
}

/// Default labyrinth map used as fallback.
///
/// This static holds the map solved when no other map is given.
static DEFAULT_MAP: LazyLock<&str> = LazyLock::new(|| {
    "\
2222222222222222222222222222222
2133333333222223333332222223332
2232222223332223232232322223232
2233333223232223232232322223232
2232323223232223232232322222232
2232323223333333232233333333232
2232323222222222232222222222232
2232323333333332233333333332232
2232222222222232222222222232232
2232333333322233333322332232232
2232322232322222232322232232232
2232322232333332232322232232232
2232322232222232232322233332232
2232322233332232232322232232232
2232322222222232232322232232232
2232333333333232232322232232232
2232222222222232232322232232232
2233333332222232232322232232232
2222222232222232232322232232232
2333333333333332232222232233334
2222222222222222222222222222222"
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::InvalidGridError;

    #[test]
    fn test_map_default() {
        let map = Map::default();

        assert_eq!(map.key(), "Default");
        assert_eq!(map.grid().rows(), 21);
        assert_eq!(map.grid().cols(), 31);
        assert_eq!(map.start(), Coordinate::new(1, 1));
        assert_eq!(map.end(), Coordinate::new(19, 30));
        assert_eq!(map.grid().get(Coordinate::new(0, 0)), Some(Cell::Wall));
    }

    #[test]
    fn test_map_new_valid_input() {
        let filename = OsString::from("test.labmap");
        let data = "2222\n2134\n2222";

        let map = Map::new(filename, data).expect("Failed to create map");

        assert_eq!(map.key(), "test");
        assert_eq!(map.start(), Coordinate::new(1, 1));
        assert_eq!(map.end(), Coordinate::new(1, 3));
        assert_eq!(map.grid().get(Coordinate::new(1, 2)), Some(Cell::Open));
        assert_eq!(map.grid().get(Coordinate::new(2, 2)), Some(Cell::Wall));
    }

    #[test]
    fn test_map_new_single_line() {
        let filename = OsString::from("single.labmap");
        let data = "1333334";

        let map = Map::new(filename, data).expect("Failed to create map");

        assert_eq!(map.key(), "single");
        assert_eq!(map.grid().rows(), 1);
        assert_eq!(map.end(), Coordinate::new(0, 6));
    }

    #[test]
    fn test_map_new_surrounding_whitespace() {
        let filename = OsString::from("padded.labmap");
        let data = "\n  14\n";

        let map = Map::new(filename, data).expect("Failed to create map");

        assert_eq!(map.grid().cols(), 2);
    }

    #[test]
    fn test_map_new_empty_data() {
        let filename = OsString::from("empty.labmap");

        let result = Map::new(filename, "");
        assert!(result.is_err());
    }

    #[test]
    fn test_map_new_missing_extension() {
        let filename = OsString::from("noextension");
        let data = "14";

        let result = Map::new(filename, data);
        assert!(result.is_err());
    }

    #[test]
    fn test_map_new_wrong_extension() {
        let filename = OsString::from("test.txt");
        let data = "14";

        let result = Map::new(filename, data);
        assert!(result.is_err());
    }

    #[test]
    fn test_map_new_multiple_extensions() {
        let filename = OsString::from("test.backup.labmap");
        let data = "2222\n1334";

        let map = Map::new(filename, data).expect("Failed to create map");

        assert_eq!(map.key(), "test.backup");
    }

    #[test]
    fn test_parse_labmap_ragged() {
        let error = parse_labmap("2222\n134\n2222").expect_err("ragged map should be rejected");

        assert_eq!(
            error.downcast_ref::<InvalidGridError>(),
            Some(&InvalidGridError::Ragged {
                row: 1,
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_parse_labmap_invalid_character() {
        assert!(parse_labmap("2222\n21x4\n2222").is_err());
    }

    #[test]
    fn test_parse_labmap_endpoint_counts() {
        assert!(parse_labmap("2222\n2334\n2222").is_err(), "no entry");
        assert!(parse_labmap("2222\n2113\n2224").is_err(), "two entries");
        assert!(parse_labmap("2222\n2133\n2222").is_err(), "no exit");
        assert!(parse_labmap("2224\n2134\n2222").is_err(), "two exits");
    }

    #[test]
    fn test_with_endpoints() {
        let map = Map::new("m.labmap".into(), "1333\n2223\n4333").expect("Failed to create map");

        let moved = map
            .clone()
            .with_endpoints(Coordinate::new(0, 3), Coordinate::new(2, 1))
            .expect("both cells are open");
        assert_eq!(moved.start(), Coordinate::new(0, 3));
        assert_eq!(moved.end(), Coordinate::new(2, 1));
        assert_eq!(moved.grid(), map.grid());

        assert_eq!(
            map.with_endpoints(Coordinate::new(1, 0), Coordinate::new(2, 1)),
            Err(InvalidEndpointError::Wall {
                cell: Coordinate::new(1, 0)
            })
        );
    }

    #[test]
    fn test_from_grid_out_of_bounds() {
        let grid = Grid::filled(2, 2, Cell::Open).expect("grid should be valid");

        assert!(matches!(
            Map::from_grid(
                "g".to_owned(),
                grid,
                Coordinate::new(0, 0),
                Coordinate::new(2, 2)
            ),
            Err(InvalidEndpointError::OutOfBounds { .. })
        ));
    }
}
