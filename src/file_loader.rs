//! File loading and validation utilities for labyrinth map files.

use std::{fs, path::Path};

use color_eyre::eyre::{OptionExt as _, Result, WrapErr as _};
use tracing::{debug, warn};

use crate::map::{self, Map, LABMAP_EXTENSION};

/// Scans a directory for .labmap files and loads them.
///
/// This function searches for files with the .labmap extension in `dir`, validates their format,
/// and adds them to the maps collection sorted by name. It skips invalid files, logging a warning
/// for each, and continues processing valid ones.
///
/// # Errors
///
/// This function returns an error if the directory or one of the map files cannot be read.
pub fn fetch_files(dir: &Path, maps: &mut Vec<Map>) -> Result<()> {
    let mut found = Vec::new();

    for file in fs::read_dir(dir).wrap_err_with(|| format!("failed to read {}", dir.display()))? {
        let file = file?;
        let file_name = file.file_name();
        let is_labmap = file_name
            .to_str()
            .ok_or_eyre("failed to convert osstring to string slice")?
            .ends_with(LABMAP_EXTENSION);

        if file.file_type()?.is_dir() || !is_labmap {
            continue;
        }

        let contents = fs::read_to_string(file.path())
            .wrap_err_with(|| format!("failed to read {}", file.path().display()))?;

        match Map::new(file_name, &contents) {
            Ok(map) => {
                debug!(file = %file.path().display(), "loaded map");
                found.push(map);
            }
            Err(error) => {
                warn!(file = %file.path().display(), "skipping invalid map file: {error:#}");
            }
        }
    }

    found.sort_by(|left, right| left.key().cmp(right.key()));
    maps.append(&mut found);

    Ok(())
}

/// Validates the format and content of labyrinth map files.
///
/// This function checks that the contents follow the `.labmap` format:
/// - Contains only valid characters (1-4)
/// - Has consistent row lengths
/// - Has exactly one entry point (1)
/// - Has exactly one exit point (4)
pub fn parse_file_contents(input: &str) -> bool {
    map::parse_labmap(input).is_ok()
}
