//! Core application state and logic for the solver binary.

use std::{fs, io::Write};

use color_eyre::eyre::{eyre, OptionExt as _, Result, WrapErr as _};
use rand::{rngs::StdRng, SeedableRng as _};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use crate::{
    cli::Cli,
    errors::SolveError,
    events::{Exploration, Recorder},
    file_loader, generator,
    map::Map,
    pathfinding::PathFinder,
    ui,
};

/// Installs the global `tracing` subscriber, writing to stderr.
///
/// The verbosity count selects the level: none defers to `RUST_LOG` and falls back to warnings,
/// then each repetition lowers the threshold through info, debug and trace.
///
/// # Errors
///
/// This function returns an error if a global subscriber is already installed.
pub fn init_logging(verbosity: u8) -> Result<()> {
    let filter = match verbosity {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| eyre!("failed to install logger: {error}"))
}

/// Application state container for the solver binary.
///
/// This structure holds the parsed command line and turns it into a single run: pick a map, solve
/// it, and write the result.
#[derive(Debug)]
pub struct App {
    /// Command-line configuration.
    ///
    /// This field holds every option the user passed, deciding which map gets solved, between
    /// which cells, and how much of the search is shown.
    cli: Cli,
}

impl App {
    /// Creates a new instance of the App structure from the parsed command line.
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Runs the application, writing everything it prints to `out`.
    ///
    /// This function either lists the available maps or solves one and writes its rendering
    /// followed by a one-line summary.
    ///
    /// # Errors
    ///
    /// This function returns an error if the map cannot be loaded or generated, if an endpoint
    /// override is invalid, or if writing to `out` fails.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.cli.list {
            return self.list(out);
        }

        let map = self.resolve_map()?;
        info!(
            map = map.key(),
            rows = map.grid().rows(),
            cols = map.grid().cols(),
            start = %map.start(),
            end = %map.end(),
            "solving map"
        );

        let finder = PathFinder::new(map.grid());
        let mut recorder = self
            .cli
            .limit
            .map_or_else(Recorder::new, Recorder::with_limit);
        let outcome = finder.solve(map.start(), map.end(), &mut recorder);
        let explored: &[Exploration] = if self.cli.explored {
            recorder.events()
        } else {
            &[]
        };

        match outcome {
            Ok(path) => {
                write!(out, "{}", ui::render(&map, path.as_ref(), explored))?;
                writeln!(out, "{}", ui::summary(path.as_ref(), &recorder))?;
            }
            Err(SolveError::Observer(limit)) => {
                warn!(%limit, "search aborted");
                write!(out, "{}", ui::render(&map, None, explored))?;
                writeln!(out, "search aborted: {limit}")?;
            }
            Err(SolveError::Endpoint(error)) => return Err(error.into()),
        }

        Ok(())
    }

    /// Writes the name and size of every map available in the configured directory.
    fn list<W: Write>(&self, out: &mut W) -> Result<()> {
        let mut maps = vec![Map::default()];
        file_loader::fetch_files(&self.cli.dir, &mut maps)?;

        for map in &maps {
            writeln!(
                out,
                "{}\t{}x{}",
                map.key(),
                map.grid().rows(),
                map.grid().cols()
            )?;
        }

        Ok(())
    }

    /// Picks the map to solve and applies the endpoint overrides.
    fn resolve_map(&self) -> Result<Map> {
        let map = if let Some(size) = self.cli.generate {
            let seed = self.cli.seed.unwrap_or_else(rand::random);
            info!(size, seed, "generating maze");
            generator::generate(size, size, &mut StdRng::seed_from_u64(seed))?
        } else if let Some(path) = &self.cli.map {
            let contents = fs::read_to_string(path)
                .wrap_err_with(|| format!("failed to read {}", path.display()))?;
            let file_name = path
                .file_name()
                .ok_or_eyre("map path does not name a file")?;
            Map::new(file_name.to_os_string(), &contents)?
        } else {
            Map::default()
        };

        if self.cli.start.is_none() && self.cli.end.is_none() {
            return Ok(map);
        }

        let start = self.cli.start.unwrap_or(map.start());
        let end = self.cli.end.unwrap_or(map.end());
        Ok(map.with_endpoints(start, end)?)
    }
}

#[cfg(test)]
mod tests {
    use std::{env, iter, process};

    use clap::Parser as _;

    use super::*;

    /// Runs the application with the given arguments and returns what it printed.
    fn run_with(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(iter::once("bilabyrinth").chain(args.iter().copied()))?;
        let mut out = Vec::new();
        App::new(cli).run(&mut out)?;

        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_run_default_map() {
        let output = run_with(&[]).expect("default map should solve");
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 22, "21 map rows and a summary");
        assert!(lines.first().is_some_and(|row| row.starts_with("#####")));
        assert!(lines.get(1).is_some_and(|row| row.starts_with("#S*")));
        assert!(lines
            .last()
            .is_some_and(|summary| summary.starts_with("path found: ")));
    }

    #[test]
    fn test_run_with_explored_cells() {
        let output = run_with(&["--explored"]).expect("default map should solve");
        let rows: Vec<&str> = output.lines().take(21).collect();

        assert!(
            rows.iter().any(|row| row.contains('.')),
            "start side expansions should show"
        );
        assert!(
            rows.iter().any(|row| row.contains(',')),
            "end side expansions should show"
        );
    }

    #[test]
    fn test_run_generated_is_reproducible() {
        let first = run_with(&["-g", "15", "--seed", "11"]).expect("generated maze should solve");
        let second = run_with(&["-g", "15", "--seed", "11"]).expect("generated maze should solve");

        assert_eq!(first, second);
        assert!(first.contains("path found: "), "generated mazes are solvable");
    }

    #[test]
    fn test_run_generate_too_small() {
        assert!(run_with(&["-g", "2"]).is_err());
    }

    #[test]
    fn test_run_generate_too_large() {
        let size = usize::MAX.to_string();
        let error = run_with(&["-g", &size]).expect_err("the maze cannot be allocated");

        assert!(
            error.to_string().contains("too large to allocate"),
            "unexpected error: {error}"
        );
    }

    #[test]
    fn test_run_endpoint_override() {
        let output = run_with(&["--start", "19,30", "--end", "19,30"])
            .expect("the exit cell is open");

        assert!(output.ends_with(
            "path found: 0 steps (0 cells expanded, 0 from the start and 0 from the end)\n"
        ));
    }

    #[test]
    fn test_run_endpoint_override_on_wall() {
        let error = run_with(&["--start", "0,0"]).expect_err("the corner is a wall");

        assert!(
            error.to_string().contains("is a wall"),
            "unexpected error: {error}"
        );
    }

    #[test]
    fn test_run_with_limit() {
        let output = run_with(&["--limit", "5"]).expect("aborted searches still print");

        assert!(output.ends_with("search aborted: exploration limit of 5 cells reached\n"));
    }

    #[test]
    fn test_run_map_file_and_list() {
        let dir = env::temp_dir().join(format!("bilabyrinth-{}-app", process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).expect("failed to create scratch directory");
        let file = dir.join("small.labmap");
        fs::write(&file, "22222\n21332\n23234\n22222").expect("failed to write map");

        let solved = run_with(&[file.to_str().expect("temp path should be UTF-8")])
            .expect("map file should solve");
        assert_eq!(
            solved,
            "#####\n#S**#\n# #*E\n#####\n\
             path found: 4 steps (5 cells expanded, 3 from the start and 2 from the end)\n"
        );

        let dir_arg = dir.to_str().expect("temp path should be UTF-8");
        let listed =
            run_with(&["--list", "--dir", dir_arg]).expect("directory should be readable");
        assert_eq!(listed, "Default\t21x31\nsmall\t4x5\n");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_run_missing_map_file() {
        assert!(run_with(&["/nonexistent/missing.labmap"]).is_err());
    }
}
