//! Command-line configuration of the solver binary.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::types::Coordinate;

/// Solve a labyrinth with a bidirectional breadth-first search.
///
/// The solved maze is printed with `S` and `E` marking the endpoints and `*` marking the path.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a .labmap file to solve; the built-in map is used when omitted
    #[arg(value_name = "MAP")]
    pub map: Option<PathBuf>,

    /// Generate a random SIZE x SIZE maze instead of loading one
    #[arg(short, long, value_name = "SIZE", conflicts_with = "map")]
    pub generate: Option<usize>,

    /// Seed for the maze generator
    #[arg(long, requires = "generate")]
    pub seed: Option<u64>,

    /// Start cell, overriding the one the map defines
    #[arg(long, value_name = "ROW,COL")]
    pub start: Option<Coordinate>,

    /// End cell, overriding the one the map defines
    #[arg(long, value_name = "ROW,COL")]
    pub end: Option<Coordinate>,

    /// List the .labmap files in --dir and exit
    #[arg(short, long)]
    pub list: bool,

    /// Directory scanned by --list
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Mark the cells expanded by each side of the search ('.' start side, ',' end side)
    #[arg(short, long)]
    pub explored: bool,

    /// Abort the search after this many cell expansions
    #[arg(long, value_name = "CELLS")]
    pub limit: Option<usize>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
