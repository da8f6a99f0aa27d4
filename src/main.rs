//! This crate contains the source code for the binary of the labyrinth solver bilabyrinth.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use std::io;

use bilabyrinth::{app, App, Cli};
use clap::Parser as _;
use color_eyre::{eyre::Result, install};

fn main() -> Result<()> {
    install()?;

    let cli = Cli::parse();
    app::init_logging(cli.verbose)?;
    App::new(cli).run(&mut io::stdout().lock())?;

    Ok(())
}
