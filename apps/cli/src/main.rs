//! relink CLI — rewrite relative markdown links into absolute docs-site URLs.
//!
//! Reads a markdown document, rebases every relative inline-link target
//! onto a configured base URL (dropping the `.md` suffix), and writes the
//! result to stdout or back to the file.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
