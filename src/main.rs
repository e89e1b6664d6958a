//! CLI entry point for the tileset splitting tool

use clap::Parser;
use tilesplit::io::cli::{Cli, ExportRunner};

fn main() -> tilesplit::Result<()> {
    let cli = Cli::parse();
    let runner = ExportRunner::new(cli);
    runner.run()
}
