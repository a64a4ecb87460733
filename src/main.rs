//! CLI entry point for walking a self-tiling grid

use clap::Parser;
use tilewalk::io::cli::{Cli, WalkRunner};
use tilewalk::io::logging;

fn main() -> tilewalk::Result<()> {
    let cli = Cli::parse();
    logging::init(logging::level_for(cli.verbose, cli.quiet))?;
    WalkRunner::new(cli).run()?;
    Ok(())
}
