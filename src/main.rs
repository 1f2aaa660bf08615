//! CLI entry point for the field of view walking demo

use clap::Parser;
use shadowfov::io::cli::{Cli, Demo};
use shadowfov::io::logging;

fn main() -> shadowfov::Result<()> {
    let cli = Cli::parse();
    logging::init(logging::level_for(cli.verbose, cli.quiet))?;
    Demo::new(cli).run()
}
