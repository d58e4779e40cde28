//! CLI entry point for the binary pattern pixelation filter

use binpix::io::cli::{Cli, JobRunner};
use clap::Parser;

fn main() -> binpix::Result<()> {
    let cli = Cli::parse();
    let mut runner = JobRunner::new(cli);
    runner.run()
}
