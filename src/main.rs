//! CLI entry point for the slide mosaic preview tool

use clap::Parser;
use slidemosaic::io::cli::{Cli, MosaicProcessor};

fn main() -> slidemosaic::Result<()> {
    let cli = Cli::parse();
    let mut processor = MosaicProcessor::new(cli);
    processor.process()
}
