//! CLI entry point for lesion photo analysis

use clap::Parser;
use lesionlens::io::cli::{Cli, FileProcessor};
use lesionlens::io::logging::init_logging;

fn main() -> lesionlens::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet);
    let mut processor = FileProcessor::new(cli);
    processor.process().map(|_summary| ())
}
