//! CLI entry point for kolam pattern generation

use clap::Parser;
use kolamgen::io::cli::{Cli, PatternProcessor};

fn main() -> kolamgen::Result<()> {
    let cli = Cli::parse();
    let mut processor = PatternProcessor::new(cli);
    processor.process()
}
