//! CLI entry point for hitomezashi pattern generation

use clap::Parser;
use hitomezashi::io::cli::{Cli, FileProcessor};

fn main() -> hitomezashi::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
