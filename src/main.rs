//! CLI entry point for the site layout generator

use clap::Parser;
use siteplan::io::cli::{Cli, SiteProcessor, init_logging};

fn main() -> siteplan::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;
    let processor = SiteProcessor::new(cli);
    processor.process()
}
