use anyhow::Result;
use clap::Parser;

use gitignore_sync::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
