use anyhow::Result;
use clap::Parser;

use tabscan::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // A failed lookup propagates here and terminates the process with a
    // non-zero exit and the diagnostic on stderr.
    cli.command.execute()?;

    Ok(())
}
