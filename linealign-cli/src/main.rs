//! linealign command-line entry point

use clap::Parser;
use linealign_cli::commands::Cli;
use linealign_cli::CliResult;

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
