use anyhow::Result;
use clap::Parser;
use moneysheet::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
