//! WQ CLI - Command line tool for charting water-quality observations.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "wq-cli",
    version,
    about = "Water-quality box plot and comparison chart toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: wq_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    wq_cmd::run(cli.command)
}
