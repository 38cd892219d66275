
mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{assign, roads};

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    match &cli.command {
        Commands::Assign(args) => assign::run(&cli, args),
        Commands::Roads(args) => roads::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }
