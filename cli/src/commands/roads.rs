use anyhow::Result;
use borders::{read_problem, roads_listing};

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::RoadsArgs) -> Result<()> {
    if cli.verbose > 0 { eprintln!("[roads] reading {}", args.input.display()); }

    let graph = read_problem(&args.input)?.graph()?;
    print!("{}", roads_listing(&graph));

    Ok(())
}
