use std::path::Path;

use anyhow::{Context, Result, bail};
use borders::{Report, read_problem, roads_listing};

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::AssignArgs) -> Result<()> {
    if let Some(output) = &args.output {
        if output == Path::new("-") { bail!("use no --output to write to stdout."); }
    }

    let problem = read_problem(&args.input)?;
    let mut partition = problem.partition()
        .with_context(|| format!("[assign] Invalid problem in {}", args.input.display()))?;

    if cli.verbose > 0 {
        eprintln!(
            "[assign] {} towns, {} roads, {} countries",
            problem.num_towns,
            problem.roads.len(),
            problem.seeds.len(),
        );
    }
    if cli.verbose > 1 { eprint!("{}", roads_listing(partition.graph())); }

    let growth = partition.grow(cli.verbose)
        .with_context(|| format!("[assign] Failed to assign towns from {}", args.input.display()))?;

    if cli.verbose > 0 {
        eprintln!("[assign] done after {} turns, {} towns claimed", growth.turns, growth.claims.len());
    }

    let report = Report::new(&partition, &growth);
    match &args.output {
        Some(path) => {
            report.write_to_file(path, args.format.into())?;
            if cli.verbose > 0 { eprintln!("[assign] wrote report -> {}", path.display()); }
        }
        None => report.write_to(&mut std::io::stdout().lock(), args.format.into())?,
    }

    Ok(())
}
