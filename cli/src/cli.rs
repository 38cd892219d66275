use std::path::PathBuf;

/// Round-robin territory growth over a road network
#[derive(clap::Parser, Debug)]
#[command(name = "borders", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Assign every town to a country by growing from the seed towns
    Assign(AssignArgs),

    /// Print the adjacency list of every town
    Roads(RoadsArgs),
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl From<OutputFormat> for borders::ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => borders::ReportFormat::Text,
            OutputFormat::Json => borders::ReportFormat::Json,
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct AssignArgs {
    /// Problem file: town and road counts, roads, country count, seeds
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Output report file, defaults to stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(clap::Args, Debug)]
pub struct RoadsArgs {
    /// Problem file to read the road network from
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,
}
