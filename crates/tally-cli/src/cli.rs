use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::add::AddArgs;
use crate::commands::chart::ChartArgs;
use crate::commands::set::SetArgs;

#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Local score database for rhythm-game plays")]
#[command(version)]
pub struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, default_value = "tally.toml")]
    pub config: PathBuf,

    /// Score database path (overrides the config file)
    #[arg(long, env = "TALLY_DB")]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Record a finished play
    Add(AddArgs),
    /// List scores for one chart, best first
    Chart(ChartArgs),
    /// List scores for every version of a chart set
    Set(SetArgs),
    /// Print every stored score, oldest first
    Dump {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Tsv,
    Json,
}
